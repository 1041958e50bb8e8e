//! Vehicle model (`vehicles/{id}`).

use serde::{Deserialize, Serialize};

/// A vehicle from the `vehicles` resource.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Vehicle {
    pub name: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub manufacturer: String,
    #[serde(default)]
    pub vehicle_class: String,
    #[serde(default)]
    pub crew: String,
    #[serde(default)]
    pub passengers: String,
    #[serde(default)]
    pub cost_in_credits: String,
}
