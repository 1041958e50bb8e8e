//! Planet model (`planets/?page=n`).

use serde::{Deserialize, Serialize};

/// A planet from the `planets` resource.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Planet {
    pub name: String,
    pub climate: String,
    pub terrain: String,
    pub population: String,

    /// Diameter in kilometres, as a string
    pub diameter: String,
}

impl Planet {
    pub fn population(&self) -> Option<u64> {
        super::parse_number(&self.population).map(|n| n as u64)
    }
}
