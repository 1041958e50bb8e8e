//! Starship model (`starships/?page=n`).

use serde::{Deserialize, Serialize};

/// A starship from the `starships` resource.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Starship {
    pub name: String,
    pub model: String,
    pub manufacturer: String,
    pub starship_class: String,

    /// Crew size; may be a range such as "30-165"
    pub crew: String,

    pub passengers: String,
    pub hyperdrive_rating: String,
    pub cost_in_credits: String,
}

impl Starship {
    pub fn hyperdrive_rating(&self) -> Option<f64> {
        super::parse_number(&self.hyperdrive_rating)
    }

    /// Crew size; for ranges the upper bound.
    pub fn crew(&self) -> Option<u64> {
        let upper = self.crew.rsplit('-').next().unwrap_or(&self.crew);
        super::parse_number(upper).map(|n| n as u64)
    }
}
