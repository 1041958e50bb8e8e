//! Character model (`people/{id}`).

use serde::{Deserialize, Serialize};

/// A person from the `people` resource.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Character {
    pub name: String,

    /// Height in centimetres, as a string
    #[serde(default)]
    pub height: String,

    /// Mass in kilograms, as a string
    #[serde(default)]
    pub mass: String,

    #[serde(default)]
    pub hair_color: String,
    #[serde(default)]
    pub skin_color: String,
    #[serde(default)]
    pub eye_color: String,

    /// BBY/ABY notation, e.g. "19BBY"
    #[serde(default)]
    pub birth_year: String,

    #[serde(default)]
    pub gender: String,

    /// URLs of the films this character appears in
    #[serde(default)]
    pub films: Vec<String>,
}

impl Character {
    /// Body mass index, when both height and mass are known.
    pub fn bmi(&self) -> Option<f64> {
        let height_m = super::parse_number(&self.height)? / 100.0;
        let mass = super::parse_number(&self.mass)?;
        if height_m <= 0.0 {
            return None;
        }
        Some(mass / (height_m * height_m))
    }
}
