//! Typed views over SWAPI resources.
//!
//! The fetcher hands out raw JSON; these structs are decoded from it by the
//! service layer. SWAPI encodes most numbers as strings and uses `"unknown"`
//! or `"n/a"` for missing values, so numeric fields stay `String` and are
//! read through [`parse_number`].

pub mod character;
pub mod film;
pub mod planet;
pub mod starship;
pub mod vehicle;

pub use character::Character;
pub use film::Film;
pub use planet::Planet;
pub use starship::Starship;
pub use vehicle::Vehicle;

use serde::{Deserialize, Serialize};

/// A paginated list response (`starships/?page=n`, `planets/?page=n`, `films/`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Page<T> {
    /// Total number of items across all pages
    #[serde(default)]
    pub count: u64,

    /// URL of the next page, if any
    #[serde(default)]
    pub next: Option<String>,

    /// URL of the previous page, if any
    #[serde(default)]
    pub previous: Option<String>,

    /// Items on this page
    pub results: Vec<T>,
}

impl<T> Page<T> {
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}

/// Parse a SWAPI numeric string such as `"200000"`, `"1,000"` or `"1.5"`.
///
/// Returns `None` for `"unknown"`, `"n/a"`, ranges like `"30-165"` and
/// anything else that is not a plain number.
pub fn parse_number(raw: &str) -> Option<f64> {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|n| n.is_finite())
}
