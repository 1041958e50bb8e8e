//! Film model (`films/`).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A film from the `films` resource.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Film {
    pub title: String,
    pub episode_id: u32,
    pub director: String,

    /// ISO date, e.g. "1977-05-25"
    pub release_date: String,
}

impl Film {
    /// The release date, if it is a valid `YYYY-MM-DD` string.
    pub fn released_on(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.release_date, "%Y-%m-%d").ok()
    }
}
