// File: crates/laureates/src/record.rs
// Summary: One laureate-award row as read from the CSV.

use serde::{Deserialize, Deserializer};

/// A single award event. Columns other than these three are ignored on load.
/// Text fields are kept exactly as written in the CSV.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Record {
    #[serde(deserialize_with = "trimmed_year")]
    pub year: i32,
    pub category: String,
    #[serde(default)]
    pub fullname: String,
}

impl Record {
    pub fn new(year: i32, category: impl Into<String>, fullname: impl Into<String>) -> Self {
        Self { year, category: category.into(), fullname: fullname.into() }
    }

    /// Display name of the laureate.
    pub fn name(&self) -> &str { &self.fullname }
}

/// Integer year, tolerating whitespace around the digits.
fn trimmed_year<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i32, D::Error> {
    let raw = String::deserialize(deserializer)?;
    raw.trim()
        .parse()
        .map_err(|e| serde::de::Error::custom(format!("invalid year {raw:?}: {e}")))
}
