//! Country record as returned by the upstream API.
//!
//! Records are transient: decoded per request from upstream JSON and
//! re-serialized into the response with the same field names.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Common and official name of a country.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CountryName {
    #[serde(default)]
    pub common: String,

    #[serde(default)]
    pub official: String,
}

/// One country's data.
///
/// # JSON Example
///
/// ```json
/// {
///   "name": { "common": "Belgium", "official": "Kingdom of Belgium" },
///   "capital": ["Brussels"],
///   "population": 11555997,
///   "region": "Europe",
///   "languages": { "deu": "German", "fra": "French", "nld": "Dutch" },
///   "area": 30528.0
/// }
/// ```
///
/// Missing fields decode to their empty value; unknown upstream fields are
/// ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Country {
    #[serde(default)]
    pub name: CountryName,

    /// Capital cities, in upstream order. Some territories have none.
    #[serde(default)]
    pub capital: Vec<String>,

    #[serde(default)]
    pub population: u64,

    #[serde(default)]
    pub region: String,

    /// Language code → display name (e.g. `"fra" → "French"`).
    ///
    /// Ordered map so the response lists codes deterministically.
    #[serde(default)]
    pub languages: BTreeMap<String, String>,

    /// Area in square kilometres.
    #[serde(default)]
    pub area: f64,
}

impl Country {
    /// True if any of this country's language display names equals `language`.
    ///
    /// Matching is exact and case-sensitive.
    pub fn speaks(&self, language: &str) -> bool {
        self.languages.values().any(|name| name == language)
    }
}
