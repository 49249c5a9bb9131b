//! Filter configuration.
//!
//! A `FilterConfig` is read once per run (usually from a JSON file) and
//! handed to every filter and to the sorter. Keys follow the camelCase
//! names the filters are known by: `languages`, `maxSize`,
//! `exclusionKeywords`, `exclusion`, `resultsPerQuality`, `sort`.

use crate::parser;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Options consumed by the filters and the sorter.
///
/// Every key is optional; a missing key leaves the corresponding filter
/// as a pass-through.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterConfig {
    /// Accepted language codes
    pub languages: Vec<String>,

    /// Maximum release size in bytes (movies only)
    #[serde(deserialize_with = "parser::deserialize_optional_size")]
    pub max_size: Option<u64>,

    /// Keywords that exclude a release when found in its title
    pub exclusion_keywords: Vec<String>,

    /// Quality labels to exclude (`unknown` covers missing qualities)
    pub exclusion: Vec<String>,

    /// Maximum number of results kept per quality
    pub results_per_quality: Option<usize>,

    /// Sort mode name, see [`SortMode`]
    pub sort: Option<String>,
}

impl FilterConfig {
    /// Sort mode selected by the `sort` key
    pub fn sort_mode(&self) -> SortMode {
        self.sort
            .as_deref()
            .map(SortMode::from_name)
            .unwrap_or(SortMode::Unsorted)
    }
}

/// How the final list is ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortMode {
    /// Best quality first
    Quality,
    /// Smallest first
    SizeAsc,
    /// Largest first
    SizeDesc,
    /// Best quality first, larger releases first within a quality
    QualityThenSize,
    /// Keep input order
    Unsorted,
}

impl SortMode {
    /// Map a configured name to a mode. Unsupported names keep input order.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "quality" => SortMode::Quality,
            "sizeasc" => SortMode::SizeAsc,
            "sizedesc" => SortMode::SizeDesc,
            "qualitythensize" => SortMode::QualityThenSize,
            _ => SortMode::Unsorted,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SortMode::Quality => "quality",
            SortMode::SizeAsc => "sizeasc",
            SortMode::SizeDesc => "sizedesc",
            SortMode::QualityThenSize => "qualitythensize",
            SortMode::Unsorted => "none",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
