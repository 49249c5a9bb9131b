//! Filter to drop releases whose title contains an excluded keyword.

use crate::error::FilterError;
use crate::traits::Filter;
use anyhow::Result;
use release_data::{Candidate, FilterConfig};

/// Removes candidates whose title contains any configured keyword.
///
/// Matching is a case-insensitive substring search, so `cam` also
/// excludes `HDCAM`.
pub struct TitleExclusionFilter {
    keywords: Vec<String>,
}

impl TitleExclusionFilter {
    pub const NAME: &'static str = "exclusionKeywords";

    pub fn new(keywords: Vec<String>) -> Self {
        Self { keywords }
    }

    pub fn from_config(config: &FilterConfig) -> Self {
        Self::new(config.exclusion_keywords.clone())
    }
}

impl Filter for TitleExclusionFilter {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn setting(&self) -> String {
        format!("{:?}", self.keywords)
    }

    fn apply(&self, candidates: &[Candidate]) -> Result<Vec<Candidate>> {
        // A blank keyword would match every title
        if self.keywords.iter().any(|keyword| keyword.trim().is_empty()) {
            return Err(FilterError::InvalidSetting {
                filter: Self::NAME,
                reason: "blank keyword".to_string(),
            }
            .into());
        }

        let keywords: Vec<String> = self.keywords.iter().map(|k| k.trim().to_uppercase()).collect();

        Ok(candidates
            .iter()
            .filter(|candidate| {
                let title = candidate.title.to_uppercase();
                !keywords.iter().any(|keyword| title.contains(keyword.as_str()))
            })
            .cloned()
            .collect())
    }
}
