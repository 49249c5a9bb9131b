//! Filter to drop releases of unwanted qualities.

use crate::error::FilterError;
use crate::traits::Filter;
use anyhow::Result;
use release_data::{Candidate, FilterConfig, Quality};
use std::collections::HashSet;

const UNKNOWN_LABEL: &str = "unknown";

/// Removes candidates whose quality is in the exclusion list.
///
/// The label `unknown` covers candidates with a missing or unrecognised
/// quality. Any other label must be one of the known tiers.
pub struct QualityExclusionFilter {
    excluded: Vec<String>,
}

impl QualityExclusionFilter {
    pub const NAME: &'static str = "exclusion";

    pub fn new(excluded: Vec<String>) -> Self {
        Self { excluded }
    }

    pub fn from_config(config: &FilterConfig) -> Self {
        Self::new(config.exclusion.clone())
    }

    /// Resolve the configured labels into tiers plus the `unknown` flag.
    fn resolve(&self) -> Result<(HashSet<Quality>, bool), FilterError> {
        let mut tiers = HashSet::new();
        let mut unknown = false;

        for label in &self.excluded {
            if label.trim().eq_ignore_ascii_case(UNKNOWN_LABEL) {
                unknown = true;
                continue;
            }
            let tier = Quality::from_label(label).ok_or_else(|| FilterError::InvalidSetting {
                filter: Self::NAME,
                reason: format!("unknown quality label {:?}", label),
            })?;
            tiers.insert(tier);
        }

        Ok((tiers, unknown))
    }
}

impl Filter for QualityExclusionFilter {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn setting(&self) -> String {
        format!("{:?}", self.excluded)
    }

    fn apply(&self, candidates: &[Candidate]) -> Result<Vec<Candidate>> {
        let (tiers, exclude_unknown) = self.resolve()?;

        Ok(candidates
            .iter()
            .filter(|candidate| match candidate.quality_tier() {
                Some(tier) => !tiers.contains(&tier),
                None => !exclude_unknown,
            })
            .cloned()
            .collect())
    }
}
