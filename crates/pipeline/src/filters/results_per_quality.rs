//! Filter to cap how many results each quality contributes.

use crate::traits::Filter;
use anyhow::Result;
use release_data::{Candidate, FilterConfig, Quality};
use std::collections::HashMap;

/// Keeps at most N candidates per quality.
///
/// ## Algorithm
/// Walk the candidates in order and count per bucket. Recognised tiers are
/// their own buckets; missing and unrecognised qualities share one. The
/// first N of each bucket survive.
pub struct ResultsPerQualityFilter {
    limit: Option<usize>,
}

impl ResultsPerQualityFilter {
    pub const NAME: &'static str = "resultsPerQuality";

    /// # Arguments
    /// * `limit` - Maximum per quality, `None` or `0` for no cap
    pub fn new(limit: Option<usize>) -> Self {
        Self { limit }
    }

    pub fn from_config(config: &FilterConfig) -> Self {
        Self::new(config.results_per_quality)
    }
}

impl Filter for ResultsPerQualityFilter {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn setting(&self) -> String {
        match self.limit {
            Some(limit) if limit > 0 => limit.to_string(),
            _ => "unlimited".to_string(),
        }
    }

    fn apply(&self, candidates: &[Candidate]) -> Result<Vec<Candidate>> {
        let limit = match self.limit {
            Some(limit) if limit > 0 => limit,
            _ => return Ok(candidates.to_vec()),
        };

        let mut seen: HashMap<Option<Quality>, usize> = HashMap::new();
        let filtered: Vec<Candidate> = candidates
            .iter()
            .filter(|candidate| {
                let count = seen.entry(candidate.quality_tier()).or_insert(0);
                *count += 1;
                *count <= limit
            })
            .cloned()
            .collect();
        Ok(filtered)
    }
}
