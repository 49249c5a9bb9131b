//! Filter to drop oversized movie releases.
//!
//! Series results are left alone: season packs are legitimately large and
//! a single size cap doesn't fit them.

use crate::traits::Filter;
use anyhow::Result;
use release_data::{Candidate, FilterConfig, MediaType};

/// Removes movie candidates larger than the configured maximum.
pub struct MaxSizeFilter {
    max_size: Option<u64>,
    media_type: MediaType,
}

impl MaxSizeFilter {
    pub const NAME: &'static str = "maxSize";

    /// # Arguments
    /// * `max_size` - Maximum size in bytes, `None` or `0` for no limit
    /// * `media_type` - Kind of media the candidates were searched for
    pub fn new(max_size: Option<u64>, media_type: MediaType) -> Self {
        Self {
            max_size,
            media_type,
        }
    }

    pub fn from_config(config: &FilterConfig, media_type: MediaType) -> Self {
        Self::new(config.max_size, media_type)
    }

    fn limit(&self) -> Option<u64> {
        match (self.media_type, self.max_size) {
            (MediaType::Movie, Some(max)) if max > 0 => Some(max),
            _ => None,
        }
    }
}

impl Filter for MaxSizeFilter {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn setting(&self) -> String {
        match self.limit() {
            Some(max) => format!("{} bytes", max),
            None => format!("no limit ({})", self.media_type),
        }
    }

    fn apply(&self, candidates: &[Candidate]) -> Result<Vec<Candidate>> {
        let Some(max) = self.limit() else {
            return Ok(candidates.to_vec());
        };

        Ok(candidates
            .iter()
            .filter(|candidate| candidate.size <= max)
            .cloned()
            .collect())
    }
}
