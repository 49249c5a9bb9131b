//! Ordering of the final result list.
//!
//! Every mode uses a stable sort, so candidates with equal keys keep their
//! relative input order.

use release_data::{Candidate, FilterConfig, SortMode};
use std::cmp::Reverse;

/// Sort candidates according to the configured `sort` mode.
///
/// Returns the candidates in input order when no mode, or an unsupported
/// one, is configured.
pub fn sort_items(candidates: &[Candidate], config: &FilterConfig) -> Vec<Candidate> {
    sort_by_mode(candidates, config.sort_mode())
}

pub fn sort_by_mode(candidates: &[Candidate], mode: SortMode) -> Vec<Candidate> {
    let mut sorted = candidates.to_vec();
    match mode {
        SortMode::Quality => sorted.sort_by_key(Candidate::quality_rank),
        SortMode::SizeAsc => sorted.sort_by_key(|c| c.size),
        SortMode::SizeDesc => sorted.sort_by_key(|c| Reverse(c.size)),
        SortMode::QualityThenSize => sorted.sort_by_key(|c| (c.quality_rank(), Reverse(c.size))),
        SortMode::Unsorted => {}
    }
    sorted
}
