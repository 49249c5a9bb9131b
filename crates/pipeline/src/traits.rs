//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that every stage of the
//! FilterChain implements.

use anyhow::Result;
use release_data::Candidate;

/// A single stage of the filter chain.
///
/// ## Design Note
/// - `Send + Sync` allows one chain to serve concurrent requests
/// - Filters borrow the candidate list and return a new one. The chain
///   keeps the borrowed list when a stage fails, so a broken stage
///   can't take the results down with it.
pub trait Filter: Send + Sync {
    /// Returns the name of this filter, which is also its configuration key
    fn name(&self) -> &str;

    /// Short description of the setting driving this filter (for logging)
    fn setting(&self) -> String;

    /// Apply this filter to a set of candidates.
    ///
    /// # Returns
    /// * `Ok(Vec<Candidate>)` - The candidates this filter keeps, in input order
    /// * `Err` - If the filter can't run, e.g. because its setting is invalid
    fn apply(&self, candidates: &[Candidate]) -> Result<Vec<Candidate>>;
}
