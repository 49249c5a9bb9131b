//! Pipeline for filtering and ordering release candidates.
//!
//! This crate provides:
//! - Filter trait and the five standard filters
//! - SeasonEpisodeMatcher for pruning series results by their titles
//! - FilterChain for running filters with per-stage failure isolation
//! - Sorting of the final list by quality and/or size
//!
//! ## Architecture
//! Candidates go through these stages:
//! 1. Series requests only: the matcher drops releases whose titles can't
//!    contain the requested episode
//! 2. The filter chain: languages, max size, title keywords, quality
//!    exclusion, results per quality
//! 3. Optionally, the sorter
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{filter_items, sort_items};
//! use release_data::{FilterConfig, MediaRequest};
//!
//! let request = MediaRequest::series("S02", "E05")?;
//! let filtered = filter_items(&candidates, &request, &config)?;
//! let ordered = sort_items(&filtered, &config);
//! ```

pub mod error;
pub mod filter_chain;
pub mod filters;
pub mod season_episode;
pub mod sort;
pub mod traits;

// Re-export main types
pub use error::{FilterError, MatchError};
pub use filter_chain::{FilterChain, filter_items, filter_items_with};
pub use season_episode::SeasonEpisodeMatcher;
pub use sort::{sort_by_mode, sort_items};
pub use traits::Filter;
