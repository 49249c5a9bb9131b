//! Error types for the pipeline crate.

use thiserror::Error;

/// Raised by the season/episode matcher.
///
/// Tokens are extracted with an ASCII-digit pattern, so the only way to
/// get here is a number too large for a `u32`. That is treated as bad
/// input and surfaced instead of guessing a number.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    #[error("Malformed {kind} token {token:?} in title {title:?}")]
    MalformedToken {
        kind: &'static str,
        token: String,
        title: String,
    },
}

/// Raised by filters when they can't run.
#[derive(Error, Debug)]
pub enum FilterError {
    /// The configuration value for this filter is unusable
    #[error("Invalid setting for {filter}: {reason}")]
    InvalidSetting { filter: &'static str, reason: String },
}
