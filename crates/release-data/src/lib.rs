//! # Release Data Crate
//!
//! Domain types and loading for release filtering.
//!
//! ## Main Components
//!
//! - **types**: `Candidate`, `Quality`, `QualityRank`, `Token`, `MediaRequest`
//! - **config**: `FilterConfig` and `SortMode`
//! - **parser**: token, size and JSON parsing
//! - **loader**: read candidate lists and configuration files
//! - **error**: error types for loading and parsing
//!
//! ## Example Usage
//!
//! ```ignore
//! use release_data::{load_run_inputs, MediaRequest};
//! use std::path::Path;
//!
//! let (candidates, config) =
//!     load_run_inputs(Path::new("results.json"), Some(Path::new("filters.json")))?;
//! let request = MediaRequest::series("S02", "E05")?;
//! ```

pub mod config;
pub mod error;
pub mod loader;
pub mod parser;
pub mod types;

pub use config::{FilterConfig, SortMode};
pub use error::{DataLoadError, Result};
pub use loader::{load_candidates, load_config, load_run_inputs};
pub use types::{Candidate, MediaRequest, MediaType, Quality, QualityRank, Token, TokenKind};
