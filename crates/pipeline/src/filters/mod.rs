//! Filter implementations for the release pipeline.
//!
//! This module contains the concrete filters the standard FilterChain is
//! built from, one per configuration key.

pub mod language;
pub mod max_size;
pub mod quality_exclusion;
pub mod results_per_quality;
pub mod title_exclusion;

// Re-export for convenience
pub use language::LanguageFilter;
pub use max_size::MaxSizeFilter;
pub use quality_exclusion::QualityExclusionFilter;
pub use results_per_quality::ResultsPerQualityFilter;
pub use title_exclusion::TitleExclusionFilter;
