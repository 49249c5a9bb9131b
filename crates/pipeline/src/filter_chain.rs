//! The FilterChain orchestrates the filter stages.
//!
//! This module provides the FilterChain struct that runs filters in order,
//! and the `filter_items` entry point that puts the season/episode matcher
//! in front of it for series requests.

use crate::error::MatchError;
use crate::filters::{
    LanguageFilter, MaxSizeFilter, QualityExclusionFilter, ResultsPerQualityFilter,
    TitleExclusionFilter,
};
use crate::season_episode::SeasonEpisodeMatcher;
use crate::traits::Filter;
use release_data::{Candidate, FilterConfig, MediaRequest, MediaType};
use tracing::{error, info};

/// Runs filters one after another, each on the output of the previous one.
///
/// ## Usage
/// ```ignore
/// let chain = FilterChain::new()
///     .add_filter(LanguageFilter::new(vec!["en".into()]))
///     .add_filter(ResultsPerQualityFilter::new(Some(5)));
///
/// let filtered = chain.apply(candidates);
/// ```
///
/// Filtering is best effort. When a stage fails, the failure is logged and
/// the chain carries on with the list that stage was given.
pub struct FilterChain {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterChain {
    /// Create a new empty FilterChain.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// The standard chain: languages, max size, title keywords, quality
    /// exclusion, results per quality.
    pub fn standard(config: &FilterConfig, media_type: MediaType) -> Self {
        Self::new()
            .add_filter(LanguageFilter::from_config(config))
            .add_filter(MaxSizeFilter::from_config(config, media_type))
            .add_filter(TitleExclusionFilter::from_config(config))
            .add_filter(QualityExclusionFilter::from_config(config))
            .add_filter(ResultsPerQualityFilter::from_config(config))
    }

    /// Add a filter to the end of the chain (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Names of the stages, in the order they run
    pub fn names(&self) -> Vec<&str> {
        self.filters.iter().map(|filter| filter.name()).collect()
    }

    /// Apply all filters in sequence to the candidates.
    ///
    /// ## Algorithm
    /// 1. Start with the input candidates
    /// 2. For each filter in order:
    ///    a. Log filter name and setting
    ///    b. Apply the filter to the current list
    ///    c. On success, continue with its output and log the new count
    ///    d. On failure, log the error and continue with the current list
    /// 3. Return the final list
    pub fn apply(&self, candidates: Vec<Candidate>) -> Vec<Candidate> {
        let mut current = candidates;
        for filter in &self.filters {
            info!("Filtering by {}: {}", filter.name(), filter.setting());
            match filter.apply(&current) {
                Ok(filtered) => {
                    current = filtered;
                    info!("Item count changed to {}", current.len());
                }
                Err(e) => {
                    error!("Error while filtering by {}: {:#}", filter.name(), e);
                }
            }
        }
        current
    }
}

impl Default for FilterChain {
    fn default() -> Self {
        Self::new()
    }
}

/// Filter candidates for a request using the standard chain built from
/// `config`.
///
/// # Returns
/// * `Ok(Vec<Candidate>)` - The surviving candidates, possibly empty
/// * `Err(MatchError)` - A release title carries a season/episode token
///   that can't be read as a number
pub fn filter_items(
    candidates: &[Candidate],
    request: &MediaRequest,
    config: &FilterConfig,
) -> Result<Vec<Candidate>, MatchError> {
    let chain = FilterChain::standard(config, request.media_type());
    filter_items_with(&chain, candidates, request)
}

/// Same as [`filter_items`] with a caller-supplied chain.
pub fn filter_items_with(
    chain: &FilterChain,
    candidates: &[Candidate],
    request: &MediaRequest,
) -> Result<Vec<Candidate>, MatchError> {
    info!("Item count before filtering: {}", candidates.len());

    let items = match request {
        MediaRequest::Series { season, episode } => {
            info!("Filtering out non matching {}{} releases", season, episode);
            let matcher = SeasonEpisodeMatcher::new(season.clone(), episode.clone());
            let kept = matcher.filter_compatible(candidates)?;
            info!("Item count changed to {}", kept.len());
            kept
        }
        MediaRequest::Movie => candidates.to_vec(),
    };

    let items = chain.apply(items);
    info!("Finished filtering releases");
    info!("Item count after filtering: {}", items.len());
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::TitleExclusionFilter;

    fn candidates() -> Vec<Candidate> {
        vec![
            Candidate::new("Movie.2020.1080p.WEB", Some("1080p"), 1),
            Candidate::new("Movie.2020.HDCAM", None, 2),
        ]
    }

    #[test]
    fn test_empty_chain() {
        let chain = FilterChain::new();
        let filtered = chain.apply(candidates());
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_single_filter() {
        let chain = FilterChain::new().add_filter(TitleExclusionFilter::new(vec!["CAM".to_string()]));

        let filtered = chain.apply(candidates());
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].size, 1);
    }

    #[test]
    fn test_failing_filter_is_skipped() {
        let chain = FilterChain::new()
            .add_filter(TitleExclusionFilter::new(vec![" ".to_string()]))
            .add_filter(TitleExclusionFilter::new(vec!["CAM".to_string()]));

        let filtered = chain.apply(candidates());
        assert_eq!(filtered.len(), 1);
    }

    #[test]
    fn test_standard_chain_order() {
        let chain = FilterChain::standard(&FilterConfig::default(), MediaType::Movie);
        assert_eq!(
            chain.names(),
            vec!["languages", "maxSize", "exclusionKeywords", "exclusion", "resultsPerQuality"]
        );
    }

    #[test]
    fn test_filter_items_series() {
        let candidates = vec![
            Candidate::new("Show.S02E05.1080p", Some("1080p"), 1),
            Candidate::new("Show.S02E04.1080p", Some("1080p"), 2),
        ];
        let request = MediaRequest::series("S02", "E05").unwrap();

        let filtered = filter_items(&candidates, &request, &FilterConfig::default()).unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].size, 1);
    }
}
