//! Filter to keep only releases in an accepted language.

use crate::error::FilterError;
use crate::traits::Filter;
use anyhow::Result;
use release_data::{Candidate, FilterConfig};
use std::collections::HashSet;

/// Keeps candidates in one of the configured languages.
///
/// ## Algorithm
/// - No configured languages: keep everything
/// - Candidates without any language tag are kept, since they can't be
///   excluded with certainty
/// - Otherwise keep candidates with at least one accepted tag
///   (case-insensitive)
pub struct LanguageFilter {
    languages: Vec<String>,
}

impl LanguageFilter {
    pub const NAME: &'static str = "languages";

    pub fn new(languages: Vec<String>) -> Self {
        Self { languages }
    }

    pub fn from_config(config: &FilterConfig) -> Self {
        Self::new(config.languages.clone())
    }

    fn accepted(&self) -> Result<HashSet<String>, FilterError> {
        self.languages
            .iter()
            .map(|language| {
                let code = language.trim();
                let valid = !code.is_empty()
                    && code.chars().all(|c| c.is_ascii_alphabetic() || c == '-');
                if valid {
                    Ok(code.to_ascii_lowercase())
                } else {
                    Err(FilterError::InvalidSetting {
                        filter: Self::NAME,
                        reason: format!("invalid language code {:?}", language),
                    })
                }
            })
            .collect()
    }
}

impl Filter for LanguageFilter {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn setting(&self) -> String {
        if self.languages.is_empty() {
            "any".to_string()
        } else {
            self.languages.join(", ")
        }
    }

    fn apply(&self, candidates: &[Candidate]) -> Result<Vec<Candidate>> {
        if self.languages.is_empty() {
            return Ok(candidates.to_vec());
        }
        let accepted = self.accepted()?;

        let filtered: Vec<Candidate> = candidates
            .iter()
            .filter(|candidate| {
                candidate.languages.is_empty()
                    || candidate
                        .languages
                        .iter()
                        .any(|language| accepted.contains(&language.trim().to_ascii_lowercase()))
            })
            .cloned()
            .collect();
        Ok(filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates() -> Vec<Candidate> {
        vec![
            Candidate::new("English", None, 1).with_languages(["en"]),
            Candidate::new("French", None, 2).with_languages(["fr"]),
            Candidate::new("Multi", None, 3).with_languages(["FR", "de"]),
            Candidate::new("Untagged", None, 4),
        ]
    }

    #[test]
    fn test_language_filter() {
        let filter = LanguageFilter::new(vec!["fr".to_string()]);
        let filtered = filter.apply(&candidates()).unwrap();

        let titles: Vec<&str> = filtered.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["French", "Multi", "Untagged"]);
    }

    #[test]
    fn test_no_languages_configured() {
        let filter = LanguageFilter::from_config(&FilterConfig::default());
        assert_eq!(filter.apply(&candidates()).unwrap().len(), 4);
    }

    #[test]
    fn test_invalid_language_code() {
        let filter = LanguageFilter::new(vec!["en".to_string(), " ".to_string()]);
        assert!(filter.apply(&candidates()).is_err());
    }
}
