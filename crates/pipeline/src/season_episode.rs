//! Season/episode matching for series requests.
//!
//! Release titles encode what they contain with `S<digits>` and
//! `E<digits>` tokens. A single episode looks like `S02E05`, a season pack
//! like `S02`, and a batch release spans a range such as `S01E01-S03E10`.
//! This module decides from the title alone whether a release can contain
//! the requested episode.

use crate::error::MatchError;
use once_cell::sync::Lazy;
use regex::Regex;
use release_data::{Candidate, Token, TokenKind};
use tracing::debug;

static SEASON_TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"S[0-9]+").unwrap());
static EPISODE_TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"E[0-9]+").unwrap());

/// Outcome of checking one token family against the requested token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenCheck {
    /// The title carries no token of this kind
    Absent,
    Compatible,
    Incompatible,
}

/// Keeps releases whose title is compatible with one requested episode.
///
/// ## Algorithm
/// For each token family (seasons first, then episodes) on the upper-cased
/// title:
/// - no tokens: can't be excluded
/// - one token: must equal the requested token exactly
/// - two tokens: inclusive range, in either order
/// - more tokens: must contain the requested token exactly
///
/// Episode tokens are only looked at when the title has a season token.
#[derive(Debug, Clone)]
pub struct SeasonEpisodeMatcher {
    season: Token,
    episode: Token,
}

impl SeasonEpisodeMatcher {
    pub fn new(season: Token, episode: Token) -> Self {
        Self { season, episode }
    }

    /// Decide whether `title` can contain the requested episode.
    pub fn matches(&self, title: &str) -> Result<bool, MatchError> {
        let title = title.to_uppercase();

        match check_tokens(&title, &SEASON_TOKEN_RE, &self.season)? {
            TokenCheck::Absent => return Ok(true),
            TokenCheck::Incompatible => return Ok(false),
            TokenCheck::Compatible => {}
        }

        let episode = check_tokens(&title, &EPISODE_TOKEN_RE, &self.episode)?;
        Ok(episode != TokenCheck::Incompatible)
    }

    /// Keep the candidates whose titles match, in input order.
    pub fn filter_compatible(&self, candidates: &[Candidate]) -> Result<Vec<Candidate>, MatchError> {
        let mut kept = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            if self.matches(&candidate.title)? {
                kept.push(candidate.clone());
            } else {
                debug!(
                    "Dropping {:?}: not compatible with {}{}",
                    candidate.title, self.season, self.episode
                );
            }
        }
        Ok(kept)
    }
}

/// Check `title` against one requested season and episode.
pub fn matches(title: &str, season: &Token, episode: &Token) -> Result<bool, MatchError> {
    SeasonEpisodeMatcher::new(season.clone(), episode.clone()).matches(title)
}

/// Keep the candidates compatible with one requested season and episode.
pub fn filter_compatible(
    candidates: &[Candidate],
    season: &Token,
    episode: &Token,
) -> Result<Vec<Candidate>, MatchError> {
    SeasonEpisodeMatcher::new(season.clone(), episode.clone()).filter_compatible(candidates)
}

fn check_tokens(title: &str, pattern: &Regex, requested: &Token) -> Result<TokenCheck, MatchError> {
    let found: Vec<&str> = pattern.find_iter(title).map(|m| m.as_str()).collect();

    let compatible = match found.as_slice() {
        [] => return Ok(TokenCheck::Absent),
        [first, second] => {
            let first = token_number(first, requested.kind(), title)?;
            let second = token_number(second, requested.kind(), title)?;
            let (lo, hi) = if first <= second { (first, second) } else { (second, first) };
            (lo..=hi).contains(&requested.number())
        }
        tokens => tokens.contains(&requested.as_str()),
    };

    Ok(if compatible {
        TokenCheck::Compatible
    } else {
        TokenCheck::Incompatible
    })
}

fn token_number(token: &str, kind: TokenKind, title: &str) -> Result<u32, MatchError> {
    token[1..]
        .parse::<u32>()
        .map_err(|_| MatchError::MalformedToken {
            kind: kind.as_str(),
            token: token.to_string(),
            title: title.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher(season: &str, episode: &str) -> SeasonEpisodeMatcher {
        SeasonEpisodeMatcher::new(
            Token::parse(TokenKind::Season, season).unwrap(),
            Token::parse(TokenKind::Episode, episode).unwrap(),
        )
    }

    #[test]
    fn test_single_episode() {
        let m = matcher("S02", "E05");
        assert!(m.matches("Show.S02E05.1080p.WEB.x264").unwrap());
        assert!(m.matches("show.s02e05.720p").unwrap());
        assert!(!m.matches("Show.S02E06.1080p").unwrap());
        assert!(!m.matches("Show.S03E05.1080p").unwrap());
    }

    #[test]
    fn test_no_season_token_is_kept() {
        let m = matcher("S02", "E05");
        assert!(m.matches("Show.Complete.Series.1080p").unwrap());
        // Episode tokens without a season anchor are ignored
        assert!(m.matches("Show.E09.1080p").unwrap());
    }

    #[test]
    fn test_season_pack() {
        let m = matcher("S02", "E05");
        assert!(m.matches("Show.S02.1080p.BluRay").unwrap());
        assert!(!m.matches("Show.S01.1080p.BluRay").unwrap());
    }

    #[test]
    fn test_season_range() {
        assert!(matcher("S02", "E05").matches("Show.S01-S03.Batch").unwrap());
        assert!(matcher("S01", "E05").matches("Show.S01-S03.Batch").unwrap());
        assert!(matcher("S03", "E05").matches("Show.S03-S01.Batch").unwrap());
        assert!(!matcher("S04", "E05").matches("Show.S01-S03.Batch").unwrap());
    }

    #[test]
    fn test_season_and_episode_range() {
        let title = "Show.S01E01-S03E10.1080p";
        assert!(matcher("S02", "E05").matches(title).unwrap());
        assert!(!matcher("S02", "E11").matches(title).unwrap());
        assert!(!matcher("S04", "E05").matches(title).unwrap());
    }

    #[test]
    fn test_exact_match_needs_same_padding() {
        // A single token is compared as text
        assert!(!matcher("S02", "E05").matches("Show.S2E5.720p").unwrap());
        assert!(matcher("S2", "E5").matches("Show.S2E5.720p").unwrap());
    }

    #[test]
    fn test_more_than_two_tokens() {
        let title = "Show.S01.S02.S03.Collection";
        assert!(matcher("S02", "E05").matches(title).unwrap());
        assert!(!matcher("S04", "E05").matches(title).unwrap());
    }

    #[test]
    fn test_overflowing_token_is_an_error() {
        let result = matcher("S02", "E05").matches("Show.S01-S99999999999.1080p");
        assert!(matches!(result, Err(MatchError::MalformedToken { kind: "season", .. })));

        // A lone token is compared as text and never parsed
        assert!(!matcher("S02", "E05").matches("Show.S99999999999.1080p").unwrap());
    }

    #[test]
    fn test_filter_compatible_keeps_order() {
        let candidates = vec![
            Candidate::new("Show.S02E05.720p", Some("720p"), 1),
            Candidate::new("Show.S02E06.720p", Some("720p"), 2),
            Candidate::new("Show.Complete", None, 3),
            Candidate::new("Show.S02E05.1080p", Some("1080p"), 4),
        ];

        let kept = matcher("S02", "E05").filter_compatible(&candidates).unwrap();
        let sizes: Vec<u64> = kept.iter().map(|c| c.size).collect();
        assert_eq!(sizes, vec![1, 3, 4]);
    }

    #[test]
    fn test_filter_compatible_empty() {
        let kept = matcher("S01", "E01").filter_compatible(&[]).unwrap();
        assert!(kept.is_empty());
    }
}
