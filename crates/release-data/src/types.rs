//! Core domain types for release filtering.
//!
//! This module defines the data structures shared by the loader, the
//! filtering pipeline and the CLI:
//! - `Candidate`: one search result (a release)
//! - `Quality` / `QualityRank`: the closed quality label set and its ordering
//! - `Token` / `MediaRequest`: what the user asked for

use crate::error::Result;
use crate::parser;
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Quality
// =============================================================================

/// Quality tiers recognised in release metadata, best first.
///
/// The derived ordering is the ranking order: `UltraHd < FullHd < Hd < Sd`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Quality {
    UltraHd,
    FullHd,
    Hd,
    Sd,
}

impl Quality {
    pub const ALL: [Quality; 4] = [Quality::UltraHd, Quality::FullHd, Quality::Hd, Quality::Sd];

    /// Recognise a quality label, case-insensitively.
    ///
    /// `2160p` and `uhd` are accepted as aliases of `4k`. Anything else,
    /// including the literal `unknown`, yields `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "4k" | "2160p" | "uhd" => Some(Quality::UltraHd),
            "1080p" => Some(Quality::FullHd),
            "720p" => Some(Quality::Hd),
            "480p" => Some(Quality::Sd),
            _ => None,
        }
    }

    /// Canonical label for this tier
    pub fn label(self) -> &'static str {
        match self {
            Quality::UltraHd => "4k",
            Quality::FullHd => "1080p",
            Quality::Hd => "720p",
            Quality::Sd => "480p",
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Sort key derived from an optional quality label.
///
/// Recognised tiers sort by resolution, best first. Unrecognised labels and
/// missing labels share the terminal bucket; within it an absent label never
/// sorts before an unrecognised one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QualityRank {
    tier: u8,
    absent: bool,
}

impl QualityRank {
    const UNRANKED: u8 = u8::MAX;

    /// Rank an optional quality label.
    pub fn of(label: Option<&str>) -> Self {
        let tier = label
            .and_then(Quality::from_label)
            .map(|quality| quality as u8)
            .unwrap_or(Self::UNRANKED);

        Self {
            tier,
            absent: label.is_none(),
        }
    }

    /// True when the label was one of the recognised tiers
    pub fn is_ranked(&self) -> bool {
        self.tier != Self::UNRANKED
    }

    pub fn is_absent(&self) -> bool {
        self.absent
    }
}

// =============================================================================
// Candidate
// =============================================================================

/// One search result: a specific release of a movie or episode(s).
///
/// Candidates are produced by whoever performed the search and are never
/// modified by the pipeline, only dropped or reordered. Fields the pipeline
/// doesn't know about are kept in `extra` so they survive a round trip
/// through the CLI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Release name, e.g. `Show.S02E05.1080p.WEB.x264-GRP`
    pub title: String,

    /// Quality label as reported by the indexer, if any
    #[serde(default)]
    pub quality: Option<String>,

    /// Size in bytes. Indexers report it either as a number or as a
    /// numeric string.
    #[serde(deserialize_with = "parser::deserialize_size")]
    pub size: u64,

    /// Audio/subtitle language codes detected for the release
    #[serde(default)]
    pub languages: Vec<String>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Candidate {
    /// Create a candidate with no languages and no extra fields.
    pub fn new(title: impl Into<String>, quality: Option<&str>, size: u64) -> Self {
        Self {
            title: title.into(),
            quality: quality.map(str::to_string),
            size,
            languages: Vec::new(),
            extra: serde_json::Map::new(),
        }
    }

    /// Builder-style setter for the language list
    pub fn with_languages<I, S>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.languages = languages.into_iter().map(Into::into).collect();
        self
    }

    /// Recognised quality tier, if the label is one
    pub fn quality_tier(&self) -> Option<Quality> {
        self.quality.as_deref().and_then(Quality::from_label)
    }

    pub fn quality_rank(&self) -> QualityRank {
        QualityRank::of(self.quality.as_deref())
    }
}

// =============================================================================
// Media request
// =============================================================================

/// Which of the two token families a token belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Season,
    Episode,
}

impl TokenKind {
    /// Letter that starts tokens of this kind
    pub fn prefix(self) -> char {
        match self {
            TokenKind::Season => 'S',
            TokenKind::Episode => 'E',
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Season => "season",
            TokenKind::Episode => "episode",
        }
    }
}

/// A normalised season or episode token such as `S02` or `E05`.
///
/// Keeps both the upper-cased text (used for exact matching) and the parsed
/// number (used for range checks).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    kind: TokenKind,
    text: String,
    number: u32,
}

impl Token {
    /// Parse a user supplied token like `s02`.
    pub fn parse(kind: TokenKind, raw: &str) -> Result<Self> {
        parser::parse_token(kind, raw)
    }

    /// Build a token from a number, zero-padded to two digits (`2` -> `S02`).
    pub fn from_number(kind: TokenKind, number: u32) -> Self {
        Self {
            kind,
            text: format!("{}{:02}", kind.prefix(), number),
            number,
        }
    }

    pub(crate) fn from_parts(kind: TokenKind, text: String, number: u32) -> Self {
        Self { kind, text, number }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn number(&self) -> u32 {
        self.number
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Kind of media that was searched for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Movie,
    Series,
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaType::Movie => f.write_str("movie"),
            MediaType::Series => f.write_str("series"),
        }
    }
}

/// What the candidates were searched for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaRequest {
    Movie,
    Series { season: Token, episode: Token },
}

impl MediaRequest {
    /// A series request from raw tokens such as `"S02"`, `"e5"`.
    pub fn series(season: &str, episode: &str) -> Result<Self> {
        Ok(MediaRequest::Series {
            season: Token::parse(TokenKind::Season, season)?,
            episode: Token::parse(TokenKind::Episode, episode)?,
        })
    }

    /// A series request from plain numbers
    pub fn series_numbered(season: u32, episode: u32) -> Self {
        MediaRequest::Series {
            season: Token::from_number(TokenKind::Season, season),
            episode: Token::from_number(TokenKind::Episode, episode),
        }
    }

    pub fn media_type(&self) -> MediaType {
        match self {
            MediaRequest::Movie => MediaType::Movie,
            MediaRequest::Series { .. } => MediaType::Series,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quality_from_label() {
        assert_eq!(Quality::from_label("1080p"), Some(Quality::FullHd));
        assert_eq!(Quality::from_label("4K"), Some(Quality::UltraHd));
        assert_eq!(Quality::from_label("2160p"), Some(Quality::UltraHd));
        assert_eq!(Quality::from_label(" 720P "), Some(Quality::Hd));
        assert_eq!(Quality::from_label("unknown"), None);
        assert_eq!(Quality::from_label("dvdrip"), None);
    }

    #[test]
    fn test_quality_rank_order() {
        let uhd = QualityRank::of(Some("4k"));
        let full_hd = QualityRank::of(Some("1080p"));
        let hd = QualityRank::of(Some("720p"));
        let sd = QualityRank::of(Some("480p"));
        let unrecognised = QualityRank::of(Some("cam"));
        let absent = QualityRank::of(None);

        assert!(uhd < full_hd);
        assert!(full_hd < hd);
        assert!(hd < sd);
        assert!(sd < unrecognised);
        assert!(unrecognised < absent);
        assert!(!unrecognised.is_ranked());
        assert!(absent.is_absent());
    }

    #[test]
    fn test_unrecognised_labels_tie() {
        assert_eq!(QualityRank::of(Some("cam")), QualityRank::of(Some("telesync")));
    }

    #[test]
    fn test_token_from_number() {
        let token = Token::from_number(TokenKind::Season, 2);
        assert_eq!(token.as_str(), "S02");
        assert_eq!(token.number(), 2);

        let token = Token::from_number(TokenKind::Episode, 112);
        assert_eq!(token.as_str(), "E112");
    }

    #[test]
    fn test_media_request() {
        let request = MediaRequest::series("s02", "e05").unwrap();
        assert_eq!(request.media_type(), MediaType::Series);
        match request {
            MediaRequest::Series { season, episode } => {
                assert_eq!(season.as_str(), "S02");
                assert_eq!(episode.as_str(), "E05");
            }
            MediaRequest::Movie => panic!("expected a series request"),
        }

        assert!(MediaRequest::series("E02", "E05").is_err());
        assert_eq!(MediaRequest::Movie.media_type(), MediaType::Movie);
    }

    #[test]
    fn test_candidate_quality_helpers() {
        let candidate = Candidate::new("Movie.2020.1080p", Some("1080p"), 10);
        assert_eq!(candidate.quality_tier(), Some(Quality::FullHd));
        assert!(candidate.quality_rank().is_ranked());

        let candidate = Candidate::new("Movie.2020", None, 10);
        assert_eq!(candidate.quality_tier(), None);
        assert!(candidate.quality_rank().is_absent());
    }
}
