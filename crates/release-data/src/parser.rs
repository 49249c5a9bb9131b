//! Parsing helpers for release data.
//!
//! This module handles:
//! - season/episode tokens supplied by the user (`S02`, `e5`)
//! - sizes that indexers report either as numbers or numeric strings
//! - JSON documents holding candidate lists and filter configuration

use crate::config::FilterConfig;
use crate::error::{DataLoadError, Result};
use crate::types::{Candidate, Token, TokenKind};
use serde::{Deserialize, Deserializer};

/// Parse a season or episode token.
///
/// The token must be the kind's letter (any case) followed by one or more
/// ASCII digits, and the number must fit in a `u32`. The stored text is
/// upper-cased but keeps its digits as given, so `s2` becomes `S2`, not `S02`.
pub fn parse_token(kind: TokenKind, raw: &str) -> Result<Token> {
    let invalid = || DataLoadError::InvalidToken {
        kind: kind.as_str(),
        token: raw.to_string(),
    };

    let text = raw.trim().to_ascii_uppercase();
    let digits = text.strip_prefix(kind.prefix()).ok_or_else(invalid)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let number = digits.parse::<u32>().map_err(|_| invalid())?;

    Ok(Token::from_parts(kind, text, number))
}

/// Parse a byte count from its string form
pub fn parse_size(raw: &str) -> Result<u64> {
    raw.trim()
        .parse::<u64>()
        .map_err(|_| DataLoadError::InvalidValue {
            field: "size".to_string(),
            value: raw.to_string(),
        })
}

/// A size as it appears in JSON input
#[derive(Deserialize)]
#[serde(untagged)]
enum RawSize {
    Number(u64),
    Text(String),
}

impl RawSize {
    fn into_bytes(self) -> Result<u64> {
        match self {
            RawSize::Number(bytes) => Ok(bytes),
            RawSize::Text(text) => parse_size(&text),
        }
    }
}

pub(crate) fn deserialize_size<'de, D>(deserializer: D) -> std::result::Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    RawSize::deserialize(deserializer)?
        .into_bytes()
        .map_err(serde::de::Error::custom)
}

pub(crate) fn deserialize_optional_size<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<RawSize>::deserialize(deserializer)?
        .map(RawSize::into_bytes)
        .transpose()
        .map_err(serde::de::Error::custom)
}

/// Parse a JSON array of candidates.
///
/// `source_name` only ends up in error messages.
pub fn parse_candidates(json: &str, source_name: &str) -> Result<Vec<Candidate>> {
    serde_json::from_str(json).map_err(|e| DataLoadError::JsonError {
        source_name: source_name.to_string(),
        reason: e.to_string(),
    })
}

/// Parse a JSON filter configuration object
pub fn parse_config(json: &str, source_name: &str) -> Result<FilterConfig> {
    serde_json::from_str(json).map_err(|e| DataLoadError::JsonError {
        source_name: source_name.to_string(),
        reason: e.to_string(),
    })
}
