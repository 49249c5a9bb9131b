//! Loading candidate lists and configuration from disk.
//!
//! Both inputs of a filtering run are plain JSON files. They are independent
//! of each other, so [`load_run_inputs`] parses them in parallel.

use crate::config::FilterConfig;
use crate::error::{DataLoadError, Result};
use crate::parser;
use crate::types::Candidate;
use std::fs;
use std::path::Path;
use tracing::info;

fn read_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(DataLoadError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    Ok(fs::read_to_string(path)?)
}

/// Load a JSON array of candidates from `path`
pub fn load_candidates(path: &Path) -> Result<Vec<Candidate>> {
    let content = read_file(path)?;
    let candidates = parser::parse_candidates(&content, &path.display().to_string())?;
    info!("Loaded {} candidates from {}", candidates.len(), path.display());
    Ok(candidates)
}

/// Load a JSON filter configuration from `path`
pub fn load_config(path: &Path) -> Result<FilterConfig> {
    let content = read_file(path)?;
    parser::parse_config(&content, &path.display().to_string())
}

/// Load everything a filtering run needs.
///
/// Without a configuration path the default configuration is used, which
/// turns every filter into a pass-through.
pub fn load_run_inputs(
    candidates_path: &Path,
    config_path: Option<&Path>,
) -> Result<(Vec<Candidate>, FilterConfig)> {
    let (candidates, config) = rayon::join(
        || load_candidates(candidates_path),
        || match config_path {
            Some(path) => load_config(path),
            None => Ok(FilterConfig::default()),
        },
    );

    Ok((candidates?, config?))
}
