//! Input handling module

use crate::config::InputConfig;
use anyhow::{Context, Result};
use sift_core::{LineSource, STDIN_PATH};
use std::path::{Path, PathBuf};

/// Pick the input path: command line first, then the configured default
pub fn resolve_input(arg: Option<&Path>, config: &InputConfig) -> PathBuf {
    arg.map(Path::to_path_buf)
        .unwrap_or_else(|| config.default_path.clone())
}

/// Whether `path` selects standard input
pub fn is_stdin(path: &Path) -> bool {
    path == Path::new(STDIN_PATH)
}

/// Open the line source for `path`
pub fn open_source(path: &Path) -> Result<LineSource> {
    if is_stdin(path) {
        log::debug!("reading puzzle input from stdin");
        return Ok(LineSource::stdin());
    }

    LineSource::open(Some(path))
        .with_context(|| format!("Failed to open input: {}", path.display()))
}
