//! Shared command utilities

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use spendlens_core::AnalysisConfig;

/// Resolve the analysis config (explicit path, data dir override, built-in)
pub fn load_config(path: Option<&Path>) -> Result<AnalysisConfig> {
    if let Some(path) = path {
        if !path.exists() {
            anyhow::bail!("Config file not found: {}", path.display());
        }
    }
    AnalysisConfig::load(path).context("Failed to load analysis config")
}

/// Read an input file to a string
pub fn read_input(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
