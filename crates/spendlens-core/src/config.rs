//! Analysis configuration
//!
//! The ride heuristics use two tunable fares. Config is resolved in layers:
//! 1. An explicit path (e.g. `--config`), if given and present
//! 2. The override in the data dir (~/.local/share/spendlens/config/analysis.toml)
//! 3. The embedded defaults (compiled into the binary)

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Embedded default config (compiled into binary)
const DEFAULT_CONFIG: &str = include_str!("../../../config/analysis.toml");

/// Assumed average taxi fare (₸) for the trip-count fallback
pub const AVERAGE_FARE: f64 = 1500.0;

/// Public transit fare (₸) per trip for the savings estimate
pub const BUS_FARE: f64 = 100.0;

/// Currency symbol appended to every formatted amount
pub const CURRENCY: &str = "₸";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    pub average_fare: f64,
    pub bus_fare: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            average_fare: AVERAGE_FARE,
            bus_fare: BUS_FARE,
        }
    }
}

impl AnalysisConfig {
    /// Load with the layered resolution described in the module docs
    pub fn load(override_path: Option<&Path>) -> Result<Self> {
        let explicit = override_path.filter(|p| p.exists()).map(Path::to_path_buf);
        let path = explicit.or_else(|| default_config_path().filter(|p| p.exists()));

        match path {
            Some(path) => {
                debug!(path = %path.display(), "Loading analysis config");
                let content = fs::read_to_string(&path)?;
                parse_config(&content)
            }
            None => parse_config(DEFAULT_CONFIG),
        }
    }
}

/// Default config override path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("spendlens").join("config").join("analysis.toml"))
}

/// Raw config structure for TOML parsing
#[derive(Debug, Deserialize)]
struct RawConfig {
    rides: Option<RawRides>,
}

#[derive(Debug, Deserialize)]
struct RawRides {
    average_fare: Option<f64>,
    bus_fare: Option<f64>,
}

/// Parse config from TOML content, applying it over the defaults
pub fn parse_config(content: &str) -> Result<AnalysisConfig> {
    let raw: RawConfig = toml::from_str(content)?;
    let mut config = AnalysisConfig::default();

    if let Some(rides) = raw.rides {
        if let Some(fare) = rides.average_fare {
            config.average_fare = positive("rides.average_fare", fare)?;
        }
        if let Some(fare) = rides.bus_fare {
            config.bus_fare = positive("rides.bus_fare", fare)?;
        }
    }

    Ok(config)
}

fn positive(key: &str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(Error::InvalidData(format!(
            "{} must be a positive number, got {}",
            key, value
        )))
    }
}
