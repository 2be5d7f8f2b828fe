//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `shared` - Shared utilities (config loading, file reading)
//! - `report` - Report and analyze commands
//! - `config` - Config inspection command

pub mod config;
pub mod shared;
pub mod report;

// Re-export command functions for main.rs
pub use config::*;
pub use shared::*;
pub use report::*;

/// Truncate a string to a maximum number of characters, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
