//! Config command implementation

use anyhow::Result;
use spendlens_core::config::{default_config_path, CURRENCY};
use spendlens_core::{format_amount, AnalysisConfig};

pub fn cmd_config(config: &AnalysisConfig) -> Result<()> {
    println!();
    println!("⚙️  Analysis Config");
    println!("   ─────────────────────────────────────────────────────────────");
    println!(
        "   Average taxi fare: {} {}",
        format_amount(config.average_fare),
        CURRENCY
    );
    println!(
        "   Bus fare:          {} {}",
        format_amount(config.bus_fare),
        CURRENCY
    );
    match default_config_path() {
        Some(path) => println!("   Override file:     {}", path.display()),
        None => println!("   Override file:     (no data directory on this platform)"),
    }
    Ok(())
}
