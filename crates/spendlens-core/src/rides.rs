//! Taxi trip estimation
//!
//! The trip count comes from the AI analysis text when it mentions one
//! ("7 поездок", "trips: 12"). Otherwise it is derived from the total taxi
//! spend and the configured average fare.

use regex::Regex;
use tracing::debug;

use crate::buckets::is_ride_category;
use crate::config::AnalysisConfig;
use crate::models::{CategoryRecord, RideEstimate};

/// Trip-count patterns in priority order: number before keyword, then after
///
/// Digits are ASCII only; `\d` would also accept Arabic-Indic or fullwidth
/// digits that `u32::from_str` rejects.
const TRIP_PATTERNS: [&str; 2] = [
    r"(?i)([0-9]+)\s*(?:поезд|рейс|trip)",
    r"(?i)(?:поезд|рейс|trip).*?([0-9]+)",
];

/// Extract a literal trip count from free text
///
/// Patterns are tried in order and the first match wins, even if a later
/// pattern would find a different number.
pub fn extract_trip_count(text: &str) -> Option<u32> {
    TRIP_PATTERNS.iter().find_map(|pattern| {
        let re = Regex::new(pattern).expect("valid regex");
        re.captures(text)
            .and_then(|caps| caps.get(1))
            // [0-9]+ only fails to parse on overflow
            .map(|m| m.as_str().parse::<u32>().unwrap_or(u32::MAX))
    })
}

/// Estimate taxi spend and trip count
pub fn estimate_rides(
    records: &[CategoryRecord],
    free_text: Option<&str>,
    config: &AnalysisConfig,
) -> RideEstimate {
    let hinted = free_text.and_then(extract_trip_count);

    let total_amount: f64 = records
        .iter()
        .filter(|r| is_ride_category(&r.category))
        .map(|r| r.amount.abs())
        .sum();

    let mut trip_count = hinted.unwrap_or(0);
    if trip_count == 0 && total_amount > 0.0 {
        trip_count = ((total_amount / config.average_fare).round() as u32).max(1);
    }

    debug!(
        total_amount,
        trip_count,
        from_text = hinted.is_some_and(|n| n > 0),
        "Estimated rides"
    );

    RideEstimate {
        total_amount,
        trip_count,
    }
}
