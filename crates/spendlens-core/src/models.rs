//! Data models for Spendlens

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use tracing::warn;

use crate::error::Result;

/// One row of classified spend from a bank statement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRecord {
    /// Free-form label produced by the upstream extraction step
    pub category: String,
    /// Signed amount: positive = inflow, negative = outflow
    pub amount: f64,
}

impl CategoryRecord {
    pub fn new(category: impl Into<String>, amount: f64) -> Self {
        Self {
            category: category.into(),
            amount,
        }
    }
}

/// Which historical category vocabulary a file uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataShape {
    /// Legacy sample data (groceries, entertainment, clothing, ...)
    Seed,
    /// Files uploaded through the statement parser (top-ups, taxi, transfers)
    NewUpload,
}

impl DataShape {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataShape::Seed => "seed",
            DataShape::NewUpload => "new_upload",
        }
    }
}

impl fmt::Display for DataShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DataShape {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "seed" => Ok(DataShape::Seed),
            "new_upload" | "new" => Ok(DataShape::NewUpload),
            _ => Err(format!("Unknown data shape: {}", s)),
        }
    }
}

/// The three mutually exclusive summary buckets
///
/// Serialized as the user-facing label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bucket {
    #[serde(rename = "Пополнения")]
    TopUp,
    #[serde(rename = "Переводы")]
    Transfer,
    #[serde(rename = "Такси")]
    Ride,
}

impl Bucket {
    /// All buckets in output order
    pub const ALL: [Bucket; 3] = [Bucket::TopUp, Bucket::Transfer, Bucket::Ride];

    /// Label shown to the user
    pub fn label(&self) -> &'static str {
        match self {
            Bucket::TopUp => "Пополнения",
            Bucket::Transfer => "Переводы",
            Bucket::Ride => "Такси",
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Aggregated display total for one bucket
///
/// TopUp totals are positive; Transfer and Ride totals are always negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BucketTotal {
    #[serde(rename = "label")]
    pub bucket: Bucket,
    pub amount: f64,
}

impl BucketTotal {
    /// Spend buckets are the ones rendered with a negative total
    pub fn is_expense(&self) -> bool {
        self.amount < 0.0
    }
}

/// Estimated taxi usage
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RideEstimate {
    /// Sum of absolute amounts of ride-tagged records
    pub total_amount: f64,
    /// Trip count from the free text, or derived from the average fare
    pub trip_count: u32,
}

/// Result of the full analysis pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub shape_tag: DataShape,
    pub buckets: Vec<BucketTotal>,
    pub recommendation: String,
    pub ride_estimate: RideEstimate,
}

/// A per-file object as returned by the backend `my-files` endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilePayload {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub upload_date: String,
    #[serde(default)]
    pub ai_analysis: Option<String>,
    #[serde(default)]
    pub total_amount: Option<f64>,
    #[serde(default)]
    pub transactions_count: Option<i64>,
    /// JSON-encoded array of `{category, amount}` objects
    #[serde(default)]
    pub category_stats: String,
}

impl FilePayload {
    /// Parse a single file object
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse either a single file object or an array of them
    pub fn list_from_json(json: &str) -> Result<Vec<Self>> {
        let value: Value = serde_json::from_str(json)?;
        match value {
            Value::Array(_) => Ok(serde_json::from_value(value)?),
            _ => Ok(vec![serde_json::from_value(value)?]),
        }
    }

    /// Decoded category records (never fails; see [`parse_category_stats`])
    pub fn records(&self) -> Vec<CategoryRecord> {
        parse_category_stats(&self.category_stats)
    }

    /// Free text used for trip-count hints, if any
    pub fn free_text(&self) -> Option<&str> {
        self.ai_analysis.as_deref().filter(|s| !s.trim().is_empty())
    }
}

/// Decode the JSON-encoded `category_stats` text into raw records
///
/// Malformed input never fails: unparsable text or a non-array yields an
/// empty list, non-object elements are skipped, and missing fields fall back
/// to an empty category and a zero amount.
pub fn parse_category_stats(raw: &str) -> Vec<CategoryRecord> {
    let value: Value = match serde_json::from_str(raw) {
        Ok(v) => v,
        Err(e) => {
            if !raw.trim().is_empty() {
                warn!(error = %e, "Malformed category_stats, using empty list");
            }
            return Vec::new();
        }
    };

    let Value::Array(items) = value else {
        warn!("category_stats is not an array, using empty list");
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| {
            let obj = item.as_object()?;
            let category = obj
                .get("category")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            let amount = obj.get("amount").map(amount_from_value).unwrap_or(0.0);
            Some(CategoryRecord { category, amount })
        })
        .collect()
}

fn amount_from_value(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .unwrap_or(0.0),
        _ => 0.0,
    }
}
