//! Analysis pipeline and per-file reports
//!
//! [`analyze`] runs classification, aggregation, ride estimation and
//! recommendation over a record list. [`FileReport`] wraps that summary with
//! the per-row detail a statement card shows.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::buckets::aggregate;
use crate::config::{AnalysisConfig, CURRENCY};
use crate::format::{format_amount, format_signed_amount};
use crate::labels::{display_name, KnownLabel};
use crate::models::{parse_category_stats, CategoryRecord, DataShape, FilePayload, Summary};
use crate::recommend::synthesize;
use crate::rides::estimate_rides;
use crate::shape::{classify_shape, has_new_vocabulary};

/// Run the full pipeline over raw records
///
/// Pure and deterministic: the same input always yields the same summary.
pub fn analyze(
    records: &[CategoryRecord],
    free_text: Option<&str>,
    config: &AnalysisConfig,
) -> Summary {
    let shape_tag = classify_shape(records);
    let buckets = aggregate(records);
    let ride_estimate = estimate_rides(records, free_text, config);
    let recommendation = synthesize(&buckets, &ride_estimate, config);

    Summary {
        shape_tag,
        buckets,
        recommendation,
        ride_estimate,
    }
}

/// Decode `category_stats` text and analyze it (malformed text yields an empty summary)
pub fn analyze_stats(
    category_stats: &str,
    free_text: Option<&str>,
    config: &AnalysisConfig,
) -> Summary {
    analyze(&parse_category_stats(category_stats), free_text, config)
}

/// Colour hint for a detail row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Income,
    Expense,
    Neutral,
}

/// One category line of a file card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailRow {
    pub label: String,
    pub amount_text: String,
    pub tone: Tone,
}

/// The balance line shown in the card header
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceLine {
    /// Only present for files with upload-parser vocabulary
    pub caption: Option<String>,
    pub text: String,
}

/// Everything needed to render one uploaded statement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileReport {
    pub id: Option<i64>,
    pub filename: String,
    /// Upload date as DD.MM.YYYY, or the raw value if it could not be parsed
    pub uploaded_on: String,
    pub transactions_count: i64,
    pub balance: BalanceLine,
    pub ai_analysis: Option<String>,
    pub rows: Vec<DetailRow>,
    pub summary: Summary,
}

impl FileReport {
    pub fn build(payload: &FilePayload, config: &AnalysisConfig) -> Self {
        let records = payload.records();
        let summary = analyze(&records, payload.free_text(), config);
        let new_vocabulary = has_new_vocabulary(&records);

        // Row format follows the seed-first shape, not the caption's vocabulary check
        let rows = records
            .iter()
            .map(|r| detail_row(r, summary.shape_tag))
            .collect();

        debug!(
            filename = %payload.filename,
            shape = summary.shape_tag.as_str(),
            new_vocabulary,
            "Built file report"
        );

        Self {
            id: payload.id,
            filename: payload.filename.clone(),
            uploaded_on: format_upload_date(&payload.upload_date),
            transactions_count: payload.transactions_count.unwrap_or(0),
            balance: balance_line(payload.total_amount.unwrap_or(0.0), new_vocabulary),
            ai_analysis: payload.free_text().map(str::to_string),
            rows,
            summary,
        }
    }
}

fn balance_line(total: f64, new_vocabulary: bool) -> BalanceLine {
    if new_vocabulary {
        BalanceLine {
            caption: Some("Остаток на карте:".to_string()),
            text: format!("💳 {} {}", format_amount(total), CURRENCY),
        }
    } else {
        BalanceLine {
            caption: None,
            text: format!("{} {}", format_signed_amount(total), CURRENCY),
        }
    }
}

/// Render one raw record as a detail row
pub fn detail_row(record: &CategoryRecord, shape: DataShape) -> DetailRow {
    let label = display_name(&record.category, shape).into_owned();

    match shape {
        DataShape::NewUpload => {
            let known = KnownLabel::parse(&record.category);
            let tone = match known {
                Some(KnownLabel::TopUps) => Tone::Income,
                Some(KnownLabel::Transfers | KnownLabel::TaxiYandexGo | KnownLabel::Groceries) => {
                    Tone::Expense
                }
                _ => Tone::Neutral,
            };
            // Grocery totals in uploaded files are estimated by the parser
            let suffix = if known == Some(KnownLabel::Groceries) {
                format!("{} (примерно)", CURRENCY)
            } else {
                CURRENCY.to_string()
            };
            DetailRow {
                label,
                amount_text: format!("{} {}", format_amount(record.amount), suffix),
                tone,
            }
        }
        DataShape::Seed => {
            let tone = if record.amount > 0.0 {
                Tone::Income
            } else if record.amount < 0.0 {
                Tone::Expense
            } else {
                Tone::Neutral
            };
            let sign = if tone == Tone::Income { "+" } else { "" };
            DetailRow {
                label,
                amount_text: format!(
                    "{}{} {}",
                    sign,
                    format_signed_amount(record.amount),
                    CURRENCY
                ),
                tone,
            }
        }
    }
}

/// Render a backend timestamp as DD.MM.YYYY
pub fn format_upload_date(raw: &str) -> String {
    let raw = raw.trim();
    let date = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date()))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f").map(|dt| dt.date()))
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"));

    match date {
        Ok(date) => date.format("%d.%m.%Y").to_string(),
        Err(_) => raw.to_string(),
    }
}
