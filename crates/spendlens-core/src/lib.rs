//! Spendlens Core Library
//!
//! Expense categorization and insight generation for uploaded bank statements:
//! - Data shape classification (legacy seed vocabulary vs. upload parser)
//! - Display labels for raw category names
//! - Bucket aggregation (top-ups, transfers, taxi)
//! - Taxi trip estimation from free text or average fare
//! - Recommendation text synthesis
//! - Per-file reports over the backend payload
//!
//! Every analysis function is pure and infallible. Only payload decoding and
//! config loading return [`Result`].

pub mod buckets;
pub mod config;
pub mod error;
pub mod format;
pub mod labels;
pub mod models;
pub mod recommend;
pub mod report;
pub mod rides;
pub mod shape;

pub use buckets::{aggregate, classify_record};
pub use config::AnalysisConfig;
pub use error::{Error, Result};
pub use format::{format_amount, format_money, format_signed_amount};
pub use labels::{display_name, KnownLabel};
pub use models::{
    parse_category_stats, Bucket, BucketTotal, CategoryRecord, DataShape, FilePayload,
    RideEstimate, Summary,
};
pub use recommend::{synthesize, Fragment};
pub use report::{analyze, analyze_stats, DetailRow, FileReport, Tone};
pub use rides::{estimate_rides, extract_trip_count};
pub use shape::{classify_shape, has_new_vocabulary};
