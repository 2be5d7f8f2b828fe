//! Bucket aggregation for the quick summary
//!
//! Each record is tested against an ordered list of rules (ride, then
//! transfer, then top-up); the first rule that matches wins. Records that
//! match nothing are left out of the summary.

use tracing::debug;

use crate::models::{Bucket, BucketTotal, CategoryRecord};

pub const RIDE_KEYWORDS: &[&str] = &["транспорт", "такси", "yandex", "яндекс", "uber"];
pub const TRANSFER_KEYWORDS: &[&str] = &["перевод", "transfer", "входящ", "исходящ"];
pub const TOP_UP_KEYWORDS: &[&str] = &["пополнени", "deposit"];

/// How a rule decides whether a record belongs to its bucket
#[derive(Debug, Clone, Copy)]
pub enum Matcher {
    /// Any keyword is a substring of the lower-cased label
    Keywords(&'static [&'static str]),
    /// Keyword match or any inflow; only inflows are counted either way
    Inflow(&'static [&'static str]),
}

#[derive(Debug, Clone, Copy)]
pub struct BucketRule {
    pub bucket: Bucket,
    pub matcher: Matcher,
}

/// Rules in priority order
pub const RULES: [BucketRule; 3] = [
    BucketRule {
        bucket: Bucket::Ride,
        matcher: Matcher::Keywords(RIDE_KEYWORDS),
    },
    BucketRule {
        bucket: Bucket::Transfer,
        matcher: Matcher::Keywords(TRANSFER_KEYWORDS),
    },
    BucketRule {
        bucket: Bucket::TopUp,
        matcher: Matcher::Inflow(TOP_UP_KEYWORDS),
    },
];

fn contains_any(label: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| label.contains(kw))
}

impl BucketRule {
    /// Contribution of a record to this rule's bucket
    ///
    /// `None` means the rule does not claim the record. `Some(0.0)` means it
    /// claims it but adds nothing (a top-up label on a non-positive amount).
    fn contribution(&self, label: &str, amount: f64) -> Option<f64> {
        match self.matcher {
            Matcher::Keywords(keywords) => contains_any(label, keywords).then(|| amount.abs()),
            Matcher::Inflow(keywords) => {
                if amount > 0.0 {
                    Some(amount)
                } else if contains_any(label, keywords) {
                    Some(0.0)
                } else {
                    None
                }
            }
        }
    }
}

/// Whether a category label counts as taxi/transport
pub fn is_ride_category(category: &str) -> bool {
    contains_any(&category.to_lowercase(), RIDE_KEYWORDS)
}

/// First rule that claims a record, with its contribution
fn claim(label: &str, amount: f64) -> Option<(Bucket, f64)> {
    RULES
        .iter()
        .find_map(|rule| rule.contribution(label, amount).map(|value| (rule.bucket, value)))
}

/// The bucket a record is counted in, if any
///
/// A top-up label on a non-positive amount is claimed but not counted.
pub fn classify_record(record: &CategoryRecord) -> Option<Bucket> {
    let (bucket, _) = claim(&record.category.to_lowercase(), record.amount)?;
    if bucket == Bucket::TopUp && record.amount <= 0.0 {
        return None;
    }
    Some(bucket)
}

/// Aggregate records into signed display totals
///
/// Output is in `Bucket::ALL` order. TopUp is positive, Transfer and Ride are
/// negative whatever the sign of the source rows. Buckets whose total is
/// exactly zero are omitted.
pub fn aggregate(records: &[CategoryRecord]) -> Vec<BucketTotal> {
    let mut totals = [0.0_f64; 3];
    let mut skipped = 0usize;

    for record in records {
        match claim(&record.category.to_lowercase(), record.amount) {
            Some((bucket, value)) => totals[slot(bucket)] += value,
            None => skipped += 1,
        }
    }

    let result: Vec<BucketTotal> = Bucket::ALL
        .iter()
        .filter_map(|&bucket| {
            let total = totals[slot(bucket)];
            if total == 0.0 {
                return None;
            }
            let amount = match bucket {
                Bucket::TopUp => total.abs(),
                Bucket::Transfer | Bucket::Ride => -total.abs(),
            };
            Some(BucketTotal { bucket, amount })
        })
        .collect();

    debug!(
        records = records.len(),
        skipped,
        buckets = result.len(),
        "Aggregated category records"
    );
    result
}

fn slot(bucket: Bucket) -> usize {
    match bucket {
        Bucket::TopUp => 0,
        Bucket::Transfer => 1,
        Bucket::Ride => 2,
    }
}
