//! Recommendation text
//!
//! Builds a short advisory paragraph from the bucket summary and the ride
//! estimate. Each sentence is a [`Fragment`]; a fragment whose data is missing
//! is simply not emitted.

use std::cmp::Ordering;
use std::fmt;

use tracing::debug;

use crate::config::{AnalysisConfig, CURRENCY};
use crate::format::format_amount;
use crate::models::{Bucket, BucketTotal, RideEstimate};

/// One sentence of the recommendation, in emission order
#[derive(Debug, Clone, PartialEq)]
pub enum Fragment {
    LargestExpense {
        bucket: Bucket,
        amount: f64,
    },
    RideSavings {
        trips: u32,
        bus_fare: f64,
        bus_cost: f64,
        savings: f64,
    },
    SecondExpense {
        bucket: Bucket,
        amount: f64,
    },
    TransitTip,
    ReviewTip {
        bucket: Bucket,
    },
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fragment::LargestExpense { bucket, amount } => write!(
                f,
                "Самая большая категория трат: {} ({} {}).",
                bucket.label(),
                format_amount(*amount),
                CURRENCY
            ),
            Fragment::RideSavings {
                trips,
                bus_fare,
                bus_cost,
                savings,
            } => write!(
                f,
                "Если бы вместо такси использовался автобус ({} поездок × {} {c} = {} {c}), можно было бы сэкономить {} {c}.",
                trips,
                format_amount(*bus_fare),
                format_amount(*bus_cost),
                format_amount(*savings),
                c = CURRENCY
            ),
            Fragment::SecondExpense { bucket, amount } => write!(
                f,
                "Вторая по величине категория: {} ({} {}).",
                bucket.label(),
                format_amount(*amount),
                CURRENCY
            ),
            Fragment::TransitTip => write!(
                f,
                "Рекомендуем использовать общественный транспорт для снижения расходов на передвижение."
            ),
            Fragment::ReviewTip { bucket } => write!(
                f,
                "Рекомендуем пересмотреть расходы по категории \"{}\" для оптимизации бюджета.",
                bucket.label()
            ),
        }
    }
}

/// Expense buckets sorted by size, largest first (stable on ties)
pub fn sorted_expenses(buckets: &[BucketTotal]) -> Vec<BucketTotal> {
    let mut expenses: Vec<BucketTotal> = buckets
        .iter()
        .copied()
        .filter(BucketTotal::is_expense)
        .collect();
    expenses.sort_by(|a, b| {
        b.amount
            .abs()
            .partial_cmp(&a.amount.abs())
            .unwrap_or(Ordering::Equal)
    });
    expenses
}

/// Select the sentences that apply to this summary
pub fn fragments(
    buckets: &[BucketTotal],
    estimate: &RideEstimate,
    config: &AnalysisConfig,
) -> Vec<Fragment> {
    let expenses = sorted_expenses(buckets);
    let ride = expenses.iter().find(|b| b.bucket == Bucket::Ride);
    let mut out = Vec::with_capacity(4);

    if let Some(biggest) = expenses.first() {
        out.push(Fragment::LargestExpense {
            bucket: biggest.bucket,
            amount: biggest.amount,
        });
    }

    if let Some(ride) = ride {
        if estimate.trip_count > 0 {
            // Whole tenge, so the rendered product matches the rendered fare
            let bus_fare = config.bus_fare.round();
            let bus_cost = f64::from(estimate.trip_count) * bus_fare;
            let savings = ride.amount.abs() - bus_cost;
            if savings > 0.0 {
                out.push(Fragment::RideSavings {
                    trips: estimate.trip_count,
                    bus_fare,
                    bus_cost,
                    savings,
                });
            }
        }
    }

    if let Some(second) = expenses.get(1) {
        out.push(Fragment::SecondExpense {
            bucket: second.bucket,
            amount: second.amount,
        });
    }

    if ride.is_some() {
        out.push(Fragment::TransitTip);
    } else if let Some(biggest) = expenses.first() {
        out.push(Fragment::ReviewTip {
            bucket: biggest.bucket,
        });
    }

    out
}

/// Render the recommendation paragraph (empty when there is nothing to say)
pub fn synthesize(
    buckets: &[BucketTotal],
    estimate: &RideEstimate,
    config: &AnalysisConfig,
) -> String {
    let fragments = fragments(buckets, estimate, config);
    debug!(fragments = fragments.len(), "Synthesized recommendation");
    fragments
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}
