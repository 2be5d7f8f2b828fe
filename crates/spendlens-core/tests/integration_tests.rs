//! Integration tests for spendlens-core
//!
//! These tests exercise the full payload → summary → recommendation workflow
//! and the invariants the summary must keep for any input.

use spendlens_core::{
    aggregate, analyze, classify_record, classify_shape, estimate_rides, synthesize,
    AnalysisConfig, Bucket, BucketTotal, CategoryRecord, DataShape, FilePayload, FileReport,
    RideEstimate,
};

/// A mixed bag of labels covering every rule, plus unmatched rows
fn mixed_records() -> Vec<CategoryRecord> {
    vec![
        CategoryRecord::new("Пополнения", 50000.0),
        CategoryRecord::new("Такси (YANDEX.GO)", -9000.0),
        CategoryRecord::new("Переводы (исходящие)", -12000.0),
        CategoryRecord::new("Переводы (входящие)", 7000.0),
        CategoryRecord::new("Uber", 300.0),
        CategoryRecord::new("Кафе", -2500.0),
        CategoryRecord::new("Кэшбэк", 150.5),
        CategoryRecord::new("deposit", -10.0),
        CategoryRecord::new("", 0.0),
    ]
}

fn config() -> AnalysisConfig {
    AnalysisConfig::default()
}

// =============================================================================
// End-to-end scenarios
// =============================================================================

#[test]
fn test_top_up_and_taxi_scenario() {
    let records = vec![
        CategoryRecord::new("Пополнения", 50000.0),
        CategoryRecord::new("Такси (YANDEX.GO)", -9000.0),
    ];

    let summary = analyze(&records, None, &config());

    assert_eq!(summary.shape_tag, DataShape::NewUpload);
    assert_eq!(
        summary.buckets,
        vec![
            BucketTotal {
                bucket: Bucket::TopUp,
                amount: 50000.0
            },
            BucketTotal {
                bucket: Bucket::Ride,
                amount: -9000.0
            },
        ]
    );
    assert_eq!(
        summary.ride_estimate,
        RideEstimate {
            total_amount: 9000.0,
            trip_count: 6
        }
    );
    assert!(summary
        .recommendation
        .starts_with("Самая большая категория трат: Такси (9 000 ₸)."));
    assert!(summary
        .recommendation
        .contains("(6 поездок × 100 ₸ = 600 ₸), можно было бы сэкономить 8 400 ₸."));
}

#[test]
fn test_empty_scenario() {
    let summary = analyze(&[], None, &config());
    assert!(summary.buckets.is_empty());
    assert_eq!(summary.ride_estimate, RideEstimate::default());
    assert_eq!(summary.recommendation, "");
}

#[test]
fn test_trip_hint_from_text() {
    let est = estimate_rides(&[], Some("7 поездок"), &config());
    assert_eq!(
        est,
        RideEstimate {
            total_amount: 0.0,
            trip_count: 7
        }
    );
}

#[test]
fn test_trip_fallback_from_fare() {
    let records = vec![
        CategoryRecord::new("Такси", -1000.0),
        CategoryRecord::new("Яндекс Go", -2000.0),
    ];
    let est = estimate_rides(&records, None, &config());
    assert_eq!(
        est,
        RideEstimate {
            total_amount: 3000.0,
            trip_count: 2
        }
    );
}

#[test]
fn test_payload_to_report() {
    let json = r#"[
        {
            "id": 1,
            "filename": "statement_may.pdf",
            "upload_date": "2024-06-02T08:30:00",
            "ai_analysis": "За месяц было 25 поездок на такси.",
            "total_amount": 12345.67,
            "transactions_count": 42,
            "category_stats": "[{\"category\":\"Пополнения\",\"amount\":150000},{\"category\":\"Переводы\",\"amount\":-60000},{\"category\":\"Такси (YANDEX.GO)\",\"amount\":-30000}]"
        },
        {
            "id": 2,
            "filename": "broken.pdf",
            "upload_date": "2024-06-03T09:00:00",
            "ai_analysis": null,
            "total_amount": null,
            "transactions_count": 0,
            "category_stats": "{not json"
        }
    ]"#;

    let files = FilePayload::list_from_json(json).unwrap();
    assert_eq!(files.len(), 2);

    let first = FileReport::build(&files[0], &config());
    assert_eq!(first.uploaded_on, "02.06.2024");
    assert_eq!(first.balance.text, "💳 12 346 ₸");
    assert_eq!(first.summary.ride_estimate.trip_count, 25);
    assert_eq!(
        first.summary.recommendation,
        "Самая большая категория трат: Переводы (60 000 ₸). \
         Если бы вместо такси использовался автобус (25 поездок × 100 ₸ = 2 500 ₸), можно было бы сэкономить 27 500 ₸. \
         Вторая по величине категория: Такси (30 000 ₸). \
         Рекомендуем использовать общественный транспорт для снижения расходов на передвижение."
    );

    let second = FileReport::build(&files[1], &config());
    assert!(second.rows.is_empty());
    assert!(second.summary.buckets.is_empty());
    assert_eq!(second.summary.recommendation, "");
}

#[test]
fn test_custom_fares_flow_through() {
    let config = AnalysisConfig {
        average_fare: 3000.0,
        bus_fare: 150.0,
    };
    let records = vec![CategoryRecord::new("Такси", -9000.0)];
    let summary = analyze(&records, None, &config);
    assert_eq!(summary.ride_estimate.trip_count, 3);
    assert!(summary
        .recommendation
        .contains("(3 поездок × 150 ₸ = 450 ₸), можно было бы сэкономить 8 550 ₸."));
}

// =============================================================================
// Invariants
// =============================================================================

#[test]
fn test_aggregation_never_invents_mass() {
    let records = mixed_records();
    let bucket_mass: f64 = aggregate(&records).iter().map(|b| b.amount.abs()).sum();
    let input_mass: f64 = records.iter().map(|r| r.amount.abs()).sum();
    assert!(bucket_mass <= input_mass);
}

#[test]
fn test_each_record_counted_once() {
    let records = mixed_records();
    let buckets = aggregate(&records);

    // Recompute each bucket from per-record classification; totals must agree
    for total in &buckets {
        let expected: f64 = records
            .iter()
            .filter(|r| classify_record(r) == Some(total.bucket))
            .map(|r| r.amount.abs())
            .sum();
        assert!(
            (total.amount.abs() - expected).abs() < 1e-9,
            "{:?}: {} vs {}",
            total.bucket,
            total.amount,
            expected
        );
    }
}

#[test]
fn test_sign_convention() {
    for total in aggregate(&mixed_records()) {
        match total.bucket {
            Bucket::TopUp => assert!(total.amount > 0.0),
            Bucket::Transfer | Bucket::Ride => assert!(total.amount < 0.0),
        }
    }
}

#[test]
fn test_zero_total_bucket_absent() {
    let records = vec![
        CategoryRecord::new("Переводы", 0.0),
        CategoryRecord::new("Такси", -500.0),
    ];
    let buckets = aggregate(&records);
    assert!(buckets.iter().all(|b| b.bucket != Bucket::Transfer));
    assert_eq!(buckets.len(), 1);
}

#[test]
fn test_repeated_calls_are_identical() {
    let records = mixed_records();
    let text = Some("поездки: 4");
    assert_eq!(aggregate(&records), aggregate(&records));
    assert_eq!(classify_shape(&records), classify_shape(&records));

    let a = analyze(&records, text, &config());
    let b = analyze(&records, text, &config());
    assert_eq!(a, b);
    assert_eq!(
        synthesize(&a.buckets, &a.ride_estimate, &config()),
        a.recommendation
    );
}
