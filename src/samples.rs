//! Embedded sample dataset.
//!
//! A small customer-orders table with the kinds of defects the analyzer
//! looks for: a serial id, currency and percent columns stored as text,
//! missing entries, and price outliers. Useful for demos and as a known
//! input in tests.
//!
//! # Example
//!
//! ```
//! use confiar::{analyze_dataset, samples};
//!
//! let dataset = samples::customer_orders().unwrap();
//! let report = analyze_dataset(&dataset).unwrap();
//! assert_eq!(report.verdict().message(), "Dataset needs cleaning");
//! ```

use std::sync::Arc;

use arrow::{
    array::{Float64Array, Int64Array, RecordBatch, StringArray},
    datatypes::{DataType, Field, Schema},
};

use crate::{ArrowDataset, Result};

/// Load the embedded customer-orders sample (40 rows, 7 columns).
///
/// The columns are constructed to each land on a different analyzer
/// outcome:
/// - `order_id`: consecutive serial, ignored as an identifier
/// - `region`: categorical with one missing entry
/// - `quantity`: numeric with enough missing entries to need cleaning
/// - `unit_price`: numeric with five far-out price spikes
/// - `account_balance`: currency text (`$1,500.00`) that converts cleanly
/// - `discount_pct`: percent text with two `n/a` entries and a skewed tail
/// - `delivery_days`: numeric with 35% of entries missing
///
/// # Errors
///
/// Returns an error if the batch cannot be constructed, which cannot
/// happen for embedded data.
pub fn customer_orders() -> Result<ArrowDataset> {
    let schema = Arc::new(Schema::new(vec![
        Field::new("order_id", DataType::Int64, false),
        Field::new("region", DataType::Utf8, true),
        Field::new("quantity", DataType::Int64, true),
        Field::new("unit_price", DataType::Float64, false),
        Field::new("account_balance", DataType::Utf8, false),
        Field::new("discount_pct", DataType::Utf8, false),
        Field::new("delivery_days", DataType::Float64, true),
    ]));

    let (order_id, region, quantity, unit_price, account_balance, discount_pct, delivery_days) =
        orders_data();

    let batch = RecordBatch::try_new(
        schema,
        vec![
            Arc::new(Int64Array::from(order_id)),
            Arc::new(StringArray::from(region)),
            Arc::new(Int64Array::from(quantity)),
            Arc::new(Float64Array::from(unit_price)),
            Arc::new(StringArray::from(account_balance)),
            Arc::new(StringArray::from(discount_pct)),
            Arc::new(Float64Array::from(delivery_days)),
        ],
    )
    .map_err(crate::Error::Arrow)?;

    ArrowDataset::from_batch(batch)
}

/// Returns the embedded order values
#[allow(clippy::type_complexity)]
fn orders_data() -> (
    Vec<i64>,
    Vec<Option<&'static str>>,
    Vec<Option<i64>>,
    Vec<f64>,
    Vec<&'static str>,
    Vec<&'static str>,
    Vec<Option<f64>>,
) {
    let order_id: Vec<i64> = (1..=40).collect();

    let region = vec![
        Some("north"),
        Some("south"),
        Some("east"),
        Some("west"),
        Some("north"),
        Some("east"),
        Some("south"),
        Some("west"),
        Some("north"),
        Some("south"),
        Some("west"),
        Some("east"),
        Some("north"),
        Some("south"),
        Some("east"),
        Some("west"),
        Some("north"),
        None,
        Some("south"),
        Some("east"),
        Some("west"),
        Some("north"),
        Some("south"),
        Some("east"),
        Some("north"),
        Some("west"),
        Some("south"),
        Some("east"),
        Some("north"),
        Some("south"),
        Some("west"),
        Some("east"),
        Some("south"),
        Some("north"),
        Some("east"),
        Some("west"),
        Some("south"),
        Some("north"),
        Some("east"),
        Some("west"),
    ];

    let quantity = vec![
        Some(2),
        Some(4),
        Some(1),
        Some(3),
        Some(5),
        Some(2),
        Some(4),
        None,
        Some(1),
        Some(3),
        Some(5),
        Some(2),
        Some(4),
        Some(1),
        Some(3),
        Some(5),
        Some(2),
        Some(4),
        Some(1),
        None,
        Some(3),
        Some(5),
        Some(2),
        Some(4),
        Some(1),
        Some(3),
        Some(5),
        Some(2),
        Some(4),
        Some(1),
        Some(3),
        Some(5),
        Some(2),
        None,
        Some(4),
        Some(1),
        Some(3),
        Some(5),
        Some(2),
        Some(4),
    ];

    // Five price spikes well outside the quartile fences
    let unit_price = vec![
        9.25, 9.5, 9.75, 9.99, 9.99, 9.99, 89.99, 10.25, 10.49, 10.49, 10.75, 10.99, 11.25, 11.49,
        94.5, 9.35, 9.65, 10.15, 10.35, 10.65, 10.85, 11.15, 99.99, 11.35, 9.45, 9.85, 10.05,
        10.55, 10.95, 11.05, 105.0, 11.45, 9.55, 9.95, 10.45, 10.85, 11.25, 9.75, 119.99, 10.25,
    ];

    let account_balance = vec![
        "$1,500.00",
        "$3,500.00",
        "$1,550.00",
        "$3,450.00",
        "$1,600.00",
        "$3,400.00",
        "$1,650.00",
        "$3,350.00",
        "$1,700.00",
        "$3,300.00",
        "$1,750.00",
        "$3,250.00",
        "$1,800.00",
        "$3,200.00",
        "$1,850.00",
        "$3,150.00",
        "$1,900.00",
        "$3,100.00",
        "$1,950.00",
        "$3,050.00",
        "$2,000.00",
        "$3,000.00",
        "$2,050.00",
        "$2,950.00",
        "$2,100.00",
        "$2,900.00",
        "$2,150.00",
        "$2,850.00",
        "$2,200.00",
        "$2,800.00",
        "$2,250.00",
        "$2,750.00",
        "$2,300.00",
        "$2,700.00",
        "$2,350.00",
        "$2,650.00",
        "$2,400.00",
        "$2,600.00",
        "$2,450.00",
        "$2,550.00",
    ];

    let discount_pct = vec![
        "5%", "0%", "10%", "0%", "15%", "5%", "10%", "0%", "5%", "25%", "0%", "10%", "5%", "n/a",
        "0%", "10%", "15%", "5%", "0%", "10%", "50%", "5%", "0%", "10%", "5%", "15%", "0%", "10%",
        "n/a", "5%", "0%", "10%", "25%", "5%", "0%", "15%", "10%", "50%", "5%", "10%",
    ];

    let delivery_days = vec![
        Some(2.0),
        None,
        Some(3.0),
        Some(4.0),
        None,
        Some(5.0),
        Some(3.0),
        Some(4.0),
        None,
        Some(2.0),
        Some(6.0),
        None,
        Some(5.0),
        None,
        Some(4.0),
        Some(3.0),
        None,
        Some(7.0),
        Some(4.0),
        Some(5.0),
        None,
        Some(3.0),
        Some(2.0),
        None,
        Some(6.0),
        None,
        Some(4.0),
        Some(5.0),
        None,
        Some(3.0),
        Some(4.0),
        None,
        Some(5.0),
        Some(2.0),
        None,
        Some(6.0),
        None,
        Some(3.0),
        Some(4.0),
        None,
    ];

    (
        order_id,
        region,
        quantity,
        unit_price,
        account_balance,
        discount_pct,
        delivery_days,
    )
}
