//! Drives the full pipeline the dashboard runs on every filter change:
//! read the CSV, apply the date window, and compute every derived table.

use analytics::{AnalyticsEngine, AnalyticsError};
use chrono::NaiveDate;
use core_types::DemographicField;
use dataset::{date_bounds, filter_by_date_range, read_transactions};
use rust_decimal::Decimal;

const DATASET: &str = "\
customer_id,order_id,order_date,delivery_date,product_name,quantity,total_price,gender,age_group,state
C1,O1,2024-01-01 10:00:00,2024-01-04 00:00:00,T-Shirt,1,19.99,Female,Youth,Queensland
C1,O1,2024-01-01 10:00:00,2024-01-04 00:00:00,Mug,2,25.00,Female,Youth,Queensland
C2,O2,2024-01-02 14:30:00,,Mug,1,12.50,Male,Adults,Victoria
C1,O3,2024-01-05 09:15:00,,Poster,3,30.00,Female,Youth,Queensland
C3,O4,2024-02-10 18:00:00,,T-Shirt,2,39.98,Female,Seniors,Victoria
";

fn day(text: &str) -> NaiveDate {
    text.parse().unwrap()
}

#[test]
fn full_report_over_a_january_window() {
    let all = read_transactions(DATASET.as_bytes()).unwrap();
    let (first, last) = date_bounds(&all).unwrap();
    assert_eq!((first, last), (day("2024-01-01"), day("2024-02-10")));

    let window = filter_by_date_range(&all, day("2024-01-01"), day("2024-01-31")).unwrap();
    assert_eq!(window.len(), 4);

    let engine = AnalyticsEngine::new();

    let daily = engine.daily_orders(&window);
    assert_eq!(daily.len(), 3);
    let total_orders: u64 = daily.iter().map(|d| d.order_count).sum();
    assert_eq!(total_orders, 3); // O1 spans two line items but counts once
    let revenue: Decimal = daily.iter().map(|d| d.revenue).sum();
    let input_revenue: Decimal = window.iter().map(|t| t.total_price).sum();
    assert_eq!(revenue, input_revenue);

    let products = engine.product_totals(&window);
    assert_eq!(products[0].product_name, "Mug");
    assert_eq!(products[0].quantity, 3);

    let by_state = engine.demographic_counts(&window, DemographicField::State);
    assert_eq!(by_state.len(), 2);
    let queensland = by_state.iter().find(|r| r.category == "Queensland").unwrap();
    assert_eq!(queensland.customer_count, 1);
    assert_eq!(queensland.row_count, 3);

    let rfm = engine.rfm(&window).unwrap();
    assert_eq!(rfm.len(), 2);
    let c1 = &rfm[0];
    assert_eq!(c1.customer_id, "C1");
    assert_eq!(c1.frequency, 2); // orders O1 and O3
    assert_eq!(c1.recency_days, 0); // last order on the window's recent date
    let c2 = &rfm[1];
    assert_eq!(c2.recency_days, 3); // Jan 2 vs. global recent Jan 5
}

#[test]
fn window_with_no_rows_yields_empty_tables_and_rfm_refuses() {
    let all = read_transactions(DATASET.as_bytes()).unwrap();
    let window = filter_by_date_range(&all, day("2024-03-01"), day("2024-03-31")).unwrap();
    assert!(window.is_empty());

    let engine = AnalyticsEngine::new();
    assert!(engine.daily_orders(&window).is_empty());
    assert!(engine.product_totals(&window).is_empty());
    assert!(
        engine
            .demographic_counts(&window, DemographicField::AgeGroup)
            .is_empty()
    );
    assert_eq!(
        engine.rfm(&window).unwrap_err(),
        AnalyticsError::NoDataInRange
    );
}
