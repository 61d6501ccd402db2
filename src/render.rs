use analytics::{DailyOrdersRow, DemographicCountRow, ProductTotalsRow, RfmRow};
use chrono::NaiveDate;
use comfy_table::{Table, presets::UTF8_FULL};
use rust_decimal::Decimal;
use serde::Serialize;

/// Everything one filter application produces, bundled for rendering.
///
/// `rfm` is `None` when the window selected zero rows, since recency is
/// undefined there; every other table degrades to an empty vector.
#[derive(Debug, Serialize)]
pub struct Report {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub daily_orders: Vec<DailyOrdersRow>,
    pub product_totals: Vec<ProductTotalsRow>,
    pub by_gender: Vec<DemographicCountRow>,
    pub by_age_group: Vec<DemographicCountRow>,
    pub by_state: Vec<DemographicCountRow>,
    pub rfm: Option<Vec<RfmRow>>,
}

impl Report {
    /// Total distinct orders across the window, from the daily table.
    pub fn total_orders(&self) -> u64 {
        self.daily_orders.iter().map(|d| d.order_count).sum()
    }

    /// Total revenue across the window, from the daily table.
    pub fn total_revenue(&self) -> Decimal {
        self.daily_orders.iter().map(|d| d.revenue).sum()
    }
}

/// Serializes the whole report for machine consumption.
pub fn to_json(report: &Report) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

/// Prints the report to stdout as the dashboard's sections: daily orders,
/// product performance, customer demographics, and the RFM ranking.
pub fn print_report(report: &Report, top: usize) {
    println!(
        "Dashboard report for {} .. {}\n",
        report.start_date, report.end_date
    );

    println!("== Daily Orders ==");
    println!("Total orders:  {}", report.total_orders());
    println!("Total revenue: {}", report.total_revenue());
    let mut daily = new_table(vec!["Day", "Orders", "Revenue"]);
    for row in &report.daily_orders {
        daily.add_row(vec![
            row.day.to_string(),
            row.order_count.to_string(),
            row.revenue.to_string(),
        ]);
    }
    println!("{daily}\n");

    println!("== Product Performance (top {top}) ==");
    let mut products = new_table(vec!["Product", "Quantity Sold"]);
    for row in report.product_totals.iter().take(top) {
        products.add_row(vec![row.product_name.clone(), row.quantity.to_string()]);
    }
    println!("{products}\n");

    println!("== Customer Demographics ==");
    print_breakdown("By gender", &sorted_by_customers(&report.by_gender));
    // Age groups keep their fixed Youth/Adults/Seniors order.
    print_breakdown("By age group", &report.by_age_group);
    print_breakdown("By state", &sorted_by_customers(&report.by_state));

    match &report.rfm {
        Some(rfm) => print_rfm(rfm, top),
        None => println!("== Best Customers (RFM) ==\nNo data in range.\n"),
    }
}

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(header);
    table
}

/// Breakdown tables are displayed largest-first, like the dashboard's bar
/// charts; the underlying rows stay in their canonical order.
fn sorted_by_customers(rows: &[DemographicCountRow]) -> Vec<DemographicCountRow> {
    let mut sorted = rows.to_vec();
    sorted.sort_by(|a, b| b.customer_count.cmp(&a.customer_count));
    sorted
}

fn print_breakdown(title: &str, rows: &[DemographicCountRow]) {
    println!("{title}:");
    let mut table = new_table(vec!["Category", "Customers", "Line Items"]);
    for row in rows {
        table.add_row(vec![
            row.category.clone(),
            row.customer_count.to_string(),
            row.row_count.to_string(),
        ]);
    }
    println!("{table}\n");
}

fn print_rfm(rfm: &[RfmRow], top: usize) {
    println!("== Best Customers (RFM) ==");
    if let Some(averages) = RfmAverages::of(rfm) {
        println!("Average recency (days): {:.1}", averages.recency);
        println!("Average frequency:      {:.2}", averages.frequency);
        println!("Average monetary:       {}", averages.monetary);
    }

    let mut by_recency = rfm.to_vec();
    by_recency.sort_by(|a, b| a.recency_days.cmp(&b.recency_days));
    print_rfm_axis("By recency (days, most recent first)", &by_recency, top, |r| {
        r.recency_days.to_string()
    });

    let mut by_frequency = rfm.to_vec();
    by_frequency.sort_by(|a, b| b.frequency.cmp(&a.frequency));
    print_rfm_axis("By frequency", &by_frequency, top, |r| {
        r.frequency.to_string()
    });

    let mut by_monetary = rfm.to_vec();
    by_monetary.sort_by(|a, b| b.monetary.cmp(&a.monetary));
    print_rfm_axis("By monetary", &by_monetary, top, |r| r.monetary.to_string());
}

fn print_rfm_axis<F>(title: &str, rows: &[RfmRow], top: usize, value: F)
where
    F: Fn(&RfmRow) -> String,
{
    println!("{title}:");
    let mut table = new_table(vec!["Customer", "Value"]);
    for row in rows.iter().take(top) {
        table.add_row(vec![row.customer_id.clone(), value(row)]);
    }
    println!("{table}\n");
}

struct RfmAverages {
    recency: f64,
    frequency: f64,
    monetary: Decimal,
}

impl RfmAverages {
    fn of(rfm: &[RfmRow]) -> Option<Self> {
        if rfm.is_empty() {
            return None;
        }
        let n = rfm.len() as f64;
        let monetary_sum: Decimal = rfm.iter().map(|r| r.monetary).sum();
        Some(Self {
            recency: rfm.iter().map(|r| r.recency_days as f64).sum::<f64>() / n,
            frequency: rfm.iter().map(|r| r.frequency as f64).sum::<f64>() / n,
            monetary: (monetary_sum / Decimal::from(rfm.len() as u64)).round_dp(2),
        })
    }
}
