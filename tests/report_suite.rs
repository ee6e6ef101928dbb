//! Reporting pipeline over a seeded store: filter, aggregate, export.

use books_core::books::{ExpenseCategory, ExpenseDraft, SaleDraft};
use books_core::report::{
    csv_string, daily_series, expenses_by_category, filter_by_date_range, monthly_totals,
    summarize, ProfitStatus,
};
use books_core::storage::MemoryStore;
use books_core::store::Store;
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn seeded_store() -> Store<MemoryStore> {
    let mut store = Store::open(MemoryStore::new()).expect("open store");
    store
        .add_sale(SaleDraft::new(date(2024, 1, 5), "Acme", "Plush bears", 400.0))
        .expect("add sale");
    store
        .add_sale(SaleDraft::new(date(2024, 2, 14), "Globex", "Bulk order", 600.0))
        .expect("add sale");
    store
        .add_expense(ExpenseDraft::new(
            date(2024, 1, 1),
            ExpenseCategory::Rent,
            "January rent",
            500.0,
        ))
        .expect("add expense");
    store
        .add_expense(ExpenseDraft::new(
            date(2024, 2, 3),
            ExpenseCategory::Marketing,
            "Flyers",
            120.0,
        ))
        .expect("add expense");
    store
}

#[test]
fn dashboard_summary_over_the_full_books() {
    let store = seeded_store();
    let summary = summarize(store.books());
    assert_eq!(summary.total_sales, 1000.0);
    assert_eq!(summary.total_expenses, 620.0);
    assert_eq!(summary.profit, 380.0);
    assert_eq!(summary.profit_margin, 38.0);
    assert_eq!(summary.average_sale, 500.0);
    assert_eq!(summary.sale_count, 2);
    assert_eq!(summary.status, ProfitStatus::Profitable);
}

#[test]
fn filtered_month_feeds_category_and_daily_views() {
    let store = seeded_store();
    let january = filter_by_date_range(store.books(), date(2024, 1, 1), date(2024, 1, 31));
    assert_eq!(january.sales.len(), 1);
    assert_eq!(january.expenses.len(), 1);

    let categories = expenses_by_category(&january.expenses);
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].category, ExpenseCategory::Rent);
    assert_eq!(categories[0].amount, 500.0);

    let series = daily_series(&january, date(2024, 1, 1), date(2024, 1, 31));
    assert_eq!(series.len(), 31);
    assert_eq!(series[0].expenses, 500.0);
    assert_eq!(series[4].sales, 400.0);
    let total_profit: f64 = series.iter().map(|day| day.profit).sum();
    assert_eq!(total_profit, -100.0);
}

#[test]
fn six_month_trend_ends_at_the_reference_month() {
    let store = seeded_store();
    let rows = monthly_totals(store.books(), date(2024, 2, 20), 6);
    assert_eq!(rows.len(), 6);
    let labels: Vec<String> = rows.iter().map(|row| row.bucket.label()).collect();
    assert_eq!(
        labels,
        ["Sep 23", "Oct 23", "Nov 23", "Dec 23", "Jan 24", "Feb 24"]
    );
    assert_eq!(rows[4].sales, 400.0);
    assert_eq!(rows[4].expenses, 500.0);
    assert_eq!(rows[5].profit(), 480.0);
}

#[test]
fn export_column_sums_to_the_filtered_profit() {
    let store = seeded_store();
    let filtered = filter_by_date_range(store.books(), date(2024, 1, 1), date(2024, 2, 28));
    let csv = csv_string(&filtered).expect("render csv");

    let mut reader = csv::Reader::from_reader(csv.as_bytes());
    let mut net = 0.0;
    let mut rows = 0;
    for record in reader.records() {
        let record = record.expect("row");
        net += record[4].parse::<f64>().expect("amount");
        rows += 1;
    }
    assert_eq!(rows, 4);
    assert_eq!(net, 380.0);
}
