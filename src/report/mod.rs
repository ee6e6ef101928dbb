//! Read-only projections over the store's snapshot: financial metrics,
//! time and category bucketing, and the CSV export.

pub mod aggregate;
pub mod export;
pub mod metrics;

pub use aggregate::{
    daily_series, expenses_by_category, filter_by_date_range, month_window, monthly_totals,
    monthly_totals_now, CategoryTotal, DayEntry, MonthBucket, MonthlyTotals,
};
pub use export::{csv_string, export_rows, report_file_name, ExportRow, RowKind, CSV_HEADER};
pub use metrics::{
    average_expense, average_sale, profit, profit_margin, summarize, total_expenses, total_sales,
    ProfitStatus, Summary,
};
