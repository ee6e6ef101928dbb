//! CSV projection of a (usually date-filtered) snapshot.

use chrono::NaiveDate;
use serde::Serialize;

use crate::{books::Books, errors::BooksError};

/// Header row of the exported report.
pub const CSV_HEADER: [&str; 5] = ["Type", "Date", "Description", "Category/Customer", "Amount"];

/// Transaction kind column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RowKind {
    Sale,
    Expense,
}

/// One flattened transaction row.
///
/// Expenses carry a negated amount so that summing the amount column yields
/// net profit for the exported range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportRow {
    #[serde(rename = "Type")]
    pub kind: RowKind,
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Category/Customer")]
    pub party: String,
    #[serde(rename = "Amount")]
    pub amount: f64,
}

/// Flattens sales and expenses into rows ordered by date ascending.
///
/// The sort is stable, so same-day rows keep sales (in insertion order)
/// ahead of that day's expenses.
pub fn export_rows(books: &Books) -> Vec<ExportRow> {
    let mut rows = Vec::with_capacity(books.transaction_count());
    rows.extend(books.sales.iter().map(|sale| ExportRow {
        kind: RowKind::Sale,
        date: sale.date,
        description: sale.description.clone(),
        party: sale.customer.clone(),
        amount: sale.amount,
    }));
    rows.extend(books.expenses.iter().map(|expense| ExportRow {
        kind: RowKind::Expense,
        date: expense.date,
        description: expense.description.clone(),
        party: expense.category.to_string(),
        amount: -expense.amount,
    }));
    rows.sort_by_key(|row| row.date);
    rows
}

/// Renders the snapshot as CSV text with the standard header.
///
/// Quoting (embedded quotes doubled, fields wrapped) is handled by the
/// writer, so descriptions containing commas or quotes round-trip through
/// any conformant parser.
pub fn csv_string(books: &Books) -> Result<String, BooksError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;
    for row in export_rows(books) {
        let kind = match row.kind {
            RowKind::Sale => "Sale",
            RowKind::Expense => "Expense",
        };
        let date = row.date.to_string();
        let amount = format_amount(row.amount);
        writer.write_record([
            kind,
            date.as_str(),
            row.description.as_str(),
            row.party.as_str(),
            amount.as_str(),
        ])?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|err| BooksError::Storage(err.to_string()))?;
    String::from_utf8(bytes).map_err(|err| BooksError::Storage(err.to_string()))
}

/// Conventional file name embedding the active date range.
pub fn report_file_name(start: NaiveDate, end: NaiveDate) -> String {
    format!("books-report-{start}-to-{end}.csv")
}

fn format_amount(amount: f64) -> String {
    format!("{amount:.2}")
}
