//! Time and category bucketing for charts and the detailed report table.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::books::{Books, Expense, ExpenseCategory};

/// One calendar month in a trend window, labeled like "Jan 24".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthBucket {
    pub year: i32,
    /// 1-based calendar month.
    pub month: u32,
}

impl MonthBucket {
    /// Short chart label ("Jan 24"). Total even for hand-built buckets with
    /// an out-of-range month.
    pub fn label(&self) -> String {
        match NaiveDate::from_ymd_opt(self.year, self.month, 1) {
            Some(first) => first.format("%b %y").to_string(),
            None => format!("{:02} {:02}", self.month, self.year.rem_euclid(100)),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

/// The `n` most recent calendar months ending at `today`'s month, oldest
/// first.
pub fn month_window(today: NaiveDate, n: usize) -> Vec<MonthBucket> {
    let mut window = Vec::with_capacity(n);
    for back in (0..n).rev() {
        let mut year = today.year();
        let mut month = today.month() as i32 - back as i32;
        while month <= 0 {
            month += 12;
            year -= 1;
        }
        window.push(MonthBucket {
            year,
            month: month as u32,
        });
    }
    window
}

/// Month-bucketed sale and expense totals for the trend chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyTotals {
    pub bucket: MonthBucket,
    pub sales: f64,
    pub expenses: f64,
}

impl MonthlyTotals {
    pub fn profit(&self) -> f64 {
        self.sales - self.expenses
    }
}

/// Sums sales and expenses into the `n`-month window ending at `today`.
///
/// Matching is by month+year equality; transactions outside the window are
/// silently excluded.
pub fn monthly_totals(books: &Books, today: NaiveDate, n: usize) -> Vec<MonthlyTotals> {
    let mut rows: Vec<MonthlyTotals> = month_window(today, n)
        .into_iter()
        .map(|bucket| MonthlyTotals {
            bucket,
            sales: 0.0,
            expenses: 0.0,
        })
        .collect();
    for sale in &books.sales {
        if let Some(row) = rows.iter_mut().find(|row| row.bucket.contains(sale.date)) {
            row.sales += sale.amount;
        }
    }
    for expense in &books.expenses {
        if let Some(row) = rows.iter_mut().find(|row| row.bucket.contains(expense.date)) {
            row.expenses += expense.amount;
        }
    }
    rows
}

/// [`monthly_totals`] anchored at the local calendar date.
pub fn monthly_totals_now(books: &Books, n: usize) -> Vec<MonthlyTotals> {
    monthly_totals(books, chrono::Local::now().date_naive(), n)
}

/// Expense total for one observed category, with its chart color.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: ExpenseCategory,
    pub amount: f64,
    pub color: &'static str,
}

/// Expense totals per observed category, largest first.
///
/// Categories with no spending are omitted rather than zero-filled. Missing
/// or unknown categories were already folded into `Other` at decode time.
pub fn expenses_by_category(expenses: &[Expense]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();
    for expense in expenses {
        match totals
            .iter_mut()
            .find(|total| total.category == expense.category)
        {
            Some(total) => total.amount += expense.amount,
            None => totals.push(CategoryTotal {
                category: expense.category,
                amount: expense.amount,
                color: expense.category.color(),
            }),
        }
    }
    totals.sort_by(|a, b| b.amount.total_cmp(&a.amount));
    totals
}

/// Sales and expenses dated within `[start, end]`, both ends inclusive.
///
/// Dates carry no time component, so the inclusive end bound already covers
/// the entirety of the final calendar day.
pub fn filter_by_date_range(books: &Books, start: NaiveDate, end: NaiveDate) -> Books {
    Books {
        sales: books
            .sales
            .iter()
            .filter(|sale| sale.date >= start && sale.date <= end)
            .cloned()
            .collect(),
        expenses: books
            .expenses
            .iter()
            .filter(|expense| expense.date >= start && expense.date <= end)
            .cloned()
            .collect(),
    }
}

/// Per-day totals for the daily profit chart and the report table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayEntry {
    pub date: NaiveDate,
    pub sales: f64,
    pub expenses: f64,
    pub profit: f64,
}

/// One zero-filled entry per calendar day in `[start, end]`, chronological.
///
/// An inverted range (`end < start`) yields an empty series.
pub fn daily_series(books: &Books, start: NaiveDate, end: NaiveDate) -> Vec<DayEntry> {
    if end < start {
        return Vec::new();
    }
    let mut entries: Vec<DayEntry> = start
        .iter_days()
        .take_while(|day| *day <= end)
        .map(|date| DayEntry {
            date,
            sales: 0.0,
            expenses: 0.0,
            profit: 0.0,
        })
        .collect();
    for sale in &books.sales {
        let offset = (sale.date - start).num_days();
        if (0..entries.len() as i64).contains(&offset) {
            entries[offset as usize].sales += sale.amount;
        }
    }
    for expense in &books.expenses {
        let offset = (expense.date - start).num_days();
        if (0..entries.len() as i64).contains(&offset) {
            entries[offset as usize].expenses += expense.amount;
        }
    }
    for entry in &mut entries {
        entry.profit = entry.sales - entry.expenses;
    }
    entries
}
