//! Pure financial metrics over a snapshot.
//!
//! Every function here is total: empty collections and zero totals resolve
//! to zero-valued results, never to NaN or division artifacts.

use serde::Serialize;

use crate::books::Books;

/// Sum of all sale amounts.
pub fn total_sales(books: &Books) -> f64 {
    books.sales.iter().map(|sale| sale.amount).sum()
}

/// Sum of all expense amounts.
pub fn total_expenses(books: &Books) -> f64 {
    books.expenses.iter().map(|expense| expense.amount).sum()
}

/// Net profit; negative when expenses exceed sales.
pub fn profit(books: &Books) -> f64 {
    total_sales(books) - total_expenses(books)
}

/// Profit as a percentage of sales. Zero when there are no sales,
/// regardless of expenses.
pub fn profit_margin(books: &Books) -> f64 {
    let sales = total_sales(books);
    if sales > 0.0 {
        profit(books) / sales * 100.0
    } else {
        0.0
    }
}

/// Mean sale amount, or zero when no sales are recorded.
pub fn average_sale(books: &Books) -> f64 {
    if books.sales.is_empty() {
        0.0
    } else {
        total_sales(books) / books.sales.len() as f64
    }
}

/// Mean expense amount, or zero when no expenses are recorded.
pub fn average_expense(books: &Books) -> f64 {
    if books.expenses.is_empty() {
        0.0
    } else {
        total_expenses(books) / books.expenses.len() as f64
    }
}

/// Coarse health label for the overview card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProfitStatus {
    Profitable,
    Loss,
    BreakEven,
}

/// Bundle of the dashboard metrics, computed in one pass over the snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub total_sales: f64,
    pub total_expenses: f64,
    pub profit: f64,
    pub profit_margin: f64,
    pub average_sale: f64,
    pub average_expense: f64,
    pub sale_count: usize,
    pub expense_count: usize,
    pub status: ProfitStatus,
}

pub fn summarize(books: &Books) -> Summary {
    let net = profit(books);
    let status = if net > 0.0 {
        ProfitStatus::Profitable
    } else if net < 0.0 {
        ProfitStatus::Loss
    } else {
        ProfitStatus::BreakEven
    };
    Summary {
        total_sales: total_sales(books),
        total_expenses: total_expenses(books),
        profit: net,
        profit_margin: profit_margin(books),
        average_sale: average_sale(books),
        average_expense: average_expense(books),
        sale_count: books.sales.len(),
        expense_count: books.expenses.len(),
        status,
    }
}
