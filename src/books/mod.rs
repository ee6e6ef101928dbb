//! Bookkeeping domain models and persistence-friendly types.

#[allow(clippy::module_inception)]
pub mod books;
pub mod category;
pub mod transaction;

pub use books::Books;
pub use category::{ExpenseCategory, DEFAULT_CATEGORY_COLOR};
pub use transaction::{Expense, ExpenseDraft, Sale, SaleDraft};
