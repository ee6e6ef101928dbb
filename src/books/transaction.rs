use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::category::ExpenseCategory;

/// A recorded sale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Sale {
    pub id: Uuid,
    pub date: NaiveDate,
    pub customer: String,
    pub description: String,
    pub amount: f64,
}

/// A recorded expense.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    pub id: Uuid,
    pub date: NaiveDate,
    #[serde(default)]
    pub category: ExpenseCategory,
    pub description: String,
    pub amount: f64,
}

/// Sale payload without an id; the store assigns one on insert.
#[derive(Debug, Clone)]
pub struct SaleDraft {
    pub date: NaiveDate,
    pub customer: String,
    pub description: String,
    pub amount: f64,
}

impl SaleDraft {
    pub fn new(
        date: NaiveDate,
        customer: impl Into<String>,
        description: impl Into<String>,
        amount: f64,
    ) -> Self {
        Self {
            date,
            customer: customer.into(),
            description: description.into(),
            amount,
        }
    }

    pub fn into_sale(self, id: Uuid) -> Sale {
        Sale {
            id,
            date: self.date,
            customer: self.customer,
            description: self.description,
            amount: self.amount,
        }
    }
}

/// Expense payload without an id; the store assigns one on insert.
#[derive(Debug, Clone)]
pub struct ExpenseDraft {
    pub date: NaiveDate,
    pub category: ExpenseCategory,
    pub description: String,
    pub amount: f64,
}

impl ExpenseDraft {
    pub fn new(
        date: NaiveDate,
        category: ExpenseCategory,
        description: impl Into<String>,
        amount: f64,
    ) -> Self {
        Self {
            date,
            category,
            description: description.into(),
            amount,
        }
    }

    pub fn into_expense(self, id: Uuid) -> Expense {
        Expense {
            id,
            date: self.date,
            category: self.category,
            description: self.description,
            amount: self.amount,
        }
    }
}
