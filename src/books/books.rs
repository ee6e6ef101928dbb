use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::transaction::{Expense, Sale};

/// Canonical application state: every recorded sale and expense, in
/// insertion order. Ids are unique within each collection.
///
/// Unknown fields in a persisted snapshot are ignored on load so newer
/// writers stay compatible.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Books {
    #[serde(default)]
    pub sales: Vec<Sale>,
    #[serde(default)]
    pub expenses: Vec<Expense>,
}

impl Books {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sale(&self, id: Uuid) -> Option<&Sale> {
        self.sales.iter().find(|sale| sale.id == id)
    }

    pub fn expense(&self, id: Uuid) -> Option<&Expense> {
        self.expenses.iter().find(|expense| expense.id == id)
    }

    pub fn transaction_count(&self) -> usize {
        self.sales.len() + self.expenses.len()
    }

    /// Replaces the sale carrying the same id, keeping its position.
    /// Returns false when no sale matched.
    pub fn replace_sale(&mut self, sale: Sale) -> bool {
        match self.sales.iter_mut().find(|existing| existing.id == sale.id) {
            Some(existing) => {
                *existing = sale;
                true
            }
            None => false,
        }
    }

    /// Replaces the expense carrying the same id, keeping its position.
    /// Returns false when no expense matched.
    pub fn replace_expense(&mut self, expense: Expense) -> bool {
        match self
            .expenses
            .iter_mut()
            .find(|existing| existing.id == expense.id)
        {
            Some(existing) => {
                *existing = expense;
                true
            }
            None => false,
        }
    }

    /// Removes and returns the sale with the given id, if any.
    pub fn remove_sale(&mut self, id: Uuid) -> Option<Sale> {
        let index = self.sales.iter().position(|sale| sale.id == id)?;
        Some(self.sales.remove(index))
    }

    /// Removes and returns the expense with the given id, if any.
    pub fn remove_expense(&mut self, id: Uuid) -> Option<Expense> {
        let index = self.expenses.iter().position(|expense| expense.id == id)?;
        Some(self.expenses.remove(index))
    }
}
