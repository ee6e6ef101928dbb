//! The transaction store: canonical state plus persistence triggering.

use tracing::{debug, warn};
use uuid::Uuid;

use crate::{
    books::{Books, Expense, ExpenseDraft, Sale, SaleDraft},
    errors::BooksError,
    storage::SnapshotStore,
};

type Result<T> = std::result::Result<T, BooksError>;

/// Owns the canonical [`Books`] snapshot and applies state transitions.
///
/// Each mutation updates the in-memory snapshot first, then persists the
/// full snapshot through the backend. A failed save surfaces as an error
/// while the applied mutation stands; retry policy belongs to the caller.
///
/// Single-writer by construction: the store takes `&mut self` for every
/// mutation and holds no interior locking. Hosts with concurrent callers
/// must serialize access externally.
#[derive(Debug)]
pub struct Store<S: SnapshotStore> {
    books: Books,
    backend: S,
}

impl<S: SnapshotStore> Store<S> {
    /// Opens the store, loading the persisted snapshot if present.
    ///
    /// A missing snapshot starts empty. A blob that loads but cannot be
    /// parsed is discarded and the store also starts empty, rather than
    /// crashing or loading partial garbage. A backend that fails to load at
    /// all is a different matter: the error propagates so the caller can
    /// avoid overwriting an intact snapshot it could not read.
    pub fn open(backend: S) -> Result<Self> {
        let books = match backend.load()? {
            Some(bytes) => match serde_json::from_slice(&bytes) {
                Ok(books) => books,
                Err(err) => {
                    warn!("discarding malformed snapshot, starting empty: {err}");
                    Books::new()
                }
            },
            None => Books::new(),
        };
        Ok(Self { books, backend })
    }

    /// Read access to the current snapshot.
    pub fn books(&self) -> &Books {
        &self.books
    }

    /// Appends a new sale under a fresh id and returns the stored record.
    pub fn add_sale(&mut self, draft: SaleDraft) -> Result<Sale> {
        let sale = draft.into_sale(Uuid::new_v4());
        self.books.sales.push(sale.clone());
        debug!(id = %sale.id, "sale added");
        self.persist()?;
        Ok(sale)
    }

    /// Replaces the sale carrying the same id. Unknown ids are left alone:
    /// the call returns `Ok(false)` and nothing is persisted.
    pub fn edit_sale(&mut self, sale: Sale) -> Result<bool> {
        let id = sale.id;
        if !self.books.replace_sale(sale) {
            return Ok(false);
        }
        debug!(id = %id, "sale edited");
        self.persist()?;
        Ok(true)
    }

    /// Removes the sale with the given id. Removing an absent id is a no-op
    /// returning `Ok(false)`, so repeated deletes are idempotent.
    pub fn delete_sale(&mut self, id: Uuid) -> Result<bool> {
        if self.books.remove_sale(id).is_none() {
            return Ok(false);
        }
        debug!(id = %id, "sale deleted");
        self.persist()?;
        Ok(true)
    }

    /// Appends a new expense under a fresh id and returns the stored record.
    pub fn add_expense(&mut self, draft: ExpenseDraft) -> Result<Expense> {
        let expense = draft.into_expense(Uuid::new_v4());
        self.books.expenses.push(expense.clone());
        debug!(id = %expense.id, "expense added");
        self.persist()?;
        Ok(expense)
    }

    /// Replaces the expense carrying the same id; see [`Store::edit_sale`].
    pub fn edit_expense(&mut self, expense: Expense) -> Result<bool> {
        let id = expense.id;
        if !self.books.replace_expense(expense) {
            return Ok(false);
        }
        debug!(id = %id, "expense edited");
        self.persist()?;
        Ok(true)
    }

    /// Removes the expense with the given id; see [`Store::delete_sale`].
    pub fn delete_expense(&mut self, id: Uuid) -> Result<bool> {
        if self.books.remove_expense(id).is_none() {
            return Ok(false);
        }
        debug!(id = %id, "expense deleted");
        self.persist()?;
        Ok(true)
    }

    /// Replaces the entire state wholesale and persists the new snapshot.
    pub fn replace(&mut self, books: Books) -> Result<()> {
        self.books = books;
        self.persist()
    }

    fn persist(&self) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(&self.books)?;
        self.backend.save(&bytes)
    }
}
