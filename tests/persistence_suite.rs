//! End-to-end persistence behavior over the file-backed snapshot store.

use books_core::books::{Books, ExpenseCategory, ExpenseDraft, SaleDraft};
use books_core::storage::{JsonFileStore, SnapshotStore};
use books_core::store::Store;
use chrono::NaiveDate;
use tempfile::TempDir;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn file_store() -> (JsonFileStore, TempDir) {
    let temp = TempDir::new().expect("temp dir");
    let store = JsonFileStore::new(temp.path().join("books.json"));
    (store, temp)
}

#[test]
fn mutations_survive_a_restart() {
    let (backend, guard) = file_store();
    let sale_id;
    {
        let mut store = Store::open(backend).expect("open store");
        sale_id = store
            .add_sale(SaleDraft::new(date(2024, 1, 2), "Acme", "Plush bear", 100.0))
            .expect("add sale")
            .id;
        store
            .add_expense(ExpenseDraft::new(
                date(2024, 1, 3),
                ExpenseCategory::Rent,
                "January rent",
                500.0,
            ))
            .expect("add expense");
    }

    let reopened = Store::open(JsonFileStore::new(guard.path().join("books.json"))).expect("open store");
    assert_eq!(reopened.books().sales.len(), 1);
    assert_eq!(reopened.books().sales[0].id, sale_id);
    assert_eq!(reopened.books().expenses.len(), 1);
    assert_eq!(reopened.books().expenses[0].category, ExpenseCategory::Rent);
}

#[test]
fn edits_and_deletes_are_persisted_too() {
    let (backend, guard) = file_store();
    {
        let mut store = Store::open(backend).expect("open store");
        let sale = store
            .add_sale(SaleDraft::new(date(2024, 1, 2), "Acme", "Plush bear", 100.0))
            .expect("add sale");
        let expense = store
            .add_expense(ExpenseDraft::new(
                date(2024, 1, 3),
                ExpenseCategory::Travel,
                "Trade fair",
                80.0,
            ))
            .expect("add expense");

        let mut edited = sale.clone();
        edited.amount = 130.0;
        assert!(store.edit_sale(edited).expect("edit sale"));
        assert!(store.delete_expense(expense.id).expect("delete expense"));
    }

    let reopened = Store::open(JsonFileStore::new(guard.path().join("books.json"))).expect("open store");
    assert_eq!(reopened.books().sales[0].amount, 130.0);
    assert!(reopened.books().expenses.is_empty());
}

#[test]
fn malformed_snapshot_file_starts_an_empty_store() {
    let (backend, _guard) = file_store();
    backend.save(b"{\"sales\": [\"definitely not a sale\"]}").expect("seed garbage");

    let store = Store::open(backend).expect("open store");
    assert_eq!(store.books(), &Books::new());
}

#[test]
fn snapshot_json_uses_the_documented_shape() {
    let (backend, guard) = file_store();
    {
        let mut store = Store::open(backend).expect("open store");
        store
            .add_sale(SaleDraft::new(date(2024, 1, 2), "Acme", "Plush bear", 100.0))
            .expect("add sale");
    }

    let raw = std::fs::read_to_string(guard.path().join("books.json")).expect("read snapshot");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("valid json");
    let sale = &value["sales"][0];
    assert!(sale["id"].is_string());
    assert_eq!(sale["date"], "2024-01-02");
    assert_eq!(sale["customer"], "Acme");
    assert_eq!(sale["description"], "Plush bear");
    assert_eq!(sale["amount"], 100.0);
    assert!(value["expenses"].as_array().expect("expenses array").is_empty());
}

#[test]
fn wholesale_replace_overwrites_the_snapshot() {
    let (backend, guard) = file_store();
    {
        let mut store = Store::open(backend).expect("open store");
        store
            .add_sale(SaleDraft::new(date(2024, 1, 2), "Acme", "Plush bear", 100.0))
            .expect("add sale");
        store.replace(Books::new()).expect("replace");
    }

    let reopened = Store::open(JsonFileStore::new(guard.path().join("books.json"))).expect("open store");
    assert_eq!(reopened.books(), &Books::new());
}
