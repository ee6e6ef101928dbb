#![doc(test(attr(deny(warnings))))]

//! Books Core records sales and expense transactions, persists them as a
//! JSON snapshot, and derives the summaries, trends, and CSV exports that
//! power higher level bookkeeping frontends.

pub mod books;
pub mod errors;
pub mod report;
pub mod storage;
pub mod store;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Books Core tracing initialized.");
    });
}
