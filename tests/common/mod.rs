#![allow(dead_code)]

use golf_stats::AppError;
use golf_stats::controller::db_prefill::db_prefill;
use golf_stats::db::SqliteStore;
use serde_json::Value;

pub const PREFILL_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/prefill.json");

pub fn prefill_json() -> Value {
    serde_json::from_str(include_str!("../data/prefill.json")).unwrap()
}

pub fn empty_store() -> Result<SqliteStore, AppError> {
    let store = SqliteStore::open(":memory:")?;
    store.create_tables()?;
    Ok(store)
}

pub fn seeded_store() -> Result<SqliteStore, AppError> {
    let store = empty_store()?;
    db_prefill(&prefill_json(), &store)?;
    Ok(store)
}

pub fn approx(a: Option<f64>, b: f64) -> bool {
    a.is_some_and(|a| (a - b).abs() < 1e-9)
}
