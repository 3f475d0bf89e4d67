pub mod args;
pub mod db;
pub mod error;
pub mod controller {
    pub mod db_prefill;
    pub mod stats;
}

pub use db::SqliteStore;
pub use error::AppError;
