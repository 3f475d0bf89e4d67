use golf_stats_core::CoreError;
use golf_stats_core::storage::StorageError;
use std::fmt;

#[derive(Debug, Clone)]
pub enum AppError {
    Db(String),
    Parse(String),
    Io(String),
    Core(CoreError),
    Other(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Db(s) => write!(f, "db error: {s}"),
            AppError::Parse(s) => write!(f, "parse error: {s}"),
            AppError::Io(s) => write!(f, "io error: {s}"),
            AppError::Core(e) => write!(f, "{e}"),
            AppError::Other(s) => write!(f, "{s}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<rusqlite::Error> for AppError {
    fn from(e: rusqlite::Error) -> Self {
        Self::Db(e.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<CoreError> for AppError {
    fn from(e: CoreError) -> Self {
        Self::Core(e)
    }
}

impl From<AppError> for StorageError {
    fn from(e: AppError) -> Self {
        StorageError::new(e.to_string())
    }
}

impl From<String> for AppError {
    fn from(e: String) -> Self {
        Self::Other(e)
    }
}

impl From<&str> for AppError {
    fn from(e: &str) -> Self {
        Self::Other(e.to_string())
    }
}
