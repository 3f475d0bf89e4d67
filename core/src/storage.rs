use crate::model::{HoleRow, Round};
use async_trait::async_trait;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone)]
pub struct StorageError {
    message: String,
}

impl StorageError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for StorageError {}

impl From<String> for StorageError {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for StorageError {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Source of a user's rounds, already joined with tee metadata, and of the
/// hole rows of that user's hole-by-hole rounds.
#[async_trait]
pub trait RoundStore: Send + Sync {
    async fn get_rounds_for_user(&self, user_id: i64) -> Result<Vec<Round>, StorageError>;
    async fn get_hole_rows_for_user(&self, user_id: i64) -> Result<Vec<HoleRow>, StorageError>;
}
