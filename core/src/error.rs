use crate::storage::StorageError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid stats mode: {0:?} (expected \"9\", \"18\" or \"combined\")")]
    InvalidMode(String),
    #[error("malformed round {id}: {reason}")]
    MalformedRound { id: i64, reason: String },
    #[error("invalid handicap config: {0}")]
    InvalidConfig(String),
    #[error("storage error: {0}")]
    Storage(String),
}

impl CoreError {
    pub(crate) fn malformed(id: i64, reason: impl Into<String>) -> Self {
        Self::MalformedRound {
            id,
            reason: reason.into(),
        }
    }
}

impl From<StorageError> for CoreError {
    fn from(err: StorageError) -> Self {
        Self::Storage(err.to_string())
    }
}
