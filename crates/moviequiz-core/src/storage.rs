//! Key-value persistence abstraction.
//!
//! Statistics are stored as a handful of scalar fields. Implementations must
//! apply a `set_all` batch atomically: readers observe either every entry of
//! the batch or none of them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::QuizError;

/// A typed value held by a [`KeyValueStore`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum StoredValue {
    /// An integer counter.
    Int(i64),
    /// A point in time.
    Timestamp(DateTime<Utc>),
}

impl StoredValue {
    /// Returns the integer payload, if this is an integer.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            Self::Timestamp(_) => None,
        }
    }

    /// Returns the timestamp payload, if this is a timestamp.
    #[must_use]
    pub fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Timestamp(value) => Some(*value),
            Self::Int(_) => None,
        }
    }
}

/// Failure raised by a [`KeyValueStore`].
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing medium failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The persisted document could not be (de)serialized.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// The store's internal lock was poisoned by a panicking writer.
    #[error("store lock poisoned")]
    Poisoned,
}

impl From<StorageError> for QuizError {
    fn from(err: StorageError) -> Self {
        Self::Storage(err.to_string())
    }
}

/// Durable key-value store for scalar statistics fields.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, or `None` if it was never written.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backing medium cannot be read.
    fn get(&self, key: &str) -> Result<Option<StoredValue>, StorageError>;

    /// Write every entry in one atomic step.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the batch could not be persisted; in that
    /// case none of the entries are visible to later reads.
    fn set_all(&self, entries: &[(&str, StoredValue)]) -> Result<(), StorageError>;
}
