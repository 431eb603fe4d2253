//! Record store contracts and storage backends.
//!
//! # Responsibility
//! - Define the keyed persistence contract for reminder records.
//! - Isolate SQL details from repository orchestration.
//!
//! # Invariants
//! - `save` is an upsert keyed by `id`; it never creates a duplicate row.
//! - `list_all` returns records in insertion order.
//! - Absence is a normal outcome (`Ok(None)`), never a `StoreError`.
//! - Each operation is its own unit of durability; no cross-call
//!   transactions are exposed.

use crate::db::DbError;
use crate::model::reminder::ReminderRecord;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod memory;
mod sqlite;

pub use memory::MemoryReminderStore;
pub use sqlite::SqliteReminderStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Storage-fault error for reminder persistence operations.
///
/// "Not found" is deliberately absent: lookups report absence as `Ok(None)`
/// and deletes of missing ids are no-ops.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    InvalidData(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => {
                write!(f, "invalid persisted reminder data: {message}")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Keyed persistence contract for reminder records.
///
/// Implemented by the SQLite backend and by the in-memory backend so
/// repository-level callers and tests stay independent of the durability
/// engine.
pub trait ReminderStore {
    /// Returns every stored record in insertion order; empty when none.
    fn list_all(&self) -> StoreResult<Vec<ReminderRecord>>;
    /// Returns the record with the given id, or `None` when absent.
    fn get_by_id(&self, id: &str) -> StoreResult<Option<ReminderRecord>>;
    /// Inserts or replaces the record keyed by its `id`.
    fn save(&self, record: &ReminderRecord) -> StoreResult<()>;
    /// Removes the record with the given id; no-op when absent.
    fn delete_by_id(&self, id: &str) -> StoreResult<()>;
    /// Removes every record.
    fn delete_all(&self) -> StoreResult<()>;
}
