//! Reminder repository: caller-facing orchestration over a record store.
//!
//! # Responsibility
//! - Provide the stable API surface consumed by view-model layers.
//! - Centralize the not-found message contract.
//!
//! # Invariants
//! - `get_reminder` on an absent id yields `Outcome::Error` carrying the
//!   exact `"Reminder not found!"` message; callers match on that string.
//! - Delete operations return bare unit, not an `Outcome`.
//! - Every operation completes its persistence effect before returning.

use crate::model::reminder::ReminderRecord;
use crate::store::{ReminderStore, StoreResult};
use log::debug;

/// Message carried by `Outcome::Error` when a lookup misses.
///
/// Downstream layers match on this exact string; do not reword it.
const REMINDER_NOT_FOUND: &str = "Reminder not found!";

/// Two-variant outcome type for repository reads.
///
/// Replaces exception-style signaling at the storage boundary: callers
/// branch exhaustively on success or a human-readable error message.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Success(T),
    Error(String),
}

impl<T> Outcome<T> {
    /// Returns the success payload, if any.
    pub fn success(self) -> Option<T> {
        match self {
            Self::Success(data) => Some(data),
            Self::Error(_) => None,
        }
    }

    /// Returns the error message, if any.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Error(message) => Some(message.as_str()),
        }
    }
}

/// Repository over any `ReminderStore` implementation.
///
/// Stateless request/response orchestration; the store owns all persisted
/// state. Storage faults surface as `Err(StoreError)` and are expected to
/// abort the caller rather than be folded into an `Outcome`.
pub struct ReminderRepository<S: ReminderStore> {
    store: S,
}

impl<S: ReminderStore> ReminderRepository<S> {
    /// Creates a repository using the provided store implementation.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns all reminders wrapped in `Outcome::Success`.
    ///
    /// There is no store-level failure modeled here: an empty store is
    /// `Success` with an empty vec, never an `Outcome::Error`.
    pub fn get_reminders(&self) -> StoreResult<Outcome<Vec<ReminderRecord>>> {
        let reminders = self.store.list_all()?;
        debug!(
            "event=get_reminders module=repo status=ok count={}",
            reminders.len()
        );
        Ok(Outcome::Success(reminders))
    }

    /// Saves (upserts) one reminder; returns once persistence completes.
    pub fn save_reminder(&self, record: &ReminderRecord) -> StoreResult<()> {
        self.store.save(record)?;
        debug!("event=save_reminder module=repo status=ok id={}", record.id);
        Ok(())
    }

    /// Returns one reminder by id, or the not-found `Outcome::Error`.
    pub fn get_reminder(&self, id: &str) -> StoreResult<Outcome<ReminderRecord>> {
        match self.store.get_by_id(id)? {
            Some(record) => Ok(Outcome::Success(record)),
            None => {
                debug!("event=get_reminder module=repo status=miss id={id}");
                Ok(Outcome::Error(REMINDER_NOT_FOUND.to_string()))
            }
        }
    }

    /// Deletes one reminder by id; no-op when absent.
    pub fn delete_reminder(&self, id: &str) -> StoreResult<()> {
        self.store.delete_by_id(id)?;
        debug!("event=delete_reminder module=repo status=ok id={id}");
        Ok(())
    }

    /// Deletes every reminder.
    pub fn delete_all_reminders(&self) -> StoreResult<()> {
        self.store.delete_all()?;
        debug!("event=delete_all_reminders module=repo status=ok");
        Ok(())
    }
}
