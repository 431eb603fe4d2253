//! Core persistence logic for Remindly.
//! This crate is the single source of truth for reminder storage contracts.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod store;

pub use db::{open_db, open_db_in_memory, DbError, DbResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::reminder::ReminderRecord;
pub use repo::reminder_repo::{Outcome, ReminderRepository};
pub use store::{
    MemoryReminderStore, ReminderStore, SqliteReminderStore, StoreError, StoreResult,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
