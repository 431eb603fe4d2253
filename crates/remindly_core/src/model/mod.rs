//! Domain model for reminder persistence.
//!
//! # Responsibility
//! - Define the canonical record shape shared by every storage backend.
//!
//! # Invariants
//! - Every record is identified by a stable caller-visible string `id`.
//! - Deletion is a hard delete; there are no tombstones at this layer.

pub mod reminder;
