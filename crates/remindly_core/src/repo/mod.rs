//! Repository orchestration over the record store.
//!
//! # Responsibility
//! - Translate store outcomes into the caller-facing `Outcome` sum type.
//! - Keep UI/view-model layers decoupled from storage details.
//!
//! # Invariants
//! - Not-found is reified as `Outcome::Error`, never as a `StoreError`.
//! - Storage faults propagate as `Err(StoreError)` outside the `Outcome`
//!   channel.

pub mod reminder_repo;
