//! In-memory reminder store.
//!
//! Implements the same contract as the SQLite backend with no persistence,
//! so repository-level callers and tests stay independent of the durability
//! engine. All data is lost when the store is dropped.

use crate::model::reminder::ReminderRecord;
use crate::store::{ReminderStore, StoreResult};
use std::sync::RwLock;

/// Vec-backed reminder store; position in the vec is insertion order.
pub struct MemoryReminderStore {
    records: RwLock<Vec<ReminderRecord>>,
}

impl MemoryReminderStore {
    /// Creates an empty in-memory store.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    /// Creates a store pre-populated with the given records, upsert rules
    /// applied in order.
    pub fn with_records(records: impl IntoIterator<Item = ReminderRecord>) -> StoreResult<Self> {
        let store = Self::new();
        for record in records {
            store.save(&record)?;
        }
        Ok(store)
    }
}

impl Default for MemoryReminderStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ReminderStore for MemoryReminderStore {
    fn list_all(&self) -> StoreResult<Vec<ReminderRecord>> {
        let records = self.records.read().unwrap_or_else(|err| err.into_inner());
        Ok(records.clone())
    }

    fn get_by_id(&self, id: &str) -> StoreResult<Option<ReminderRecord>> {
        let records = self.records.read().unwrap_or_else(|err| err.into_inner());
        Ok(records.iter().find(|record| record.id == id).cloned())
    }

    fn save(&self, record: &ReminderRecord) -> StoreResult<()> {
        let mut records = self.records.write().unwrap_or_else(|err| err.into_inner());
        match records.iter_mut().find(|existing| existing.id == record.id) {
            // Replace in place so insertion order survives a re-save.
            Some(existing) => *existing = record.clone(),
            None => records.push(record.clone()),
        }
        Ok(())
    }

    fn delete_by_id(&self, id: &str) -> StoreResult<()> {
        let mut records = self.records.write().unwrap_or_else(|err| err.into_inner());
        records.retain(|record| record.id != id);
        Ok(())
    }

    fn delete_all(&self) -> StoreResult<()> {
        let mut records = self.records.write().unwrap_or_else(|err| err.into_inner());
        records.clear();
        Ok(())
    }
}
