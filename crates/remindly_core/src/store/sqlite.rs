//! SQLite-backed reminder store.
//!
//! # Responsibility
//! - Persist reminder records in the `reminders` table.
//! - Keep SQL details inside the store boundary.
//!
//! # Invariants
//! - Upserts go through `ON CONFLICT(id) DO UPDATE` so a re-save keeps the
//!   row's original rowid, and with it the record's insertion position.
//! - List queries order by rowid, the insertion-order contract.

use crate::model::reminder::ReminderRecord;
use crate::store::{ReminderStore, StoreResult};
use rusqlite::{params, Connection, Row};

const REMINDER_SELECT_SQL: &str = "SELECT
    id,
    title,
    description,
    location,
    latitude,
    longitude
FROM reminders";

/// SQLite-backed reminder store over a migrated connection.
pub struct SqliteReminderStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteReminderStore<'conn> {
    /// Constructs a store from a migrated/ready connection.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ReminderStore for SqliteReminderStore<'_> {
    fn list_all(&self) -> StoreResult<Vec<ReminderRecord>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{REMINDER_SELECT_SQL} ORDER BY rowid ASC;"))?;

        let mut rows = stmt.query([])?;
        let mut reminders = Vec::new();
        while let Some(row) = rows.next()? {
            reminders.push(parse_reminder_row(row)?);
        }

        Ok(reminders)
    }

    fn get_by_id(&self, id: &str) -> StoreResult<Option<ReminderRecord>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{REMINDER_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_reminder_row(row)?));
        }

        Ok(None)
    }

    fn save(&self, record: &ReminderRecord) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO reminders (
                id,
                title,
                description,
                location,
                latitude,
                longitude
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            ON CONFLICT(id) DO UPDATE SET
                title = excluded.title,
                description = excluded.description,
                location = excluded.location,
                latitude = excluded.latitude,
                longitude = excluded.longitude;",
            params![
                record.id.as_str(),
                record.title.as_deref(),
                record.description.as_deref(),
                record.location.as_deref(),
                record.latitude,
                record.longitude,
            ],
        )?;

        Ok(())
    }

    fn delete_by_id(&self, id: &str) -> StoreResult<()> {
        // Zero affected rows is a valid outcome: deleting a missing id is
        // a no-op, not an error.
        self.conn
            .execute("DELETE FROM reminders WHERE id = ?1;", [id])?;
        Ok(())
    }

    fn delete_all(&self) -> StoreResult<()> {
        self.conn.execute("DELETE FROM reminders;", [])?;
        Ok(())
    }
}

fn parse_reminder_row(row: &Row<'_>) -> StoreResult<ReminderRecord> {
    Ok(ReminderRecord {
        id: row.get("id")?,
        title: row.get("title")?,
        description: row.get("description")?,
        location: row.get("location")?,
        latitude: row.get("latitude")?,
        longitude: row.get("longitude")?,
    })
}
