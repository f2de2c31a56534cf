//! SQLite-backed state store.
//!
//! The whole memory-state mapping is one JSON payload under a well-known
//! key in a small key-value table, alongside a persisted simulated clock
//! so multi-day review schedules can be exercised without waiting.

use chrono::{DateTime, Duration, TimeZone, Utc};
use rusqlite::{Connection, OptionalExtension, params};

use super::{StateStore, decode_payload, encode_payload};
use crate::error::DrillResult;
use crate::models::StateCollection;

/// Well-known key the serialized state mapping lives under.
const STATE_KEY: &str = "memory_states";
/// Key holding the simulated session clock.
const CLOCK_KEY: &str = "current_date";

pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens (or creates) the store at the given path.
    pub fn open(path: &str) -> DrillResult<Self> {
        let conn = Connection::open(path)?;
        Self::init(conn)
    }

    /// Opens a store that lives only as long as the connection.
    pub fn open_in_memory() -> DrillResult<Self> {
        let conn = Connection::open_in_memory()?;
        Self::init(conn)
    }

    fn init(conn: Connection) -> DrillResult<Self> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS app_state (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            (),
        )?;

        // Start the simulated clock at the real current time
        conn.execute(
            "INSERT OR IGNORE INTO app_state (key, value) VALUES (?1, ?2)",
            params![CLOCK_KEY, Utc::now().timestamp().to_string()],
        )?;

        Ok(Self { conn })
    }

    fn get_value(&self, key: &str) -> DrillResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM app_state WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set_value(&self, key: &str, value: &str) -> DrillResult<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO app_state (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }

    /// Retrieves the simulated current date.
    pub fn current_date(&self) -> DrillResult<DateTime<Utc>> {
        let raw = self.get_value(CLOCK_KEY)?.unwrap_or_default();
        let secs = raw.parse::<i64>().unwrap_or(0);
        Ok(Utc
            .timestamp_opt(secs, 0)
            .single()
            .unwrap_or(DateTime::<Utc>::UNIX_EPOCH))
    }

    /// Advances the simulated date by 24 hours (for exercising schedules).
    pub fn advance_day(&self) -> DrillResult<()> {
        let next = self.current_date()? + Duration::days(1);
        self.set_value(CLOCK_KEY, &next.timestamp().to_string())
    }
}

impl StateStore for SqliteStore {
    fn load(&self) -> StateCollection {
        match self.get_value(STATE_KEY) {
            Ok(Some(raw)) => decode_payload(&raw),
            Ok(None) => StateCollection::new(),
            Err(err) => {
                tracing::warn!(%err, "state load failed, starting fresh");
                StateCollection::new()
            }
        }
    }

    fn save(&self, states: &StateCollection) -> DrillResult<()> {
        let payload = encode_payload(states)?;
        self.set_value(STATE_KEY, &payload)
    }

    fn clear(&self) -> DrillResult<()> {
        self.conn.execute(
            "DELETE FROM app_state WHERE key = ?1",
            params![STATE_KEY],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MemoryState;

    fn sample_collection() -> StateCollection {
        let now = Utc::now();
        let mut states = StateCollection::new();
        for id in [0u32, 3, 7] {
            states.insert(
                id,
                MemoryState {
                    easiness: 2.5,
                    streak: 2,
                    interval_days: 3,
                    due_at: now + Duration::days(3),
                    last_score: 0.85,
                    last_seen_at: now,
                },
            );
        }
        states
    }

    #[test]
    fn test_load_from_fresh_store_is_empty() {
        let store = SqliteStore::open_in_memory().unwrap();
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let store = SqliteStore::open_in_memory().unwrap();
        let states = sample_collection();

        store.save(&states).unwrap();
        assert_eq!(store.load(), states);
    }

    #[test]
    fn test_persisted_payload_is_byte_stable() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.save(&sample_collection()).unwrap();

        let before = store.get_value(STATE_KEY).unwrap().unwrap();
        let reloaded = store.load();
        store.save(&reloaded).unwrap();
        let after = store.get_value(STATE_KEY).unwrap().unwrap();

        assert_eq!(before, after);
    }

    #[test]
    fn test_corrupt_payload_discarded_on_load() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.set_value(STATE_KEY, "{{ definitely not json").unwrap();
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_clear_removes_state_but_keeps_clock() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.save(&sample_collection()).unwrap();

        store.clear().unwrap();
        assert!(store.load().is_empty());
        assert!(store.current_date().is_ok());
    }

    #[test]
    fn test_advance_day_moves_clock_forward() {
        let store = SqliteStore::open_in_memory().unwrap();
        let before = store.current_date().unwrap();

        store.advance_day().unwrap();
        let after = store.current_date().unwrap();

        assert_eq!(after - before, Duration::days(1));
    }
}
