//! Durable persistence of memory states.
//!
//! The scheduler owns no storage itself; the host hands it a [`StateStore`]
//! that is read once per session and written after every accepted attempt.
//! A corrupt persisted payload is discarded on load and never surfaced as
//! an error, while a failed save is, so the host can warn the learner that
//! progress was not recorded.

pub mod sqlite;

pub use sqlite::SqliteStore;

use serde::{Deserialize, Serialize};

use crate::error::DrillResult;
use crate::models::StateCollection;

/// Layout version of the persisted payload. Bump when `MemoryState` gains
/// fields, and add a migration arm in [`decode_payload`].
pub const SCHEMA_VERSION: u32 = 1;

/// Key-value boundary required from the host environment.
pub trait StateStore {
    /// Returns the persisted collection, or an empty one if nothing was
    /// persisted or the payload was not well formed.
    fn load(&self) -> StateCollection;

    /// Persists a full snapshot of the collection.
    fn save(&self, states: &StateCollection) -> DrillResult<()>;

    /// Removes the persisted payload, returning every question to unseen.
    fn clear(&self) -> DrillResult<()>;
}

#[derive(Serialize)]
struct PayloadRef<'a> {
    version: u32,
    entries: &'a StateCollection,
}

#[derive(Deserialize)]
struct Payload {
    version: u32,
    entries: StateCollection,
}

/// Serializes the collection as a versioned JSON payload.
pub fn encode_payload(states: &StateCollection) -> DrillResult<String> {
    let payload = PayloadRef {
        version: SCHEMA_VERSION,
        entries: states,
    };
    Ok(serde_json::to_string(&payload)?)
}

/// Parses a persisted payload.
///
/// Accepts the current versioned layout and the legacy bare mapping.
/// Anything else is treated as corrupt: logged and replaced with an empty
/// collection, never an error.
pub fn decode_payload(raw: &str) -> StateCollection {
    match serde_json::from_str::<Payload>(raw) {
        Ok(payload) if payload.version == SCHEMA_VERSION => payload.entries,
        Ok(payload) => {
            tracing::warn!(
                version = payload.version,
                "unknown state payload version, starting fresh"
            );
            StateCollection::new()
        }
        Err(_) => match serde_json::from_str::<StateCollection>(raw) {
            Ok(entries) => {
                tracing::warn!("migrated version-less state payload");
                entries
            }
            Err(err) => {
                tracing::warn!(%err, "corrupt state payload discarded");
                StateCollection::new()
            }
        },
    }
}
