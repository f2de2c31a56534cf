//! Drill session management: wires the scheduler to a state store.
//! State is loaded once when the session begins and saved after every
//! recorded attempt.

use super::{BatchMode, MemoryState, QuestionId, StateCollection, advance, normalize, select_batch};
use crate::error::DrillResult;
use crate::store::StateStore;
use chrono::{DateTime, Utc};
use rand::Rng;

/// A single learner's review session over one question catalog.
///
/// Owns the in-memory state collection for the lifetime of the session;
/// the store only ever sees full snapshots, so last-write-wins is safe.
pub struct DrillSession<S: StateStore> {
    store: S,
    states: StateCollection,
}

impl<S: StateStore> DrillSession<S> {
    /// Opens a session, loading whatever the store has persisted.
    pub fn begin(store: S) -> Self {
        let states = store.load();
        tracing::debug!(tracked = states.len(), "drill session started");
        Self { store, states }
    }

    /// Records a self-marked attempt and persists the updated collection.
    ///
    /// A first attempt creates the question's memory state; later attempts
    /// rewrite it. Returns the new state, or an error if the score is
    /// malformed or the store could not persist the snapshot.
    pub fn record_attempt(
        &mut self,
        id: QuestionId,
        earned: f64,
        total: f64,
        now: DateTime<Utc>,
    ) -> DrillResult<MemoryState> {
        let score = normalize(earned, total)?;
        let next = advance(self.states.get(&id), score, now);
        self.states.insert(id, next);
        self.store.save(&self.states)?;
        Ok(next)
    }

    /// Picks the next batch of question identifiers to present.
    pub fn next_batch<R: Rng>(
        &self,
        catalog_size: usize,
        batch_size: usize,
        now: DateTime<Utc>,
        mode: BatchMode,
        rng: &mut R,
    ) -> Vec<QuestionId> {
        select_batch(&self.states, catalog_size, batch_size, now, mode, rng)
    }

    /// Review state for one question, if it has ever been attempted.
    pub fn state(&self, id: QuestionId) -> Option<&MemoryState> {
        self.states.get(&id)
    }

    /// Number of questions whose review is currently due.
    pub fn due_count(&self, now: DateTime<Utc>) -> usize {
        self.states.values().filter(|s| s.due_at <= now).count()
    }

    /// Wipes all memory states, returning every question to unseen.
    pub fn reset(&mut self) -> DrillResult<()> {
        self.store.clear()?;
        self.states.clear();
        tracing::debug!("drill state cleared");
        Ok(())
    }
}
