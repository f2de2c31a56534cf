//! Per-question spaced-review state tracked across sessions.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Stable index into the host-supplied question catalog.
pub type QuestionId = u32;

/// Review state for a single question. Exists only once the question has
/// been attempted at least once; an absent entry means "never attempted",
/// which is distinct from "attempted with score 0".
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MemoryState {
    /// Retention-ease factor, kept within [1.3, 2.7].
    pub easiness: f64,
    /// Consecutive successful recalls, reset to 0 on failure.
    pub streak: u32,
    /// Days until the question is due again, kept within [1, 60].
    pub interval_days: u32,
    /// Absolute time the question becomes eligible for review again.
    pub due_at: DateTime<Utc>,
    /// Most recent normalized score in [0, 1].
    pub last_score: f64,
    /// Time of the most recent attempt. Non-decreasing per question as long
    /// as the host supplies a non-decreasing clock.
    pub last_seen_at: DateTime<Utc>,
}

/// Mapping from question identifier to its memory state.
///
/// A `BTreeMap` keeps iteration and serialization order stable, so a
/// load-then-save of an unchanged collection reproduces the persisted
/// payload byte for byte.
pub type StateCollection = BTreeMap<QuestionId, MemoryState>;
