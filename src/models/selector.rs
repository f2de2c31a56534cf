//! Batch selection: decides which questions to present next, preferring
//! overdue items and backfilling with the least recently seen.

use super::{QuestionId, StateCollection};
use chrono::{DateTime, Utc};
use rand::Rng;
use rand::seq::SliceRandom;

/// How a new batch is drawn from the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BatchMode {
    /// Only questions whose review is due. Falls back to [`BatchMode::Mixed`]
    /// when nothing is due.
    DueOnly,
    /// Due questions first, the least recently seen fill the remaining slots.
    Mixed,
    /// The whole catalog in order; the batch size is ignored.
    All,
}

/// Backfill candidates are drawn from at most this many of the least
/// recently seen questions before shuffling. The bound caps the shuffle
/// cost on large catalogs; items beyond the window are only reached once
/// the window drains. Tunable, not load-bearing.
pub const RECENCY_WINDOW: usize = 30;

/// Picks up to `batch_size` question identifiers to present next.
///
/// Ties on recency are broken by a uniform shuffle through the injected
/// random source, so repeated requests do not keep resurfacing the same
/// items. An empty catalog yields an empty batch.
pub fn select_batch<R: Rng>(
    states: &StateCollection,
    catalog_size: usize,
    batch_size: usize,
    now: DateTime<Utc>,
    mode: BatchMode,
    rng: &mut R,
) -> Vec<QuestionId> {
    if catalog_size == 0 {
        return Vec::new();
    }

    if mode == BatchMode::All {
        return (0..catalog_size as QuestionId).collect();
    }

    let mut batch = due_ids(states, catalog_size, now);
    batch.shuffle(rng);
    batch.truncate(batch_size);

    if mode == BatchMode::DueOnly && !batch.is_empty() {
        return batch;
    }

    // Mixed fill, also the DueOnly fallback when nothing is due yet:
    // rank the rest by recency, unseen questions first.
    if batch.len() < batch_size {
        let mut candidates: Vec<QuestionId> = (0..catalog_size as QuestionId)
            .filter(|id| !batch.contains(id))
            .collect();

        candidates.sort_by_key(|id| {
            states
                .get(id)
                .map(|state| state.last_seen_at)
                .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
        });
        candidates.truncate(RECENCY_WINDOW);
        candidates.shuffle(rng);
        candidates.truncate(batch_size - batch.len());

        batch.extend(candidates);
    }

    batch
}

/// Identifiers with a state whose `due_at` has passed. States referring to
/// questions beyond the current catalog are ignored.
fn due_ids(states: &StateCollection, catalog_size: usize, now: DateTime<Utc>) -> Vec<QuestionId> {
    states
        .iter()
        .filter(|(id, state)| (**id as usize) < catalog_size && state.due_at <= now)
        .map(|(id, _)| *id)
        .collect()
}
