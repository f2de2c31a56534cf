//! Adapted SM-2 (SuperMemo 2) spaced repetition schedule.
//!
//! Review intervals grow with each successful recall:
//! - Quality grades 0-2 reset the streak and force a next-day retry
//! - Quality grades 3-5 extend the interval progressively (1 day → 3 days → easiness multiplier)
//! - Easiness is adjusted after every attempt and stays within [1.3, 2.7]
//! - Intervals never exceed 60 days

use super::{MemoryState, QualityScore};
use chrono::{DateTime, Duration, Utc};

/// Lower bound for the easiness factor.
pub const MIN_EASINESS: f64 = 1.3;
/// Upper bound for the easiness factor.
pub const MAX_EASINESS: f64 = 2.7;
/// Review intervals are capped at this many days.
pub const MAX_INTERVAL_DAYS: u32 = 60;

/// Easiness assumed for a question that has never been attempted.
const INITIAL_EASINESS: f64 = 2.5;

/// Computes the next memory state for a question after a graded attempt.
///
/// A missing prior state means the question was never attempted; it starts
/// from the default easiness with no streak.
pub fn advance(
    prior: Option<&MemoryState>,
    score: QualityScore,
    now: DateTime<Utc>,
) -> MemoryState {
    let (easiness, streak, interval_days) = match prior {
        Some(state) => (state.easiness, state.streak, state.interval_days),
        None => (INITIAL_EASINESS, 0, 0),
    };

    let quality = score.grade.min(5); // Clamp to 0-5

    // Adjust the easiness factor, bounded on both ends
    let q = f64::from(quality);
    let easiness = (easiness + (0.1 - (5.0 - q) * (0.08 + (5.0 - q) * 0.02)))
        .clamp(MIN_EASINESS, MAX_EASINESS);

    let (streak, interval_days) = if quality < 3 {
        // Failed recall: reset progress and retry tomorrow
        (0, 1)
    } else {
        let streak = streak + 1;
        let interval = match streak {
            1 => 1,
            2 => 3,
            _ => (f64::from(interval_days) * easiness).round() as u32,
        };
        (streak, interval.clamp(1, MAX_INTERVAL_DAYS))
    };

    MemoryState {
        easiness,
        streak,
        interval_days,
        due_at: now + Duration::days(i64::from(interval_days)),
        last_score: score.percent,
        last_seen_at: now,
    }
}
