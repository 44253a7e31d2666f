//! Candidate bedtime suggestions derived from a wake-up time.
//!
//! Works backwards from the wake instant: one fall-asleep buffer, then one
//! sleep cycle per candidate. The result is a short ascending list, earliest
//! bedtime first (the one allowing the most sleep cycles before waking).
use smallvec::SmallVec;

use crate::error::ClockError;
use crate::format_mode::FormatMode;
use crate::formatter::TimeFormatter;
use crate::time_value::TimeValue;

/// Minutes subtracted once before applying sleep-cycle offsets, covering the
/// time needed to fall asleep plus margin.
pub const FALL_ASLEEP_BUFFER_MINUTES: u32 = 194;

/// Length of one sleep cycle in minutes.
pub const SLEEP_CYCLE_MINUTES: u32 = 90;

/// Number of candidate bedtimes to suggest.
pub const SLEEP_CYCLE_COUNT: u32 = 4;

const MILLIS_PER_MINUTE: i64 = 60 * 1_000;

/// Ordered candidate bedtimes, strictly increasing, no duplicates.
pub type SleepCandidates = SmallVec<[TimeValue; 4]>;

/// Configuration for the sleep-time calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SleepPlan {
    /// Minutes subtracted once before the first cycle.
    pub fall_asleep_buffer_minutes: u32,
    /// Length of one sleep cycle in minutes.
    pub cycle_minutes: u32,
    /// Number of candidates to produce.
    pub cycle_count: u32,
}

impl Default for SleepPlan {
    fn default() -> Self {
        Self {
            fall_asleep_buffer_minutes: FALL_ASLEEP_BUFFER_MINUTES,
            cycle_minutes: SLEEP_CYCLE_MINUTES,
            cycle_count: SLEEP_CYCLE_COUNT,
        }
    }
}

/// Computes candidate bedtimes for the given wake-up time.
///
/// Each candidate sits at `wake - buffer - k * cycle` for `k` in
/// `1..=cycle_count` and carries the wake time's timezone override, so it
/// renders in the same zone. Candidates come back sorted ascending and
/// deduplicated; with a positive cycle length there are always exactly
/// `cycle_count` distinct entries.
///
/// A zero cycle length is rejected, since it would collapse every candidate
/// onto the same instant.
pub fn suggest_sleep_times(
    wake: &TimeValue,
    plan: &SleepPlan,
) -> Result<SleepCandidates, ClockError> {
    if plan.cycle_minutes == 0 {
        return Err(ClockError::InvalidCycleLength(plan.cycle_minutes));
    }
    let zone = wake.zone_override().map(str::to_string);
    let mut cursor =
        wake.instant_millis() - i64::from(plan.fall_asleep_buffer_minutes) * MILLIS_PER_MINUTE;
    let mut candidates = SleepCandidates::new();
    for _ in 0..plan.cycle_count {
        cursor -= i64::from(plan.cycle_minutes) * MILLIS_PER_MINUTE;
        candidates.push(TimeValue::new(cursor).with_zone_override(zone.clone()));
    }
    candidates.sort_by_key(TimeValue::instant_millis);
    candidates.dedup_by_key(|candidate| candidate.instant_millis());
    Ok(candidates)
}

/// Renders candidates under one format mode and joins them with `", "`.
///
/// Entries read like the clock face, except that 12-hour mode separates the
/// meridiem label with a space.
pub fn format_suggestions(
    candidates: &[TimeValue],
    formatter: &TimeFormatter,
    mode: FormatMode,
) -> String {
    let mut out = String::new();
    for (index, candidate) in candidates.iter().enumerate() {
        if index > 0 {
            out.push_str(", ");
        }
        out.push_str(&formatter.render_hours(candidate, mode));
        out.push_str(&formatter.render_minutes(candidate));
        if let Some(meridiem) = formatter.render_meridiem(candidate, mode) {
            out.push(' ');
            out.push_str(&meridiem);
        }
    }
    out
}
