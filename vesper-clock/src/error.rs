//! Error types for clock operations.
use thiserror::Error;

/// Errors surfaced synchronously by clock operations.
///
/// Every error leaves the engine's prior state untouched; none are fatal and
/// none are worth retrying, since all operations are deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClockError {
    /// A caller-supplied wall time outside the valid range.
    #[error("invalid wall time {hour}:{minute:02}, hour must be 0-23 and minute 0-59")]
    InvalidTime {
        /// Rejected hour value.
        hour: u32,
        /// Rejected minute value.
        minute: u32,
    },
    /// A sleep-cycle length that cannot produce distinct candidates.
    #[error("sleep cycle length must be a positive number of minutes, got {0}")]
    InvalidCycleLength(u32),
}
