//! Digital clock core for the Vesper project.
//!
//! # Usage
//!
//! Build a [`ClockEngine`] over a wall-clock source, feed it the update entry
//! points from your platform's tick and preference notifications, and read
//! back the rendered strings.
//!
//! ```
//! use vesper_clock::{ClockEngine, TimeFormatter, WallClock};
//!
//! struct FrozenClock;
//!
//! impl WallClock for FrozenClock {
//!     fn now_millis(&self) -> i64 {
//!         1_700_000_000_000
//!     }
//! }
//!
//! let mut engine = ClockEngine::new(TimeFormatter::default(), Box::new(FrozenClock));
//! let rendered = engine.update_now();
//! assert!(rendered.minutes.starts_with(':'));
//! ```
//!
//! Sleep-time suggestions are computed independently from a wake-up time:
//!
//! ```
//! use vesper_clock::{SleepPlan, TimeValue, suggest_sleep_times};
//!
//! let wake = TimeValue::new(1_700_000_000_000);
//! let candidates = suggest_sleep_times(&wake, &SleepPlan::default()).unwrap();
//! assert_eq!(candidates.len(), 4);
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod engine;
pub mod error;
pub mod format_mode;
pub mod formatter;
pub mod locale;
pub mod sleep;
pub mod time_value;

pub use engine::{ClockEngine, ClockState, RenderedTime, WallClock};
pub use error::ClockError;
pub use format_mode::FormatMode;
pub use formatter::TimeFormatter;
pub use locale::MeridiemLabels;
pub use sleep::{SleepCandidates, SleepPlan, format_suggestions, suggest_sleep_times};
pub use time_value::TimeValue;
