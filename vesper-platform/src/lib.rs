//! Platform services for Vesper clocks.
//!
//! ## Usage
//!
//! The clock core only exposes update entry points; this crate supplies what
//! feeds them — the system wall clock, a tick driver, and the notification
//! plumbing for time, timezone, and format-preference changes.
#![deny(missing_docs, clippy::unwrap_used)]

pub mod clock;
pub mod events;
pub mod preference;

pub use clock::SystemWallClock;
pub use events::{ClockEvent, EventBus, EventListener, EventSource, IntervalTicker, Subscription};
pub use preference::{FormatPreference, SharedPreference, StaticPreference};
