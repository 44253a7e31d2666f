//! The 12/24-hour display preference, read on demand.
use std::sync::Arc;

use parking_lot::RwLock;

/// Read access to the platform's "24-hour mode" preference.
///
/// Change notification travels separately, as
/// [`ClockEvent::FormatPreferenceChanged`](crate::ClockEvent); this trait is
/// only the on-demand read.
pub trait FormatPreference {
    /// Returns whether the user prefers 24-hour display.
    fn use_24_hour(&self) -> bool;
}

/// Preference pinned to a fixed value, for demos and tests.
#[derive(Debug, Clone, Copy)]
pub struct StaticPreference(bool);

impl StaticPreference {
    /// Creates a pinned preference.
    pub fn new(use_24_hour: bool) -> Self {
        Self(use_24_hour)
    }
}

impl FormatPreference for StaticPreference {
    fn use_24_hour(&self) -> bool {
        self.0
    }
}

/// Preference cell shared between a settings writer and clock readers.
#[derive(Debug, Clone, Default)]
pub struct SharedPreference {
    value: Arc<RwLock<bool>>,
}

impl SharedPreference {
    /// Creates a shared preference with the given initial value.
    pub fn new(use_24_hour: bool) -> Self {
        Self {
            value: Arc::new(RwLock::new(use_24_hour)),
        }
    }

    /// Writes a new preference value.
    ///
    /// The caller is responsible for also emitting
    /// [`ClockEvent::FormatPreferenceChanged`](crate::ClockEvent) so clocks
    /// refresh.
    pub fn set(&self, use_24_hour: bool) {
        *self.value.write() = use_24_hour;
    }
}

impl FormatPreference for SharedPreference {
    fn use_24_hour(&self) -> bool {
        *self.value.read()
    }
}
