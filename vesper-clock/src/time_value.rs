//! Immutable point-in-time value with an optional timezone override.
//!
//! A [`TimeValue`] is created fresh on every clock update instead of mutating
//! a shared calendar object, so live/fixed transitions can never alias each
//! other's state.
use chrono::{DateTime, Local, Timelike, Utc};
use chrono_tz::Tz;

/// A point in time plus an optional timezone override; pure data.
///
/// The instant is milliseconds since the Unix epoch. When the override names
/// a zone the timezone database knows, all wall-clock readings use that zone;
/// an unknown id reads exactly as if no override were set. Callers that need
/// strict zone validation should pre-validate the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeValue {
    instant_millis: i64,
    zone_override: Option<String>,
}

impl TimeValue {
    /// Creates a time value at the given epoch instant with no override.
    pub fn new(instant_millis: i64) -> Self {
        Self {
            instant_millis,
            zone_override: None,
        }
    }

    /// Returns this value with the timezone override set or cleared.
    pub fn with_zone_override(mut self, zone: Option<String>) -> Self {
        self.zone_override = zone;
        self
    }

    /// Returns the instant as milliseconds since the Unix epoch.
    pub fn instant_millis(&self) -> i64 {
        self.instant_millis
    }

    /// Returns the raw timezone override id, if any.
    pub fn zone_override(&self) -> Option<&str> {
        self.zone_override.as_deref()
    }

    /// Returns the override parsed against the timezone database, if it
    /// names a known zone.
    pub fn resolved_zone(&self) -> Option<Tz> {
        self.zone_override.as_deref().and_then(|id| id.parse().ok())
    }

    /// Returns the zone-resolved wall-clock hour (0-23) and minute (0-59).
    ///
    /// Uses the override zone when set and recognized, the ambient local zone
    /// otherwise. Instants outside chrono's representable range read as the
    /// Unix epoch.
    pub fn wall_hour_minute(&self) -> (u32, u32) {
        let utc: DateTime<Utc> =
            DateTime::from_timestamp_millis(self.instant_millis).unwrap_or_default();
        match self.resolved_zone() {
            Some(zone) => {
                let local = utc.with_timezone(&zone);
                (local.hour(), local.minute())
            }
            None => {
                let local = utc.with_timezone(&Local);
                (local.hour(), local.minute())
            }
        }
    }
}
