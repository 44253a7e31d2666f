//! Clock state machine orchestrating time updates and formatting.
use chrono::{DateTime, Local, TimeZone};
use tracing::{debug, warn};

use crate::error::ClockError;
use crate::format_mode::FormatMode;
use crate::formatter::TimeFormatter;
use crate::sleep::{SleepPlan, format_suggestions, suggest_sleep_times};
use crate::time_value::TimeValue;

/// Source of the present wall-clock time.
///
/// The engine reads this on demand and never registers for notifications
/// itself; platform tick events are expected to call
/// [`ClockEngine::update_now`] from the owner's single logical thread.
pub trait WallClock {
    /// Returns the present instant as milliseconds since the Unix epoch.
    fn now_millis(&self) -> i64;
}

/// The four rendered strings of one formatting pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderedTime {
    /// Hour token, mode dependent.
    pub hours: String,
    /// Minute token, a colon followed by zero-padded minutes.
    pub minutes: String,
    /// Meridiem label, absent in 24-hour mode.
    pub meridiem: Option<String>,
    /// Combined accessible description.
    pub accessible: String,
}

/// Snapshot of the engine's mutable state.
///
/// Mutated only through [`ClockEngine`] operations and dropped with the
/// owning engine; there is no shared mutable state beyond this.
#[derive(Debug, Clone)]
pub struct ClockState {
    current: TimeValue,
    live: bool,
    format_mode: FormatMode,
}

impl ClockState {
    /// Returns the time value the clock currently shows.
    pub fn current(&self) -> &TimeValue {
        &self.current
    }

    /// Returns whether the clock refreshes from the wall clock on update.
    pub fn is_live(&self) -> bool {
        self.live
    }

    /// Returns the active format mode.
    pub fn format_mode(&self) -> FormatMode {
        self.format_mode
    }
}

/// Clock state machine with `Live` and `Fixed` states.
///
/// In the live state every [`update_now`](Self::update_now) refreshes the
/// current time from the [`WallClock`]; in the fixed state the current time
/// is pinned by the caller (an alarm preview, say) and only re-formatted.
/// The engine performs no I/O beyond reading the wall clock, holds no locks,
/// and assumes non-reentrant one-at-a-time invocation.
pub struct ClockEngine {
    state: ClockState,
    formatter: TimeFormatter,
    wall_clock: Box<dyn WallClock>,
    rendered: RenderedTime,
}

impl ClockEngine {
    /// Creates a live engine at the present instant with the default
    /// 12-hour format mode.
    pub fn new(formatter: TimeFormatter, wall_clock: Box<dyn WallClock>) -> Self {
        let mut engine = Self {
            state: ClockState {
                current: TimeValue::new(wall_clock.now_millis()),
                live: true,
                format_mode: FormatMode::default(),
            },
            formatter,
            wall_clock,
            rendered: RenderedTime::default(),
        };
        engine.update_now();
        engine
    }

    /// Transitions between the live and fixed states.
    ///
    /// Does not itself trigger a refresh; leaving the live state freezes the
    /// current time at whatever the last update produced.
    pub fn set_live(&mut self, live: bool) {
        if self.state.live != live {
            debug!("clock set_live({live})");
        }
        self.state.live = live;
    }

    /// Refreshes the current time when live, then re-derives all four
    /// rendered strings.
    pub fn update_now(&mut self) -> &RenderedTime {
        if self.state.live {
            let zone = self.state.current.zone_override().map(str::to_string);
            self.state.current =
                TimeValue::new(self.wall_clock.now_millis()).with_zone_override(zone);
        }
        self.rerender()
    }

    /// Pins the clock to today's date at the given wall time and refreshes.
    ///
    /// The wall time is interpreted in the ambient zone. Out-of-range input
    /// fails and leaves all state, including the rendered strings, unchanged.
    pub fn set_fixed_time(&mut self, hour: u32, minute: u32) -> Result<&RenderedTime, ClockError> {
        if hour > 23 || minute > 59 {
            return Err(ClockError::InvalidTime { hour, minute });
        }
        let instant = self.today_at(hour, minute);
        let zone = self.state.current.zone_override().map(str::to_string);
        self.state.current = TimeValue::new(instant).with_zone_override(zone);
        self.state.live = false;
        Ok(self.update_now())
    }

    /// Replaces the current time value wholesale and refreshes.
    ///
    /// Unlike [`set_fixed_time`](Self::set_fixed_time) this performs no
    /// validation and does not change the live flag; a live engine snaps
    /// back to the wall clock as part of the refresh, so previews should
    /// leave the live state first.
    pub fn set_time_value(&mut self, value: TimeValue) -> &RenderedTime {
        self.state.current = value;
        self.update_now()
    }

    /// Sets or clears the timezone override, then refreshes.
    ///
    /// An id the timezone database does not recognize is kept but renders as
    /// if no override were set; callers needing strict validation must
    /// pre-validate the id.
    pub fn set_time_zone_override(&mut self, zone: Option<String>) -> &RenderedTime {
        if let Some(id) = zone.as_deref()
            && id.parse::<chrono_tz::Tz>().is_err()
        {
            warn!("unknown timezone id {id:?}, rendering with the ambient zone");
        }
        self.state.current = self.state.current.clone().with_zone_override(zone);
        self.update_now()
    }

    /// Recomputes the format mode from the platform preference and refreshes.
    pub fn on_format_preference_changed(&mut self, use_24_hour: bool) -> &RenderedTime {
        self.state.format_mode = FormatMode::from_preference(use_24_hour);
        self.update_now()
    }

    /// Suggests bedtimes for the current time as the wake-up time.
    ///
    /// Runs the sleep calculator with the default plan and joins the
    /// candidates under the engine's format mode.
    pub fn suggested_sleep_times(&self) -> Result<String, ClockError> {
        let candidates = suggest_sleep_times(&self.state.current, &SleepPlan::default())?;
        Ok(format_suggestions(
            &candidates,
            &self.formatter,
            self.state.format_mode,
        ))
    }

    /// Returns the engine state snapshot.
    pub fn state(&self) -> &ClockState {
        &self.state
    }

    /// Returns whether the clock is in the live state.
    pub fn is_live(&self) -> bool {
        self.state.live
    }

    /// Returns the active format mode.
    pub fn format_mode(&self) -> FormatMode {
        self.state.format_mode
    }

    /// Returns the time value the clock currently shows.
    pub fn current(&self) -> &TimeValue {
        &self.state.current
    }

    /// Returns the strings produced by the most recent update.
    pub fn rendered(&self) -> &RenderedTime {
        &self.rendered
    }

    fn rerender(&mut self) -> &RenderedTime {
        let time = &self.state.current;
        let mode = self.state.format_mode;
        self.rendered = RenderedTime {
            hours: self.formatter.render_hours(time, mode),
            minutes: self.formatter.render_minutes(time),
            meridiem: self.formatter.render_meridiem(time, mode),
            accessible: self.formatter.render_accessible_description(time, mode),
        };
        &self.rendered
    }

    fn today_at(&self, hour: u32, minute: u32) -> i64 {
        let now = DateTime::from_timestamp_millis(self.wall_clock.now_millis())
            .unwrap_or_default()
            .with_timezone(&Local);
        now.date_naive()
            .and_hms_opt(hour, minute, 0)
            .and_then(|wall| Local.from_local_datetime(&wall).earliest())
            .map(|pinned| pinned.timestamp_millis())
            // a wall time skipped by a DST gap pins to the present instant
            .unwrap_or_else(|| now.timestamp_millis())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use std::cell::Cell;
    use std::rc::Rc;

    use chrono::{TimeZone, Utc};

    use super::*;

    struct FakeClock(Rc<Cell<i64>>);

    impl WallClock for FakeClock {
        fn now_millis(&self) -> i64 {
            self.0.get()
        }
    }

    fn engine_at(instant: i64) -> (ClockEngine, Rc<Cell<i64>>) {
        let handle = Rc::new(Cell::new(instant));
        let engine = ClockEngine::new(
            TimeFormatter::default(),
            Box::new(FakeClock(handle.clone())),
        );
        (engine, handle)
    }

    const T0: i64 = 1_700_000_000_000;

    #[test]
    fn test_live_updates_follow_the_wall_clock() {
        let (mut engine, clock) = engine_at(T0);
        assert!(engine.is_live());
        let before = engine.update_now().clone();
        clock.set(T0 + 5 * 60_000);
        let after = engine.update_now().clone();
        assert_ne!(before.accessible, after.accessible);
        assert_eq!(engine.current().instant_millis(), T0 + 5 * 60_000);
    }

    #[test]
    fn test_leaving_live_freezes_the_current_time() {
        let (mut engine, clock) = engine_at(T0);
        engine.update_now();
        engine.set_live(false);
        let frozen = engine.rendered().clone();
        clock.set(T0 + 30 * 60_000);
        let after = engine.update_now().clone();
        assert_eq!(frozen, after);
        assert_eq!(engine.current().instant_millis(), T0);
    }

    #[test]
    fn test_set_fixed_time_pins_and_renders() {
        let (mut engine, _clock) = engine_at(T0);
        let rendered = engine.set_fixed_time(6, 30).unwrap().clone();
        assert_eq!(rendered.hours, "6");
        assert_eq!(rendered.minutes, ":30");
        assert_eq!(rendered.meridiem.as_deref(), Some("AM"));
        assert_eq!(rendered.accessible, "6:30AM");
        assert!(!engine.is_live());
    }

    #[test]
    fn test_set_fixed_time_rejects_out_of_range_input() {
        let (mut engine, _clock) = engine_at(T0);
        engine.update_now();
        let current = engine.current().clone();
        let rendered = engine.rendered().clone();
        let live = engine.is_live();

        assert_eq!(
            engine.set_fixed_time(25, 0),
            Err(ClockError::InvalidTime { hour: 25, minute: 0 })
        );
        assert_eq!(
            engine.set_fixed_time(0, 61),
            Err(ClockError::InvalidTime { hour: 0, minute: 61 })
        );

        assert_eq!(engine.current(), &current);
        assert_eq!(engine.rendered(), &rendered);
        assert_eq!(engine.is_live(), live);
    }

    #[test]
    fn test_zone_override_set_then_clear_restores_ambient() {
        let (mut engine, _clock) = engine_at(T0);
        engine.set_live(false);
        let ambient = engine.update_now().clone();
        engine.set_time_zone_override(Some("Asia/Tokyo".to_string()));
        let restored = engine.set_time_zone_override(None).clone();
        assert_eq!(ambient, restored);
    }

    #[test]
    fn test_unknown_zone_renders_as_ambient() {
        let (mut engine, _clock) = engine_at(T0);
        engine.set_live(false);
        let ambient = engine.update_now().clone();
        let overridden = engine
            .set_time_zone_override(Some("Nowhere/Imaginary".to_string()))
            .clone();
        assert_eq!(ambient, overridden);
        assert_eq!(engine.current().zone_override(), Some("Nowhere/Imaginary"));
    }

    #[test]
    fn test_format_preference_toggles_meridiem() {
        let (mut engine, _clock) = engine_at(T0);
        let twelve = engine.on_format_preference_changed(false).clone();
        assert!(twelve.meridiem.is_some());
        let twenty_four = engine.on_format_preference_changed(true).clone();
        assert!(twenty_four.meridiem.is_none());
        assert!(engine.format_mode().use_24_hour());
    }

    #[test]
    fn test_suggested_sleep_times_for_seven_am_wake() {
        let (mut engine, _clock) = engine_at(T0);
        engine.set_live(false);
        let wake = Utc
            .with_ymd_and_hms(2024, 5, 14, 7, 0, 0)
            .unwrap()
            .timestamp_millis();
        engine.set_time_value(TimeValue::new(wake).with_zone_override(Some("UTC".to_string())));
        engine.on_format_preference_changed(true);
        assert_eq!(
            engine.suggested_sleep_times().unwrap(),
            "21:46, 23:16, 00:46, 02:16"
        );
    }

    #[test]
    fn test_set_time_value_keeps_live_flag() {
        let (mut engine, clock) = engine_at(T0);
        engine.set_time_value(TimeValue::new(T0 - 60_000));
        assert!(engine.is_live());
        // the live refresh inside the call already snapped back to the wall clock
        assert_eq!(engine.current().instant_millis(), T0);
        clock.set(T0 + 60_000);
        engine.update_now();
        assert_eq!(engine.current().instant_millis(), T0 + 60_000);
    }
}
