//! Renders a time value into hour, minute, and meridiem strings.
use crate::format_mode::FormatMode;
use crate::locale::MeridiemLabels;
use crate::time_value::TimeValue;

/// Renders [`TimeValue`]s under a [`FormatMode`].
///
/// Holds the locale's meridiem label pair; everything else is a pure function
/// of the time value and format mode. There are no error cases: a missing or
/// unrecognized timezone override falls back to the ambient zone inside
/// [`TimeValue::wall_hour_minute`].
#[derive(Debug, Clone, Default)]
pub struct TimeFormatter {
    labels: MeridiemLabels,
}

impl TimeFormatter {
    /// Creates a formatter with the given locale labels.
    pub fn new(labels: MeridiemLabels) -> Self {
        Self { labels }
    }

    /// Returns the locale labels this formatter renders with.
    pub fn labels(&self) -> &MeridiemLabels {
        &self.labels
    }

    /// Renders the hour token.
    ///
    /// Zero-padded 24-hour form (`00`-`23`) in 24-hour mode, otherwise 1-12
    /// with no leading zero (midnight and noon render as 12).
    pub fn render_hours(&self, time: &TimeValue, mode: FormatMode) -> String {
        let (hour, _) = time.wall_hour_minute();
        if mode.use_24_hour() {
            format!("{hour:02}")
        } else {
            format!("{}", hour_for_display(hour))
        }
    }

    /// Renders the minute token, a colon followed by zero-padded minutes.
    pub fn render_minutes(&self, time: &TimeValue) -> String {
        let (_, minute) = time.wall_hour_minute();
        format!(":{minute:02}")
    }

    /// Renders the meridiem label, or `None` when the mode hides it.
    ///
    /// Hours of day in `[0, 12)` are ante meridiem, so midnight reads AM.
    pub fn render_meridiem(&self, time: &TimeValue, mode: FormatMode) -> Option<String> {
        if !mode.shows_meridiem() {
            return None;
        }
        let (hour, _) = time.wall_hour_minute();
        let label = if hour < 12 {
            self.labels.am()
        } else {
            self.labels.pm()
        };
        Some(label.to_string())
    }

    /// Renders the combined accessible description.
    ///
    /// Hours, minutes, and the meridiem label when shown, concatenated with
    /// no separator beyond the colon already inside the minutes token.
    pub fn render_accessible_description(&self, time: &TimeValue, mode: FormatMode) -> String {
        let mut description = self.render_hours(time, mode);
        description.push_str(&self.render_minutes(time));
        if let Some(meridiem) = self.render_meridiem(time, mode) {
            description.push_str(&meridiem);
        }
        description
    }
}

fn hour_for_display(hour: u32) -> u32 {
    let hour = hour % 12;
    if hour == 0 { 12 } else { hour }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use chrono::{TimeZone, Utc};

    use super::*;

    fn utc_value(hour: u32, minute: u32) -> TimeValue {
        let instant = Utc
            .with_ymd_and_hms(2024, 5, 14, hour, minute, 0)
            .unwrap()
            .timestamp_millis();
        TimeValue::new(instant).with_zone_override(Some("UTC".to_string()))
    }

    fn reparse(formatter: &TimeFormatter, time: &TimeValue, mode: FormatMode) -> (u32, u32) {
        let hours = formatter.render_hours(time, mode);
        let minutes = formatter.render_minutes(time);
        let minute: u32 = minutes.strip_prefix(':').unwrap().parse().unwrap();
        let raw: u32 = hours.parse().unwrap();
        let hour = if mode.use_24_hour() {
            raw
        } else {
            let base = raw % 12;
            match formatter.render_meridiem(time, mode).as_deref() {
                Some("PM") => base + 12,
                _ => base,
            }
        };
        (hour, minute)
    }

    #[test]
    fn test_hours_24_zero_padded() {
        let formatter = TimeFormatter::default();
        let mode = FormatMode::from_preference(true);
        assert_eq!(formatter.render_hours(&utc_value(0, 0), mode), "00");
        assert_eq!(formatter.render_hours(&utc_value(9, 30), mode), "09");
        assert_eq!(formatter.render_hours(&utc_value(23, 59), mode), "23");
    }

    #[test]
    fn test_hours_12_no_leading_zero() {
        let formatter = TimeFormatter::default();
        let mode = FormatMode::from_preference(false);
        assert_eq!(formatter.render_hours(&utc_value(0, 0), mode), "12");
        assert_eq!(formatter.render_hours(&utc_value(9, 30), mode), "9");
        assert_eq!(formatter.render_hours(&utc_value(12, 0), mode), "12");
        assert_eq!(formatter.render_hours(&utc_value(15, 0), mode), "3");
    }

    #[test]
    fn test_minutes_always_padded() {
        let formatter = TimeFormatter::default();
        assert_eq!(formatter.render_minutes(&utc_value(10, 5)), ":05");
        assert_eq!(formatter.render_minutes(&utc_value(10, 59)), ":59");
    }

    #[test]
    fn test_meridiem_morning_boundary() {
        let formatter = TimeFormatter::default();
        let mode = FormatMode::from_preference(false);
        assert_eq!(
            formatter.render_meridiem(&utc_value(0, 0), mode).as_deref(),
            Some("AM")
        );
        assert_eq!(
            formatter.render_meridiem(&utc_value(11, 59), mode).as_deref(),
            Some("AM")
        );
        assert_eq!(
            formatter.render_meridiem(&utc_value(12, 0), mode).as_deref(),
            Some("PM")
        );
    }

    #[test]
    fn test_meridiem_absent_in_24_hour_mode() {
        let formatter = TimeFormatter::default();
        let mode = FormatMode::from_preference(true);
        for hour in 0..24 {
            assert_eq!(formatter.render_meridiem(&utc_value(hour, 0), mode), None);
        }
    }

    #[test]
    fn test_accessible_description_concatenation() {
        let formatter = TimeFormatter::default();
        assert_eq!(
            formatter
                .render_accessible_description(&utc_value(19, 4), FormatMode::from_preference(false)),
            "7:04PM"
        );
        assert_eq!(
            formatter
                .render_accessible_description(&utc_value(19, 4), FormatMode::from_preference(true)),
            "19:04"
        );
    }

    #[test]
    fn test_custom_labels() {
        let formatter = TimeFormatter::new(MeridiemLabels::from_pair("a.m.", "p.m."));
        let mode = FormatMode::from_preference(false);
        assert_eq!(
            formatter.render_meridiem(&utc_value(8, 0), mode).as_deref(),
            Some("a.m.")
        );
        assert_eq!(
            formatter.render_accessible_description(&utc_value(20, 15), mode),
            "8:15p.m."
        );
    }

    #[test]
    fn test_round_trip_all_valid_pairs() {
        let formatter = TimeFormatter::default();
        for hour in 0..24 {
            for minute in 0..60 {
                let time = utc_value(hour, minute);
                for use_24_hour in [false, true] {
                    let mode = FormatMode::from_preference(use_24_hour);
                    assert_eq!(reparse(&formatter, &time, mode), (hour, minute));
                }
            }
        }
    }
}
