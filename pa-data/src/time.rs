//! Time-of-day conversion for presence intervals.
//!
//! The backend reports presence durations and mean start/end times as
//! seconds since midnight. Charts with a time axis need those values as
//! time-of-day components, derived by integer division.

use std::fmt;

/// A time of day split into hour/minute/second components.
///
/// Inputs are assumed to lie in the 0..86400 second domain but are not
/// validated: a larger value simply yields an hour past 23, which the
/// chart layer renders as an out-of-range time rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeOfDay {
    pub hour: i64,
    pub minute: i64,
    pub second: i64,
}

impl TimeOfDay {
    /// Split seconds-since-midnight into h/m/s components.
    pub fn from_seconds(seconds: i64) -> Self {
        Self {
            hour: seconds / 3600,
            minute: (seconds % 3600) / 60,
            second: seconds % 60,
        }
    }

    /// Encode as a Google Charts DataTable datetime cell value.
    ///
    /// The chart time axis uses the fixed epoch `Date(1,1,1)`; only the
    /// time components are meaningful. Month is zero-based in this wire
    /// format.
    pub fn to_chart_value(self) -> String {
        format!("Date(1,1,1,{},{},{})", self.hour, self.minute, self.second)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_seconds_components() {
        let t = TimeOfDay::from_seconds(3661);
        assert_eq!(t.hour, 1);
        assert_eq!(t.minute, 1);
        assert_eq!(t.second, 1);
        assert_eq!(t.to_string(), "01:01:01");
    }

    #[test]
    fn test_from_seconds_boundaries() {
        assert_eq!(
            TimeOfDay::from_seconds(0),
            TimeOfDay { hour: 0, minute: 0, second: 0 }
        );
        assert_eq!(
            TimeOfDay::from_seconds(86399),
            TimeOfDay { hour: 23, minute: 59, second: 59 }
        );
    }

    #[test]
    fn test_from_seconds_whole_hour() {
        let t = TimeOfDay::from_seconds(3600);
        assert_eq!(t.to_string(), "01:00:00");
    }

    #[test]
    fn test_out_of_domain_gives_out_of_range_hour() {
        // Not validated: a day-and-a-bit becomes hour 24, not an error.
        let t = TimeOfDay::from_seconds(86400 + 90);
        assert_eq!(t.hour, 24);
        assert_eq!(t.minute, 1);
        assert_eq!(t.second, 30);
    }

    #[test]
    fn test_chart_value_encoding() {
        assert_eq!(
            TimeOfDay::from_seconds(34_200).to_chart_value(),
            "Date(1,1,1,9,30,0)"
        );
    }
}
