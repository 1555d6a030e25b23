//! Date and time display utilities.

use std::fmt;

use jiff::{Timestamp, civil::Date, tz::TimeZone};

/// Formats a `Timestamp` in the system timezone as `YYYY-MM-DD HH:MM:SS TZ`.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl<'a> fmt::Display for LocalDateTime<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}

/// Formats an optional calendar date, using `—` when absent.
pub struct TargetDate<'a>(pub Option<&'a Date>);

impl<'a> fmt::Display for TargetDate<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(date) => write!(f, "{}", date.strftime("%Y-%m-%d")),
            None => write!(f, "—"),
        }
    }
}
