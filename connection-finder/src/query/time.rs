//! Date and time strings in the fixed-width form the upstream form expects.
//!
//! The form takes the date as `DDMMYYYY` and the time as `HHMM`, both without
//! separators. Connection times on the result page come back as `HH:MM`;
//! [`DepartureTime`] is the integer view of those used for paging.

use std::fmt;

use chrono::{Datelike, Local, NaiveDateTime, Timelike};

/// Error returned when a departure time cannot be read.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time {input:?}: {reason}")]
pub struct TimeError {
    input: String,
    reason: &'static str,
}

impl TimeError {
    fn new(input: &str, reason: &'static str) -> Self {
        Self {
            input: input.to_string(),
            reason,
        }
    }
}

/// The current local wall-clock instant.
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Format the date part of `t` as `DDMMYYYY`.
///
/// ```
/// use chrono::NaiveDate;
/// use connection_finder::query::format_date;
///
/// let t = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap().and_hms_opt(9, 7, 0).unwrap();
/// assert_eq!(format_date(&t), "05032024");
/// ```
pub fn format_date(t: &NaiveDateTime) -> String {
    format!("{:02}{:02}{}", t.day(), t.month(), t.year())
}

/// Format the time part of `t` as `HHMM`.
///
/// ```
/// use chrono::NaiveDate;
/// use connection_finder::query::format_time;
///
/// let t = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap().and_hms_opt(9, 7, 0).unwrap();
/// assert_eq!(format_time(&t), "0907");
/// ```
pub fn format_time(t: &NaiveDateTime) -> String {
    format!("{:02}{:02}", t.hour(), t.minute())
}

/// Hour and minute of a connection time, as shown on the result page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DepartureTime {
    hour: u8,
    minute: u8,
}

impl DepartureTime {
    /// Create a time from components. Returns `None` when out of range.
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        (hour < 24 && minute < 60).then_some(Self { hour, minute })
    }

    /// Parse `HH:MM` (result page) or `HHMM` (form field).
    ///
    /// Surrounding whitespace is ignored. A single-digit hour is accepted
    /// in the `H:MM` form.
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        let trimmed = s.trim();
        let (hour, minute) = match trimmed.split_once(':') {
            Some((h, m)) => (h, m),
            None if trimmed.len() == 4 && trimmed.is_char_boundary(2) => trimmed.split_at(2),
            None => return Err(TimeError::new(s, "expected HH:MM or HHMM")),
        };

        if hour.is_empty() || hour.len() > 2 || minute.len() != 2 {
            return Err(TimeError::new(s, "expected HH:MM or HHMM"));
        }

        let hour = parse_digits(hour).ok_or_else(|| TimeError::new(s, "invalid hour digits"))?;
        let minute =
            parse_digits(minute).ok_or_else(|| TimeError::new(s, "invalid minute digits"))?;

        Self::new(hour, minute).ok_or_else(|| TimeError::new(s, "hour or minute out of range"))
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// The next query time after this one.
    ///
    /// Advances the minute by one. Minute 59 wraps to 00 and the hour is
    /// left as it is, mirroring how the upstream pages its results.
    ///
    /// ```
    /// use connection_finder::query::DepartureTime;
    ///
    /// let t = DepartureTime::parse("14:59").unwrap();
    /// assert_eq!(t.next_minute().to_string(), "14:00");
    /// ```
    pub fn next_minute(&self) -> Self {
        let minute = if self.minute == 59 { 0 } else { self.minute + 1 };
        Self {
            hour: self.hour,
            minute,
        }
    }
}

impl fmt::Display for DepartureTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

fn parse_digits(s: &str) -> Option<u8> {
    if !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
