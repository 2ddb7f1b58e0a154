//! Instants and UTC calendar dates
//!
//! Timestamps are milliseconds since the Unix epoch and may be negative.
//! Civil date conversion uses the proleptic Gregorian calendar.

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// Milliseconds in one day
pub const MS_PER_DAY: i64 = 1000 * 60 * 60 * 24;

/// Error type for unparseable dates
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    InvalidFormat(String),
    OutOfRange(String),
}

impl fmt::Display for DateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat(s) => write!(f, "Invalid date '{s}', expected YYYY-MM-DD"),
            Self::OutOfRange(s) => write!(f, "Date '{s}' does not exist"),
        }
    }
}

impl std::error::Error for DateError {}

/// A point in time, in milliseconds since 1970-01-01T00:00:00Z
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(i64);

impl Timestamp {
    #[inline]
    #[must_use]
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    #[inline]
    #[must_use]
    pub const fn millis(self) -> i64 {
        self.0
    }

    /// Current wall-clock time
    #[must_use]
    pub fn now() -> Self {
        match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(since) => Self(since.as_millis() as i64),
            Err(before) => Self(-(before.duration().as_millis() as i64)),
        }
    }

    /// Midnight UTC at the start of the given civil date
    ///
    /// # Errors
    ///
    /// Returns `DateError::OutOfRange` if the month or day does not exist.
    pub fn from_ymd(year: i64, month: u32, day: u32) -> Result<Self, DateError> {
        if !(1..=12).contains(&month) || day == 0 || day > days_in_month(year, month) {
            return Err(DateError::OutOfRange(format!(
                "{year:04}-{month:02}-{day:02}"
            )));
        }
        Ok(Self(days_from_civil(year, month, day) * MS_PER_DAY))
    }

    /// Parse a `YYYY-MM-DD` string as midnight UTC
    ///
    /// # Errors
    ///
    /// Returns `DateError::InvalidFormat` for malformed input and
    /// `DateError::OutOfRange` for dates that do not exist.
    ///
    /// # Examples
    /// ```
    /// use wordle_daily::core::Timestamp;
    ///
    /// let ts = Timestamp::parse_date("2025-08-01").unwrap();
    /// assert_eq!(ts.millis(), 1_754_006_400_000);
    /// ```
    pub fn parse_date(s: &str) -> Result<Self, DateError> {
        let invalid = || DateError::InvalidFormat(s.to_string());

        let mut parts = s.trim().splitn(3, '-');
        let (Some(y), Some(m), Some(d)) = (parts.next(), parts.next(), parts.next()) else {
            return Err(invalid());
        };
        if y.len() != 4 || m.len() != 2 || d.len() != 2 {
            return Err(invalid());
        }

        let year: i64 = y.parse().map_err(|_| invalid())?;
        let month: u32 = m.parse().map_err(|_| invalid())?;
        let day: u32 = d.parse().map_err(|_| invalid())?;

        Self::from_ymd(year, month, day)
    }

    /// Civil date (year, month, day) in UTC
    #[must_use]
    pub fn to_ymd(self) -> (i64, u32, u32) {
        civil_from_days(self.0.div_euclid(MS_PER_DAY))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (y, m, d) = self.to_ymd();
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

const fn is_leap_year(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

const fn days_in_month(year: i64, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

// Days since 1970-01-01 for a proleptic Gregorian date
fn days_from_civil(year: i64, month: u32, day: u32) -> i64 {
    let y = if month <= 2 { year - 1 } else { year };
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let mp = i64::from((month + 9) % 12);
    let doy = (153 * mp + 2) / 5 + i64::from(day) - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
    let year = yoe + era * 400 + i64::from(month <= 2);
    (year, month, day)
}
