//! # Time Utilities
//!
//! Timestamp helpers for registration records, using chrono.

use chrono::{DateTime, NaiveDateTime, Utc};

/// Column format used for registration timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Get current UTC time.
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Format time as `YYYY-MM-DD HH:MM:SS`.
pub fn format_timestamp(time: DateTime<Utc>) -> String {
    time.format(TIMESTAMP_FORMAT).to_string()
}

/// Parse a `YYYY-MM-DD HH:MM:SS` string back to UTC.
pub fn parse_timestamp(moment: &str) -> Result<DateTime<Utc>, Error> {
    NaiveDateTime::parse_from_str(moment, TIMESTAMP_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|_| Error::FailToDateParse(moment.to_string()))
}

// region:    --- Error
#[derive(Debug)]
pub enum Error {
    FailToDateParse(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}
// endregion: --- Error

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_timestamp() {
        let time = Utc.with_ymd_and_hms(2025, 8, 15, 14, 5, 9).unwrap();
        assert_eq!(format_timestamp(time), "2025-08-15 14:05:09");
    }

    #[test]
    fn test_parse_timestamp_round_trip() {
        let time = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(parse_timestamp(&format_timestamp(time)).unwrap(), time);
        assert!(parse_timestamp("2025-01-02T03:04:05Z").is_err());
    }
}
