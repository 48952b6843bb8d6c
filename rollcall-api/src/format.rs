//! Serde formats shared by every payload that carries a date or a timestamp.

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, UtcOffset};

/// Calendar dates travel as `YYYY-MM-DD` strings.
pub mod calendar_date {
    use serde::{Deserialize, Deserializer, Serializer};
    use time::Date;
    use time::macros::format_description;

    pub fn serialize<S: Serializer>(date: &Date, serializer: S) -> Result<S::Ok, S::Error> {
        let formatted = date
            .format(format_description!("[year]-[month]-[day]"))
            .map_err(serde::ser::Error::custom)?;

        serializer.serialize_str(&formatted)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Date, D::Error> {
        let raw = String::deserialize(deserializer)?;

        Date::parse(&raw, format_description!("[year]-[month]-[day]"))
            .map_err(serde::de::Error::custom)
    }
}

/// Timestamps travel as RFC 3339 strings.
pub use time::serde::rfc3339 as timestamp;

/// Parse a calendar date from either `YYYY-MM-DD` or an RFC 3339 date-time.
///
/// A date-time is normalized to UTC before its date is taken, so
/// `2026-01-10T23:30:00-02:00` yields `2026-01-11`.
pub fn parse_calendar_date(input: &str) -> Option<Date> {
    let input = input.trim();

    if let Ok(date) = Date::parse(input, format_description!("[year]-[month]-[day]")) {
        return Some(date);
    }

    OffsetDateTime::parse(input, &Rfc3339)
        .ok()
        .map(|datetime| datetime.to_offset(UtcOffset::UTC).date())
}
