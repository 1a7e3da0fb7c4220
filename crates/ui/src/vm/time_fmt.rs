use std::fmt::Display;

use chrono::{DateTime, Local, TimeZone, Utc};

/// `August 16, 2025`, in the viewer's local zone.
#[must_use]
pub fn format_date(value: DateTime<Utc>) -> String {
    format_date_in(value, &Local)
}

/// `August 16, 2025 at 10:15 PM`, in the viewer's local zone.
#[must_use]
pub fn format_datetime(value: DateTime<Utc>) -> String {
    format_datetime_in(value, &Local)
}

#[must_use]
pub fn format_date_in<Tz>(value: DateTime<Utc>, zone: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    value.with_timezone(zone).format("%B %-d, %Y").to_string()
}

#[must_use]
pub fn format_datetime_in<Tz>(value: DateTime<Utc>, zone: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    value
        .with_timezone(zone)
        .format("%B %-d, %Y at %I:%M %p")
        .to_string()
}
