use time::{Date, Duration, OffsetDateTime, format_description::BorrowedFormatItem, macros::format_description};
use time_tz::{ToTimezone, timezones};

const DAY_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Parses a `YYYY-MM-DD` string.
pub fn parse_day(value: &str) -> crate::Result<Date> {
    match Date::parse(value.trim(), DAY_FORMAT) {
        Ok(day) => Ok(day),
        Err(_) => crate::invalid!("invalid date '{value}', expected YYYY-MM-DD"),
    }
}

pub fn format_day(day: Date) -> String {
    day.format(DAY_FORMAT).unwrap_or_else(|_| day.to_string())
}

pub fn is_known_timezone(tz: &str) -> bool {
    tz == "UTC" || timezones::get_by_name(tz).is_some()
}

/// Current calendar day in the given IANA timezone, UTC when the name is unknown.
pub fn today(tz: &str) -> Date {
    let now = OffsetDateTime::now_utc();

    match timezones::get_by_name(tz) {
        Some(tz) => now.to_timezone(tz).date(),
        _ => now.date(),
    }
}

/// Day selected by an optional `date` request parameter.
///
/// A missing or blank value means today; anything else must parse, a
/// malformed value is never replaced by today.
pub fn resolve_day(value: Option<&str>, tz: &str) -> crate::Result<Date> {
    match value.map(str::trim) {
        None | Some("") => Ok(today(tz)),
        Some(value) => parse_day(value),
    }
}

/// Unix timestamp of the day at midnight UTC, the stored form of a day.
pub fn to_timestamp(day: Date) -> i64 {
    day.midnight().assume_utc().unix_timestamp()
}

pub fn from_timestamp(timestamp: i64) -> crate::Result<Date> {
    Ok(OffsetDateTime::from_unix_timestamp(timestamp)?.date())
}

/// Seven days centered on `center`: three before, the day itself, three after.
///
/// Days outside the representable calendar are left out.
pub fn date_range(center: Date) -> Vec<Date> {
    (-3..=3)
        .filter_map(|offset| center.checked_add(Duration::days(offset)))
        .collect()
}
