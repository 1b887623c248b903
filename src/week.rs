use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeZone, Weekday};

use crate::models::WeekIntent;

pub const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;
pub const MS_PER_WEEK: i64 = 7 * MS_PER_DAY;

/// Week number the wall clock falls into, counted from the group's epoch.
///
/// The epoch marks the start of week 1 as UTC milliseconds; the wall clock
/// is compared against it timezone-naively. On Sundays a one-day forward
/// offset is applied, so the day before a week starts already counts toward
/// that week.
pub fn current_week(now: NaiveDateTime, epoch_ms: i64) -> i64 {
    let day_offset = if now.weekday() == Weekday::Sun {
        MS_PER_DAY
    } else {
        0
    };
    let now_ms = now.and_utc().timestamp_millis();
    ceil_div(now_ms - epoch_ms + day_offset, MS_PER_WEEK)
}

/// Turns a request intent into a concrete week number. Explicit weeks pass
/// through unchanged; the result may be zero or negative when the epoch
/// lies in the future.
pub fn resolve(now: NaiveDateTime, epoch_ms: i64, intent: WeekIntent) -> Option<i64> {
    match intent {
        WeekIntent::Explicit(week) => Some(week),
        WeekIntent::Current => Some(current_week(now, epoch_ms)),
        WeekIntent::Next => Some(current_week(now, epoch_ms) + 1),
        WeekIntent::None => None,
    }
}

/// First and last displayed dates of a week: its Monday and the Saturday
/// five days later, as calendar dates in the given timezone. `None` only
/// when the timestamp falls outside the representable date range.
pub fn week_dates<Tz: TimeZone>(tz: &Tz, epoch_ms: i64, week: i64) -> Option<(NaiveDate, NaiveDate)> {
    let start_ms = epoch_ms + MS_PER_WEEK * (week - 1);
    let end_ms = start_ms + 5 * MS_PER_DAY;
    let start = DateTime::from_timestamp_millis(start_ms)?
        .with_timezone(tz)
        .date_naive();
    let end = DateTime::from_timestamp_millis(end_ms)?
        .with_timezone(tz)
        .date_naive();
    Some((start, end))
}

fn ceil_div(value: i64, divisor: i64) -> i64 {
    let quotient = value / divisor;
    if value % divisor > 0 {
        quotient + 1
    } else {
        quotient
    }
}
