// Copyright (C) 2026 Shift Desk Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Date and time-of-day rules for shift scheduling.
//!
//! ## Invariants
//!
//! - Shift durations are whole hours, rounded to nearest.
//! - A shift whose end time precedes its start time crosses midnight and
//!   wraps by 24 hours before rounding.
//! - Past/upcoming partitioning is at day granularity; time-of-day is
//!   ignored.
//! - "Now" is never read here: callers thread an explicit `today` value
//!   into every check.

use crate::error::DomainError;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, Duration, Time};

/// ISO 8601 calendar date, e.g. `2024-06-10`.
const DATE_FORMAT: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

/// Time-of-day with seconds, e.g. `06:00:00`.
const TIME_FORMAT: &[BorrowedFormatItem<'_>] = format_description!("[hour]:[minute]:[second]");

/// Time-of-day without seconds, e.g. `06:00`.
const TIME_FORMAT_SHORT: &[BorrowedFormatItem<'_>] = format_description!("[hour]:[minute]");

/// Length of the "recent bookings" reporting window, in days.
const RECENT_WINDOW_DAYS: i64 = 7;

/// Computes the whole-hour duration of a shift window.
///
/// Both times are treated as instants on the same reference day. If the
/// end precedes the start the shift is interpreted as crossing midnight
/// and 24 hours are added before rounding to the nearest whole hour.
///
/// # Examples
///
/// - 09:00 → 17:00 is 8 hours
/// - 22:00 → 06:00 is 8 hours (overnight wrap)
///
/// # Errors
///
/// Returns `DomainError::InvalidTimeRange` if `start == end`; a shift
/// window must be non-degenerate.
pub fn compute_duration_hours(start: Time, end: Time) -> Result<u8, DomainError> {
    if start == end {
        return Err(DomainError::InvalidTimeRange(String::from(
            "Start and end time must differ",
        )));
    }

    let mut minutes: i64 = (end - start).whole_minutes();
    if minutes < 0 {
        // Overnight shift: the window crosses midnight.
        minutes += 24 * 60;
    }

    // Round to the nearest whole hour. minutes is in 1..=1439 here, so
    // the result fits in u8.
    let hours: i64 = (minutes + 30) / 60;
    u8::try_from(hours).map_err(|_| DomainError::DateArithmeticOverflow {
        operation: String::from("rounding shift duration"),
    })
}

/// Returns whether a shift date is in the past relative to `today`.
///
/// A booking is *past* iff its date is strictly before the current date;
/// a booking for today is still upcoming.
#[must_use]
pub fn is_past_date(shift_date: Date, today: Date) -> bool {
    shift_date < today
}

/// Returns the first date of the trailing "recent" reporting window.
///
/// A booking counts as recent if its shift date falls on or after the
/// returned date (7 days before `today`, inclusive).
///
/// # Errors
///
/// Returns an error if the subtraction underflows the calendar range.
pub fn recent_window_start(today: Date) -> Result<Date, DomainError> {
    today
        .checked_sub(Duration::days(RECENT_WINDOW_DAYS))
        .ok_or_else(|| DomainError::DateArithmeticOverflow {
            operation: String::from("computing the recent-bookings window"),
        })
}

/// Parses an ISO 8601 calendar date (`YYYY-MM-DD`).
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the string is malformed.
pub fn parse_shift_date(s: &str) -> Result<Date, DomainError> {
    Date::parse(s, DATE_FORMAT).map_err(|e| DomainError::DateParseError {
        date_string: s.to_string(),
        error: e.to_string(),
    })
}

/// Parses a time-of-day string, with or without seconds
/// (`HH:MM:SS` or `HH:MM`).
///
/// # Errors
///
/// Returns `DomainError::TimeParseError` if the string matches neither
/// format.
pub fn parse_time_of_day(s: &str) -> Result<Time, DomainError> {
    Time::parse(s, TIME_FORMAT)
        .or_else(|_| Time::parse(s, TIME_FORMAT_SHORT))
        .map_err(|e| DomainError::TimeParseError {
            time_string: s.to_string(),
            error: e.to_string(),
        })
}

/// Formats a calendar date as ISO 8601 (`YYYY-MM-DD`).
///
/// # Errors
///
/// Returns an error if formatting fails (cannot happen for valid dates,
/// but the formatter is fallible).
pub fn format_shift_date(date: Date) -> Result<String, DomainError> {
    date.format(DATE_FORMAT)
        .map_err(|e| DomainError::DateParseError {
            date_string: date.to_string(),
            error: e.to_string(),
        })
}

/// Formats a time-of-day as `HH:MM:SS`.
///
/// # Errors
///
/// Returns an error if formatting fails.
pub fn format_time_of_day(time: Time) -> Result<String, DomainError> {
    time.format(TIME_FORMAT)
        .map_err(|e| DomainError::TimeParseError {
            time_string: time.to_string(),
            error: e.to_string(),
        })
}
