// Copyright (C) 2026 Shift Desk Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::Date;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Template name is empty or invalid.
    InvalidName(String),
    /// Start and end time do not form a valid shift window.
    InvalidTimeRange(String),
    /// Shift type string is not recognized.
    InvalidShiftType(String),
    /// Booking status string is not recognized.
    InvalidStatus(String),
    /// A booking status transition is not permitted.
    InvalidStatusTransition {
        /// The current status.
        from: &'static str,
        /// The requested status.
        to: &'static str,
    },
    /// The booking date is in the past.
    PastShiftDate {
        /// The rejected shift date.
        shift_date: Date,
        /// The current date the check was made against.
        today: Date,
    },
    /// Failed to parse a date from a string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// Failed to parse a time-of-day from a string.
    TimeParseError {
        /// The invalid time string.
        time_string: String,
        /// The parsing error message.
        error: String,
    },
    /// Date arithmetic overflow.
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidName(msg) => write!(f, "Invalid name: {msg}"),
            Self::InvalidTimeRange(msg) => write!(f, "Invalid time range: {msg}"),
            Self::InvalidShiftType(msg) => write!(f, "Invalid shift type: {msg}"),
            Self::InvalidStatus(msg) => write!(f, "Invalid booking status: {msg}"),
            Self::InvalidStatusTransition { from, to } => {
                write!(f, "Invalid booking status transition: {from} -> {to}")
            }
            Self::PastShiftDate { shift_date, today } => {
                write!(
                    f,
                    "Shift date {shift_date} is in the past (today is {today})"
                )
            }
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::TimeParseError { time_string, error } => {
                write!(f, "Failed to parse time '{time_string}': {error}")
            }
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow while {operation}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
