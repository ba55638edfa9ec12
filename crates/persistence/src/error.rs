// Copyright (C) 2026 Shift Desk Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;

/// Errors that can occur during persistence operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PersistenceError {
    /// Database connection failed. Safe to retry.
    #[error("Database connection failed: {0}")]
    ConnectionFailed(String),
    /// Schema initialization failed.
    #[error("Schema initialization failed: {0}")]
    InitializationError(String),
    /// A database error occurred.
    #[error("Database error: {0}")]
    DatabaseError(String),
    /// The booking slot is already held by a non-cancelled booking.
    ///
    /// Raised by the partial unique index on `(shift_id, shift_date)`;
    /// this is the store-level guarantee that conflict-check-and-insert
    /// is atomic.
    #[error("Slot already booked: shift {shift_id} on {shift_date}")]
    SlotTaken {
        /// The contended shift template.
        shift_id: i64,
        /// The contended calendar date (ISO 8601).
        shift_date: String,
    },
    /// The requested row was not found.
    #[error("Not found: {0}")]
    NotFound(String),
    /// A stored row failed domain validation on the way out.
    #[error("Corrupt row: {0}")]
    CorruptRow(String),
}

impl From<diesel::result::Error> for PersistenceError {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::NotFound => Self::NotFound(String::from("Record not found")),
            _ => Self::DatabaseError(err.to_string()),
        }
    }
}

impl From<diesel::ConnectionError> for PersistenceError {
    fn from(err: diesel::ConnectionError) -> Self {
        Self::ConnectionFailed(err.to_string())
    }
}
