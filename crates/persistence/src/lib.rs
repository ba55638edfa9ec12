// Copyright (C) 2026 Shift Desk Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for Shift Desk.
//!
//! This crate provides the transactional store for shift templates and
//! bookings. It is built on Diesel with the `SQLite` backend.
//!
//! ## Concurrency contract
//!
//! The booking slot `(shift_id, shift_date)` is the contended resource.
//! `insert_booking` is an atomic conditional insert: a partial unique
//! index over non-cancelled bookings rejects a second insert for a live
//! slot at the database level, so two interleaved requests can never both
//! succeed. Template deletion cascades to dependent bookings inside a
//! single immediate transaction, so a concurrent booking either fully
//! precedes the cascade or fails after it.
//!
//! ## Testing
//!
//! In-memory databases receive unique names from an atomic counter, which
//! gives deterministic test isolation with no time-based collisions.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::result::DatabaseErrorKind;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, info};

use shift_desk_domain::{Booking, BookingStatus, ShiftTemplate, format_shift_date};

mod error;
mod models;
mod schema;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;
pub use models::{BookingRow, ShiftRow};

use models::{NewBookingRow, NewShiftRow, ShiftChangeset};

/// Atomic counter for generating unique in-memory database names.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Schema applied at store construction.
///
/// The partial unique index `idx_bookings_active_slot` is the enforcement
/// point for the one-active-booking-per-slot invariant: it covers every
/// non-cancelled status, so cancelling a booking releases its slot.
const SCHEMA_SQL: &str = "
    PRAGMA foreign_keys = ON;

    CREATE TABLE IF NOT EXISTS shifts (
        shift_id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        start_time TEXT NOT NULL,
        end_time TEXT NOT NULL,
        duration_hours INTEGER NOT NULL,
        shift_type TEXT NOT NULL
            CHECK(shift_type IN ('morning', 'afternoon', 'evening', 'night', 'custom')),
        is_active INTEGER NOT NULL DEFAULT 1 CHECK(is_active IN (0, 1)),
        created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
    );

    CREATE TABLE IF NOT EXISTS bookings (
        booking_id INTEGER PRIMARY KEY AUTOINCREMENT,
        user_id TEXT NOT NULL,
        shift_id INTEGER NOT NULL,
        shift_date TEXT NOT NULL,
        status TEXT NOT NULL DEFAULT 'booked'
            CHECK(status IN ('booked', 'confirmed', 'cancelled', 'completed')),
        created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
        FOREIGN KEY(shift_id) REFERENCES shifts(shift_id)
    );

    CREATE UNIQUE INDEX IF NOT EXISTS idx_bookings_active_slot
        ON bookings(shift_id, shift_date)
        WHERE status != 'cancelled';

    CREATE INDEX IF NOT EXISTS idx_bookings_user
        ON bookings(user_id);
";

/// `SQLite`-backed store for shift templates and bookings.
pub struct SqliteStore {
    conn: SqliteConnection,
}

impl SqliteStore {
    /// Creates a store backed by a unique in-memory database.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or schema setup fails.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let url: String = format!("file:shift_desk_mem_{id}?mode=memory&cache=shared");
        Self::establish(&url)
    }

    /// Creates a store backed by a database file.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or schema setup fails.
    pub fn new_with_file(path: &str) -> Result<Self, PersistenceError> {
        Self::establish(path)
    }

    fn establish(url: &str) -> Result<Self, PersistenceError> {
        let mut conn: SqliteConnection = SqliteConnection::establish(url)?;
        conn.batch_execute(SCHEMA_SQL)
            .map_err(|e| PersistenceError::InitializationError(e.to_string()))?;
        info!(database = %url, "Initialized shift store");
        Ok(Self { conn })
    }

    // ---- Shift templates ----

    /// Inserts a new shift template and returns it with its assigned
    /// identifier and creation timestamp.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_shift(
        &mut self,
        template: &ShiftTemplate,
    ) -> Result<ShiftTemplate, PersistenceError> {
        use schema::shifts;

        let row = NewShiftRow {
            name: &template.name,
            start_time: format_time(template.start_time)?,
            end_time: format_time(template.end_time)?,
            duration_hours: i32::from(template.duration_hours),
            shift_type: template.shift_type.as_str(),
            is_active: i32::from(template.is_active),
        };

        let inserted: ShiftRow = diesel::insert_into(shifts::table)
            .values(&row)
            .get_result(&mut self.conn)?;
        debug!(shift_id = inserted.shift_id, name = %inserted.name, "Inserted shift template");

        inserted.into_template()
    }

    /// Fetches a shift template by identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_shift(&mut self, shift_id: i64) -> Result<Option<ShiftTemplate>, PersistenceError> {
        use schema::shifts;

        let row: Option<ShiftRow> = shifts::table
            .find(shift_id)
            .first(&mut self.conn)
            .optional()?;
        row.map(ShiftRow::into_template).transpose()
    }

    /// Replaces the mutable fields of an existing shift template.
    ///
    /// `created_at` is immutable and never written after insert.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::NotFound` if the template does not
    /// exist.
    pub fn update_shift(&mut self, template: &ShiftTemplate) -> Result<(), PersistenceError> {
        use schema::shifts;

        let shift_id: i64 = template.shift_id.ok_or_else(|| {
            PersistenceError::DatabaseError(String::from("Cannot update an unpersisted template"))
        })?;

        let changes = ShiftChangeset {
            name: &template.name,
            start_time: format_time(template.start_time)?,
            end_time: format_time(template.end_time)?,
            duration_hours: i32::from(template.duration_hours),
            shift_type: template.shift_type.as_str(),
            is_active: i32::from(template.is_active),
        };

        let updated: usize = diesel::update(shifts::table.find(shift_id))
            .set(&changes)
            .execute(&mut self.conn)?;
        if updated == 0 {
            return Err(PersistenceError::NotFound(format!(
                "Shift template {shift_id}"
            )));
        }
        debug!(shift_id, "Updated shift template");
        Ok(())
    }

    /// Flips the active flag of a shift template.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::NotFound` if the template does not
    /// exist.
    pub fn set_shift_active(
        &mut self,
        shift_id: i64,
        active: bool,
    ) -> Result<(), PersistenceError> {
        use schema::shifts;

        let updated: usize = diesel::update(shifts::table.find(shift_id))
            .set(shifts::is_active.eq(i32::from(active)))
            .execute(&mut self.conn)?;
        if updated == 0 {
            return Err(PersistenceError::NotFound(format!(
                "Shift template {shift_id}"
            )));
        }
        debug!(shift_id, active, "Set shift template active flag");
        Ok(())
    }

    /// Deletes a shift template and every booking referencing it, as one
    /// atomic unit.
    ///
    /// Returns the number of cascaded bookings.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::NotFound` if the template does not
    /// exist; in that case nothing is deleted.
    pub fn delete_shift_cascade(&mut self, shift_id: i64) -> Result<usize, PersistenceError> {
        use schema::{bookings, shifts};

        let removed_bookings: usize =
            self.conn
                .immediate_transaction(|conn| -> Result<usize, PersistenceError> {
                    let removed_bookings: usize =
                        diesel::delete(bookings::table.filter(bookings::shift_id.eq(shift_id)))
                            .execute(conn)?;
                    let removed_shifts: usize = diesel::delete(shifts::table.find(shift_id))
                        .execute(conn)?;
                    if removed_shifts == 0 {
                        // Roll the cascade back: the template never existed.
                        return Err(PersistenceError::NotFound(format!(
                            "Shift template {shift_id}"
                        )));
                    }
                    Ok(removed_bookings)
                })?;

        info!(shift_id, removed_bookings, "Deleted shift template with cascade");
        Ok(removed_bookings)
    }

    /// Lists active shift templates ordered by start time, for booking
    /// views.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_shifts_for_booking(&mut self) -> Result<Vec<ShiftTemplate>, PersistenceError> {
        use schema::shifts;

        let rows: Vec<ShiftRow> = shifts::table
            .filter(shifts::is_active.eq(1))
            .order(shifts::start_time.asc())
            .load(&mut self.conn)?;
        rows.into_iter().map(ShiftRow::into_template).collect()
    }

    /// Lists all shift templates in reverse creation order, for admin
    /// management views.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_shifts_all(&mut self) -> Result<Vec<ShiftTemplate>, PersistenceError> {
        use schema::shifts;

        let rows: Vec<ShiftRow> = shifts::table
            .order((shifts::created_at.desc(), shifts::shift_id.desc()))
            .load(&mut self.conn)?;
        rows.into_iter().map(ShiftRow::into_template).collect()
    }

    // ---- Bookings ----

    /// Inserts a booking as an atomic conditional insert.
    ///
    /// The existence check and the insert are a single unit: the partial
    /// unique index on `(shift_id, shift_date)` rejects the insert if a
    /// non-cancelled booking already holds the slot, regardless of which
    /// user holds it.
    ///
    /// # Errors
    ///
    /// - `PersistenceError::SlotTaken` if the slot is already booked
    /// - `PersistenceError::NotFound` if the shift template does not
    ///   exist (foreign key violation)
    pub fn insert_booking(&mut self, booking: &Booking) -> Result<Booking, PersistenceError> {
        use schema::bookings;

        let shift_date: String = format_shift_date(booking.shift_date)
            .map_err(|e| PersistenceError::CorruptRow(e.to_string()))?;
        let row = NewBookingRow {
            user_id: &booking.user_id,
            shift_id: booking.shift_id,
            shift_date: shift_date.clone(),
            status: booking.status.as_str(),
        };

        let inserted: BookingRow = diesel::insert_into(bookings::table)
            .values(&row)
            .get_result(&mut self.conn)
            .map_err(|e| match e {
                diesel::result::Error::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                    PersistenceError::SlotTaken {
                        shift_id: booking.shift_id,
                        shift_date: shift_date.clone(),
                    }
                }
                diesel::result::Error::DatabaseError(
                    DatabaseErrorKind::ForeignKeyViolation,
                    _,
                ) => PersistenceError::NotFound(format!("Shift template {}", booking.shift_id)),
                other => other.into(),
            })?;
        debug!(
            booking_id = inserted.booking_id,
            user_id = %inserted.user_id,
            shift_id = inserted.shift_id,
            shift_date = %inserted.shift_date,
            "Inserted booking"
        );

        inserted.into_booking()
    }

    /// Fetches a booking by identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_booking(&mut self, booking_id: i64) -> Result<Option<Booking>, PersistenceError> {
        use schema::bookings;

        let row: Option<BookingRow> = bookings::table
            .find(booking_id)
            .first(&mut self.conn)
            .optional()?;
        row.map(BookingRow::into_booking).transpose()
    }

    /// Updates a booking's status.
    ///
    /// The caller is responsible for checking the status transition is
    /// valid; the store records what it is told.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::NotFound` if the booking does not
    /// exist.
    pub fn update_booking_status(
        &mut self,
        booking_id: i64,
        status: BookingStatus,
    ) -> Result<(), PersistenceError> {
        use schema::bookings;

        let updated: usize = diesel::update(bookings::table.find(booking_id))
            .set(bookings::status.eq(status.as_str()))
            .execute(&mut self.conn)?;
        if updated == 0 {
            return Err(PersistenceError::NotFound(format!("Booking {booking_id}")));
        }
        debug!(booking_id, status = %status, "Updated booking status");
        Ok(())
    }

    /// Lists bookings, optionally scoped to one user.
    ///
    /// Scoped listings (worker views) are ordered by shift date
    /// ascending; unscoped listings (admin reports) by shift date
    /// descending.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_bookings(
        &mut self,
        user_id: Option<&str>,
    ) -> Result<Vec<Booking>, PersistenceError> {
        use schema::bookings;

        let rows: Vec<BookingRow> = match user_id {
            Some(user) => bookings::table
                .filter(bookings::user_id.eq(user))
                .order(bookings::shift_date.asc())
                .load(&mut self.conn)?,
            None => bookings::table
                .order(bookings::shift_date.desc())
                .load(&mut self.conn)?,
        };
        rows.into_iter().map(BookingRow::into_booking).collect()
    }

    // ---- Dashboard counters ----

    /// Counts all shift templates.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_shifts(&mut self) -> Result<i64, PersistenceError> {
        use schema::shifts;
        Ok(shifts::table.count().get_result(&mut self.conn)?)
    }

    /// Counts active shift templates.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_active_shifts(&mut self) -> Result<i64, PersistenceError> {
        use schema::shifts;
        Ok(shifts::table
            .filter(shifts::is_active.eq(1))
            .count()
            .get_result(&mut self.conn)?)
    }

    /// Counts all bookings.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_bookings(&mut self) -> Result<i64, PersistenceError> {
        use schema::bookings;
        Ok(bookings::table.count().get_result(&mut self.conn)?)
    }

    /// Counts bookings whose shift date falls on or after `since`
    /// (ISO 8601 date). Lexicographic comparison is correct for ISO
    /// dates.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_bookings_since(&mut self, since: &str) -> Result<i64, PersistenceError> {
        use schema::bookings;
        Ok(bookings::table
            .filter(bookings::shift_date.ge(since))
            .count()
            .get_result(&mut self.conn)?)
    }
}

/// Formats a time-of-day for storage.
fn format_time(time: time::Time) -> Result<String, PersistenceError> {
    shift_desk_domain::format_time_of_day(time)
        .map_err(|e| PersistenceError::CorruptRow(e.to_string()))
}
