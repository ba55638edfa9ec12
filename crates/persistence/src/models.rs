// Copyright (C) 2026 Shift Desk Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use shift_desk_domain::{
    Booking, BookingStatus, ShiftTemplate, ShiftType, parse_shift_date, parse_time_of_day,
};

use crate::error::PersistenceError;

/// Row model for the `shifts` table.
#[derive(Debug, Clone, Queryable)]
pub struct ShiftRow {
    pub shift_id: i64,
    pub name: String,
    pub start_time: String,
    pub end_time: String,
    pub duration_hours: i32,
    pub shift_type: String,
    pub is_active: i32,
    pub created_at: String,
}

impl ShiftRow {
    /// Converts this row into a domain `ShiftTemplate`.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::CorruptRow` if stored times, type, or
    /// duration fail domain parsing.
    pub fn into_template(self) -> Result<ShiftTemplate, PersistenceError> {
        let start_time = parse_time_of_day(&self.start_time)
            .map_err(|e| PersistenceError::CorruptRow(e.to_string()))?;
        let end_time = parse_time_of_day(&self.end_time)
            .map_err(|e| PersistenceError::CorruptRow(e.to_string()))?;
        let shift_type = ShiftType::parse(&self.shift_type)
            .map_err(|e| PersistenceError::CorruptRow(e.to_string()))?;
        let duration_hours: u8 = u8::try_from(self.duration_hours).map_err(|_| {
            PersistenceError::CorruptRow(format!(
                "Duration out of range: {}",
                self.duration_hours
            ))
        })?;

        Ok(ShiftTemplate::with_id(
            self.shift_id,
            self.name,
            start_time,
            end_time,
            duration_hours,
            shift_type,
            self.is_active != 0,
            self.created_at,
        ))
    }
}

/// Insertable row for a new shift template.
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::shifts)]
pub struct NewShiftRow<'a> {
    pub name: &'a str,
    pub start_time: String,
    pub end_time: String,
    pub duration_hours: i32,
    pub shift_type: &'a str,
    pub is_active: i32,
}

/// Changeset for updating an existing shift template.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = crate::schema::shifts)]
pub struct ShiftChangeset<'a> {
    pub name: &'a str,
    pub start_time: String,
    pub end_time: String,
    pub duration_hours: i32,
    pub shift_type: &'a str,
    pub is_active: i32,
}

/// Row model for the `bookings` table.
#[derive(Debug, Clone, Queryable)]
pub struct BookingRow {
    pub booking_id: i64,
    pub user_id: String,
    pub shift_id: i64,
    pub shift_date: String,
    pub status: String,
    pub created_at: String,
}

impl BookingRow {
    /// Converts this row into a domain `Booking`.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::CorruptRow` if the stored date or
    /// status fails domain parsing.
    pub fn into_booking(self) -> Result<Booking, PersistenceError> {
        let shift_date = parse_shift_date(&self.shift_date)
            .map_err(|e| PersistenceError::CorruptRow(e.to_string()))?;
        let status = BookingStatus::parse(&self.status)
            .map_err(|e| PersistenceError::CorruptRow(e.to_string()))?;

        Ok(Booking::with_id(
            self.booking_id,
            self.user_id,
            self.shift_id,
            shift_date,
            status,
            self.created_at,
        ))
    }
}

/// Insertable row for a new booking.
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::bookings)]
pub struct NewBookingRow<'a> {
    pub user_id: &'a str,
    pub shift_id: i64,
    pub shift_date: String,
    pub status: &'a str,
}
