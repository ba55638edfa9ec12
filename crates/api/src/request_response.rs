// Copyright (C) 2026 Shift Desk Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Requests carry parsed domain values (`time::Time`, `time::Date`);
//! the adapter is responsible for parsing wire strings before building
//! a request. Responses carry formatted strings so the wire shape is
//! stable regardless of the domain representation.

use time::{Date, Time};

use shift_desk_domain::ShiftType;

/// API request to create a new shift template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateShiftTemplateRequest {
    /// The display name of the template.
    pub name: String,
    /// The daily start time.
    pub start_time: Time,
    /// The daily end time. May be earlier than the start time for
    /// shifts that wrap past midnight.
    pub end_time: Time,
    /// The shift classification.
    pub shift_type: ShiftType,
}

/// API request to replace the mutable fields of a shift template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateShiftTemplateRequest {
    /// The display name of the template.
    pub name: String,
    /// The daily start time.
    pub start_time: Time,
    /// The daily end time.
    pub end_time: Time,
    /// The shift classification.
    pub shift_type: ShiftType,
    /// Whether the template is open for booking.
    pub is_active: bool,
}

/// Which template listing a caller wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateListFilter {
    /// Active templates only, ordered by start time. The booking view.
    ForBooking,
    /// Every template, newest first. The admin management view.
    All,
}

/// A shift template as presented to callers.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ShiftTemplateInfo {
    /// The canonical template identifier.
    pub shift_id: i64,
    /// The display name.
    pub name: String,
    /// The daily start time (`HH:MM:SS`).
    pub start_time: String,
    /// The daily end time (`HH:MM:SS`).
    pub end_time: String,
    /// The derived duration in whole hours.
    pub duration_hours: u8,
    /// The shift classification.
    pub shift_type: String,
    /// Whether the template is open for booking.
    pub is_active: bool,
    /// The creation timestamp.
    pub created_at: String,
}

/// API response for a cascading template deletion.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DeleteShiftTemplateResponse {
    /// The deleted template identifier.
    pub shift_id: i64,
    /// How many dependent bookings the cascade removed.
    pub removed_bookings: u64,
    /// A success message.
    pub message: String,
}

/// API request to book a shift slot for the calling actor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateBookingRequest {
    /// The shift template to book.
    pub shift_id: i64,
    /// The calendar date to book.
    pub shift_date: Date,
}

/// Whose bookings a listing should cover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingScope {
    /// The calling actor's own bookings, ordered by date ascending.
    Own,
    /// A specific user's bookings. Requires admin rights unless the
    /// user is the caller.
    User(String),
    /// Every booking, ordered by date descending. The admin report.
    All,
}

/// Date-partition filter for booking listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingWindow {
    /// Bookings dated today or later.
    Upcoming,
    /// Bookings dated strictly before today.
    Past,
    /// No date filter.
    All,
}

/// A booking as presented to callers.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BookingInfo {
    /// The canonical booking identifier.
    pub booking_id: i64,
    /// The user holding the booking.
    pub user_id: String,
    /// The booked shift template.
    pub shift_id: i64,
    /// The booked calendar date (ISO 8601).
    pub shift_date: String,
    /// The booking status.
    pub status: String,
    /// The creation timestamp.
    pub created_at: String,
}

/// API response carrying the dashboard counters.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DashboardCountsResponse {
    /// Total number of shift templates.
    pub total_shifts: i64,
    /// Number of templates currently open for booking.
    pub active_shifts: i64,
    /// Total number of bookings ever recorded.
    pub total_bookings: i64,
    /// Bookings dated within the trailing seven days, inclusive.
    pub recent_bookings: i64,
}
