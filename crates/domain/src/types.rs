// Copyright (C) 2026 Shift Desk Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::schedule::compute_duration_hours;
use crate::validation::validate_template_fields;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::{Date, Time};

/// Represents the descriptive classification of a shift template.
///
/// The type is a display tag, not a scheduling constraint: a `Morning`
/// shift may start at any time the administrator chooses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ShiftType {
    /// Morning shift.
    #[default]
    Morning,
    /// Afternoon shift.
    Afternoon,
    /// Evening shift.
    Evening,
    /// Night shift.
    Night,
    /// Custom shift outside the standard day parts.
    Custom,
}

impl ShiftType {
    /// Parses a shift type from its wire string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not match a valid shift type.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "morning" => Ok(Self::Morning),
            "afternoon" => Ok(Self::Afternoon),
            "evening" => Ok(Self::Evening),
            "night" => Ok(Self::Night),
            "custom" => Ok(Self::Custom),
            _ => Err(DomainError::InvalidShiftType(format!(
                "Unknown shift type: {s}"
            ))),
        }
    }

    /// Returns the string representation of this shift type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Afternoon => "afternoon",
            Self::Evening => "evening",
            Self::Night => "night",
            Self::Custom => "custom",
        }
    }
}

impl FromStr for ShiftType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for ShiftType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Represents the lifecycle status of a booking.
///
/// `Cancelled` and `Completed` are terminal. `Completed` is driven by the
/// shift date passing, never by an interactive caller action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    /// Initial status after a successful booking.
    #[default]
    Booked,
    /// Booking confirmed by an administrator.
    Confirmed,
    /// Booking cancelled by the owner or an administrator.
    Cancelled,
    /// The shift date has passed.
    Completed,
}

impl BookingStatus {
    /// Parses a booking status from its wire string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not match a valid status.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "booked" => Ok(Self::Booked),
            "confirmed" => Ok(Self::Confirmed),
            "cancelled" => Ok(Self::Cancelled),
            "completed" => Ok(Self::Completed),
            _ => Err(DomainError::InvalidStatus(format!(
                "Unknown booking status: {s}"
            ))),
        }
    }

    /// Returns the string representation of this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Booked => "booked",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
            Self::Completed => "completed",
        }
    }

    /// Checks if a transition from this status to another is valid.
    ///
    /// Valid transitions are:
    /// - Booked → Confirmed
    /// - Booked → Cancelled
    /// - Booked → Completed
    /// - Confirmed → Cancelled
    /// - Confirmed → Completed
    ///
    /// There is no transition out of `Cancelled` or `Completed`.
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Booked, Self::Confirmed)
                | (Self::Booked | Self::Confirmed, Self::Cancelled | Self::Completed)
        )
    }

    /// Returns whether this booking still occupies its slot.
    ///
    /// Cancelled bookings release the `(shift, date)` slot; every other
    /// status holds it.
    #[must_use]
    pub const fn occupies_slot(&self) -> bool {
        !matches!(self, Self::Cancelled)
    }
}

impl FromStr for BookingStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Represents a reusable definition of a work slot's time window.
///
/// A template is independent of any calendar date; workers book it on
/// specific dates. `duration_hours` is always derived from the start and
/// end times, never supplied by a caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftTemplate {
    /// Canonical identifier assigned by the store.
    /// `None` indicates the template has not been persisted yet.
    pub shift_id: Option<i64>,
    /// Display label (non-empty).
    pub name: String,
    /// Time-of-day the shift starts.
    pub start_time: Time,
    /// Time-of-day the shift ends. May be earlier than `start_time`,
    /// in which case the shift crosses midnight.
    pub end_time: Time,
    /// Derived whole-hour duration.
    pub duration_hours: u8,
    /// Descriptive classification.
    pub shift_type: ShiftType,
    /// Whether the template is open for booking. Inactive templates are
    /// retained for bookings that already reference them.
    pub is_active: bool,
    /// Creation timestamp (ISO 8601), assigned by the store.
    pub created_at: Option<String>,
}

impl ShiftTemplate {
    /// Creates a new `ShiftTemplate` without a persisted identifier.
    ///
    /// Validates the fields and computes `duration_hours` from the time
    /// window. New templates are active.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty or the start and end times
    /// are equal.
    pub fn new(
        name: String,
        start_time: Time,
        end_time: Time,
        shift_type: ShiftType,
    ) -> Result<Self, DomainError> {
        validate_template_fields(&name, start_time, end_time)?;
        let duration_hours: u8 = compute_duration_hours(start_time, end_time)?;
        Ok(Self {
            shift_id: None,
            name,
            start_time,
            end_time,
            duration_hours,
            shift_type,
            is_active: true,
            created_at: None,
        })
    }

    /// Creates a `ShiftTemplate` with an existing identifier (from the
    /// store).
    #[must_use]
    pub const fn with_id(
        shift_id: i64,
        name: String,
        start_time: Time,
        end_time: Time,
        duration_hours: u8,
        shift_type: ShiftType,
        is_active: bool,
        created_at: String,
    ) -> Self {
        Self {
            shift_id: Some(shift_id),
            name,
            start_time,
            end_time,
            duration_hours,
            shift_type,
            is_active,
            created_at: Some(created_at),
        }
    }
}

/// Represents the assignment of one identity to one shift template on one
/// calendar date.
///
/// The pair `(shift_id, shift_date)` is the slot a booking occupies; at
/// most one non-cancelled booking may hold a slot at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    /// Canonical identifier assigned by the store.
    /// `None` indicates the booking has not been persisted yet.
    pub booking_id: Option<i64>,
    /// The owning identity.
    pub user_id: String,
    /// The shift template this booking references.
    pub shift_id: i64,
    /// The calendar date the shift instance occurs on.
    pub shift_date: Date,
    /// Lifecycle status.
    pub status: BookingStatus,
    /// Creation timestamp (ISO 8601), assigned by the store.
    pub created_at: Option<String>,
}

impl Booking {
    /// Creates a new `Booking` in the `Booked` status, without a
    /// persisted identifier.
    #[must_use]
    pub const fn new(user_id: String, shift_id: i64, shift_date: Date) -> Self {
        Self {
            booking_id: None,
            user_id,
            shift_id,
            shift_date,
            status: BookingStatus::Booked,
            created_at: None,
        }
    }

    /// Creates a `Booking` with an existing identifier (from the store).
    #[must_use]
    pub const fn with_id(
        booking_id: i64,
        user_id: String,
        shift_id: i64,
        shift_date: Date,
        status: BookingStatus,
        created_at: String,
    ) -> Self {
        Self {
            booking_id: Some(booking_id),
            user_id,
            shift_id,
            shift_date,
            status,
            created_at: Some(created_at),
        }
    }
}
