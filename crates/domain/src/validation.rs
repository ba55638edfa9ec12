// Copyright (C) 2026 Shift Desk Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::schedule::is_past_date;
use time::{Date, Time};

/// Validates a shift template's field constraints.
///
/// This function checks the shape of the fields; it does NOT check
/// uniqueness or existence (those require store context).
///
/// # Errors
///
/// Returns an error if:
/// - The name is empty or whitespace-only
/// - The start and end times are equal
pub fn validate_template_fields(
    name: &str,
    start_time: Time,
    end_time: Time,
) -> Result<(), DomainError> {
    // Rule: name must not be empty
    if name.trim().is_empty() {
        return Err(DomainError::InvalidName(String::from(
            "Shift name cannot be empty",
        )));
    }

    // Rule: the time window must be non-degenerate
    if start_time == end_time {
        return Err(DomainError::InvalidTimeRange(String::from(
            "Start and end time must differ",
        )));
    }

    Ok(())
}

/// Validates that a booking date is not in the past.
///
/// Bookings may be made for today or any later date. This function is
/// pure: `today` is supplied by the caller, never read from a clock.
///
/// # Errors
///
/// Returns `DomainError::PastShiftDate` if `shift_date` is strictly
/// before `today`.
pub fn validate_booking_date(shift_date: Date, today: Date) -> Result<(), DomainError> {
    if is_past_date(shift_date, today) {
        return Err(DomainError::PastShiftDate { shift_date, today });
    }
    Ok(())
}
