// Copyright (C) 2026 Shift Desk Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod error;
mod schedule;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use schedule::{
    compute_duration_hours, format_shift_date, format_time_of_day, is_past_date,
    parse_shift_date, parse_time_of_day, recent_window_start,
};
pub use types::{Booking, BookingStatus, ShiftTemplate, ShiftType};
pub use validation::{validate_booking_date, validate_template_fields};
