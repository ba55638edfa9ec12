// Copyright (C) 2026 Shift Desk Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test module for the persistence crate.

#![allow(clippy::expect_used, clippy::unwrap_used)]


use time::{Date, Month, Time};

use crate::SqliteStore;
use shift_desk_domain::{Booking, ShiftTemplate, ShiftType};

pub fn create_test_store() -> SqliteStore {
    SqliteStore::new_in_memory().expect("In-memory store")
}

pub fn create_test_template(name: &str, start_hour: u8, end_hour: u8) -> ShiftTemplate {
    let start: Time = Time::from_hms(start_hour, 0, 0).expect("Valid start time");
    let end: Time = Time::from_hms(end_hour, 0, 0).expect("Valid end time");
    ShiftTemplate::new(String::from(name), start, end, ShiftType::Morning)
        .expect("Valid test template")
}

/// Returns June 15, 2024 as a stable test shift date.
pub fn create_test_date() -> Date {
    Date::from_calendar_date(2024, Month::June, 15).expect("Valid test date")
}

pub fn create_test_booking(user_id: &str, shift_id: i64, shift_date: Date) -> Booking {
    Booking::new(String::from(user_id), shift_id, shift_date)
}
