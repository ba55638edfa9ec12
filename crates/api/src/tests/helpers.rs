// Copyright (C) 2026 Shift Desk Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shared helpers for API tests.

use time::{Date, Month, Time};

use crate::{
    AuthenticatedActor, CreateShiftTemplateRequest, Role, ShiftTemplateInfo,
    create_shift_template,
};
use shift_desk_domain::ShiftType;
use shift_desk_persistence::SqliteStore;

pub fn setup_test_store() -> SqliteStore {
    SqliteStore::new_in_memory().expect("Failed to create test store")
}

pub fn create_worker(id: &str) -> AuthenticatedActor {
    AuthenticatedActor::new(String::from(id), Role::Worker)
}

pub fn create_admin() -> AuthenticatedActor {
    AuthenticatedActor::new(String::from("admin-1"), Role::Admin)
}

pub fn create_super_admin() -> AuthenticatedActor {
    AuthenticatedActor::new(String::from("root-1"), Role::SuperAdmin)
}

/// Returns June 10, 2024 as the fixed reference day for date-partition
/// tests.
pub fn create_test_today() -> Date {
    Date::from_calendar_date(2024, Month::June, 10).expect("Valid test date")
}

pub fn template_request(name: &str, start_hour: u8, end_hour: u8) -> CreateShiftTemplateRequest {
    CreateShiftTemplateRequest {
        name: String::from(name),
        start_time: Time::from_hms(start_hour, 0, 0).expect("Valid start time"),
        end_time: Time::from_hms(end_hour, 0, 0).expect("Valid end time"),
        shift_type: ShiftType::Morning,
    }
}

/// Creates a template through the API as an admin and returns it.
pub fn setup_template(
    store: &mut SqliteStore,
    name: &str,
    start_hour: u8,
    end_hour: u8,
) -> ShiftTemplateInfo {
    let admin: AuthenticatedActor = create_admin();
    create_shift_template(store, &template_request(name, start_hour, end_hour), &admin)
        .expect("Failed to create test template")
}
