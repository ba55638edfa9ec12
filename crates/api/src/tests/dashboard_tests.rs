// Copyright (C) 2026 Shift Desk Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for the dashboard counters.

use time::Date;

use crate::tests::helpers::{
    create_admin, create_test_today, create_worker, setup_template, setup_test_store,
};
use crate::{
    AuthenticatedActor, CreateBookingRequest, DashboardCountsResponse, ShiftTemplateInfo,
    create_booking, get_dashboard_counts, set_template_active,
};
use shift_desk_domain::Booking;
use shift_desk_persistence::SqliteStore;

#[test]
fn test_empty_store_counts_are_zero() {
    let mut store: SqliteStore = setup_test_store();

    let counts: DashboardCountsResponse =
        get_dashboard_counts(&mut store, &create_admin(), create_test_today()).unwrap();

    assert_eq!(counts.total_shifts, 0);
    assert_eq!(counts.active_shifts, 0);
    assert_eq!(counts.total_bookings, 0);
    assert_eq!(counts.recent_bookings, 0);
}

#[test]
fn test_counts_reflect_templates_bookings_and_the_recent_window() {
    let mut store: SqliteStore = setup_test_store();
    let admin: AuthenticatedActor = create_admin();
    let today: Date = create_test_today();

    let day: ShiftTemplateInfo = setup_template(&mut store, "Day", 9, 17);
    let night: ShiftTemplateInfo = setup_template(&mut store, "Night", 22, 6);
    set_template_active(&mut store, night.shift_id, false, &admin).unwrap();

    // One booking inside the trailing 7-day window (today - 7 exactly,
    // inclusive boundary), one before it, one upcoming.
    let boundary: Date = today - time::Duration::days(7);
    let stale: Date = today - time::Duration::days(8);
    store
        .insert_booking(&Booking::new(String::from("alice"), day.shift_id, boundary))
        .unwrap();
    store
        .insert_booking(&Booking::new(String::from("alice"), day.shift_id, stale))
        .unwrap();
    create_booking(
        &mut store,
        &CreateBookingRequest {
            shift_id: day.shift_id,
            shift_date: today,
        },
        &create_worker("bob"),
        today,
    )
    .unwrap();

    let counts: DashboardCountsResponse =
        get_dashboard_counts(&mut store, &admin, today).unwrap();

    assert_eq!(counts.total_shifts, 2);
    assert_eq!(counts.active_shifts, 1);
    assert_eq!(counts.total_bookings, 3);
    // Boundary day and today count; the day before the window does not.
    assert_eq!(counts.recent_bookings, 2);
}
