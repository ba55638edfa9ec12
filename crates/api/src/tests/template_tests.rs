// Copyright (C) 2026 Shift Desk Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for shift template management operations.

use time::Time;

use crate::tests::helpers::{
    create_admin, create_test_today, create_worker, setup_template, setup_test_store,
    template_request,
};
use crate::{
    ApiError, AuthenticatedActor, BookingScope, BookingWindow, CreateBookingRequest,
    CreateShiftTemplateRequest, ShiftTemplateInfo, TemplateListFilter, UpdateShiftTemplateRequest,
    create_booking, create_shift_template, delete_shift_template, list_bookings,
    list_shift_templates, set_template_active, update_shift_template,
};
use shift_desk_domain::ShiftType;
use shift_desk_persistence::SqliteStore;

#[test]
fn test_create_template_derives_duration() {
    let mut store: SqliteStore = setup_test_store();
    let admin: AuthenticatedActor = create_admin();

    let created: ShiftTemplateInfo =
        create_shift_template(&mut store, &template_request("Night", 22, 6), &admin).unwrap();

    assert_eq!(created.duration_hours, 8);
    assert_eq!(created.start_time, "22:00:00");
    assert_eq!(created.end_time, "06:00:00");
    assert!(created.is_active);
}

#[test]
fn test_create_template_rejects_blank_name() {
    let mut store: SqliteStore = setup_test_store();
    let admin: AuthenticatedActor = create_admin();

    let request = CreateShiftTemplateRequest {
        name: String::from("   "),
        start_time: Time::from_hms(9, 0, 0).unwrap(),
        end_time: Time::from_hms(17, 0, 0).unwrap(),
        shift_type: ShiftType::Morning,
    };
    let result = create_shift_template(&mut store, &request, &admin);
    assert!(matches!(result, Err(ApiError::InvalidInput { ref field, .. }) if field == "name"));
}

#[test]
fn test_create_template_rejects_equal_times() {
    let mut store: SqliteStore = setup_test_store();
    let admin: AuthenticatedActor = create_admin();

    let result = create_shift_template(&mut store, &template_request("Zero", 9, 9), &admin);
    assert!(
        matches!(result, Err(ApiError::InvalidInput { ref field, .. }) if field == "end_time")
    );
}

#[test]
fn test_update_template_recomputes_duration() {
    let mut store: SqliteStore = setup_test_store();
    let template: ShiftTemplateInfo = setup_template(&mut store, "Day", 9, 17);
    let admin: AuthenticatedActor = create_admin();

    let request = UpdateShiftTemplateRequest {
        name: String::from("Long Day"),
        start_time: Time::from_hms(8, 0, 0).unwrap(),
        end_time: Time::from_hms(20, 30, 0).unwrap(),
        shift_type: ShiftType::Custom,
        is_active: false,
    };
    let updated: ShiftTemplateInfo =
        update_shift_template(&mut store, template.shift_id, &request, &admin).unwrap();

    assert_eq!(updated.name, "Long Day");
    // 12.5 hours rounds to the nearest whole hour.
    assert_eq!(updated.duration_hours, 13);
    assert_eq!(updated.shift_type, "custom");
    assert!(!updated.is_active);
    assert_eq!(updated.created_at, template.created_at);
}

#[test]
fn test_update_missing_template_is_not_found() {
    let mut store: SqliteStore = setup_test_store();
    let admin: AuthenticatedActor = create_admin();

    let request = UpdateShiftTemplateRequest {
        name: String::from("Ghost"),
        start_time: Time::from_hms(9, 0, 0).unwrap(),
        end_time: Time::from_hms(17, 0, 0).unwrap(),
        shift_type: ShiftType::Morning,
        is_active: true,
    };
    let result = update_shift_template(&mut store, 999, &request, &admin);
    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
}

#[test]
fn test_deactivated_template_leaves_booking_view() {
    let mut store: SqliteStore = setup_test_store();
    let template: ShiftTemplateInfo = setup_template(&mut store, "Day", 9, 17);
    let admin: AuthenticatedActor = create_admin();
    let worker: AuthenticatedActor = create_worker("alice");

    set_template_active(&mut store, template.shift_id, false, &admin).unwrap();

    let booking_view =
        list_shift_templates(&mut store, &worker, TemplateListFilter::ForBooking).unwrap();
    assert!(booking_view.is_empty());

    let admin_view = list_shift_templates(&mut store, &admin, TemplateListFilter::All).unwrap();
    assert_eq!(admin_view.len(), 1);
    assert!(!admin_view[0].is_active);
}

#[test]
fn test_delete_template_cascades_to_bookings() {
    let mut store: SqliteStore = setup_test_store();
    let template: ShiftTemplateInfo = setup_template(&mut store, "Day", 9, 17);
    let admin: AuthenticatedActor = create_admin();
    let worker: AuthenticatedActor = create_worker("alice");
    let today: time::Date = create_test_today();

    create_booking(
        &mut store,
        &CreateBookingRequest {
            shift_id: template.shift_id,
            shift_date: today,
        },
        &worker,
        today,
    )
    .unwrap();

    let response = delete_shift_template(&mut store, template.shift_id, &admin).unwrap();
    assert_eq!(response.removed_bookings, 1);

    // Neither the template nor the cascaded booking is listed anymore.
    let templates = list_shift_templates(&mut store, &admin, TemplateListFilter::All).unwrap();
    assert!(templates.is_empty());
    let bookings = list_bookings(
        &mut store,
        &worker,
        &BookingScope::Own,
        BookingWindow::All,
        today,
    )
    .unwrap();
    assert!(bookings.is_empty());
}

#[test]
fn test_delete_missing_template_is_not_found() {
    let mut store: SqliteStore = setup_test_store();
    let admin: AuthenticatedActor = create_admin();

    let result = delete_shift_template(&mut store, 999, &admin);
    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
}
