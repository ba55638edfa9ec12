// Copyright (C) 2026 Shift Desk Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for shift template management, booking, and
//! the dashboard counters.
//!
//! Each handler authorizes the actor first, then validates input, then
//! touches the store. Date comparisons use the explicit `today`
//! argument; handlers never consult a clock.

use tracing::{debug, info};

use shift_desk_domain::{
    Booking, BookingStatus, DomainError, ShiftTemplate, compute_duration_hours, format_shift_date,
    is_past_date, recent_window_start, validate_booking_date, validate_template_fields,
};
use shift_desk_persistence::{PersistenceError, SqliteStore};

use crate::auth::{AuthenticatedActor, AuthorizationService};
use crate::error::{ApiError, translate_domain_error};
use crate::request_response::{
    BookingInfo, BookingScope, BookingWindow, CreateBookingRequest, CreateShiftTemplateRequest,
    DashboardCountsResponse, DeleteShiftTemplateResponse, ShiftTemplateInfo, TemplateListFilter,
    UpdateShiftTemplateRequest,
};

/// Lists shift templates.
///
/// The booking view returns active templates ordered by start time and
/// is open to every authenticated actor. The management view returns
/// every template, newest first, and requires admin rights.
///
/// # Errors
///
/// Returns an error if authorization or the store query fails.
pub fn list_shift_templates(
    store: &mut SqliteStore,
    actor: &AuthenticatedActor,
    filter: TemplateListFilter,
) -> Result<Vec<ShiftTemplateInfo>, ApiError> {
    let templates: Vec<ShiftTemplate> = match filter {
        TemplateListFilter::ForBooking => store.list_shifts_for_booking()?,
        TemplateListFilter::All => {
            AuthorizationService::authorize_manage_templates(actor)?;
            store.list_shifts_all()?
        }
    };
    templates.into_iter().map(template_info).collect()
}

/// Creates a new shift template.
///
/// The duration is derived from the time range, wrapping past midnight
/// when the end time precedes the start time.
///
/// # Errors
///
/// Returns an error if the actor is not an admin, the fields fail
/// validation, or the insert fails.
pub fn create_shift_template(
    store: &mut SqliteStore,
    request: &CreateShiftTemplateRequest,
    actor: &AuthenticatedActor,
) -> Result<ShiftTemplateInfo, ApiError> {
    AuthorizationService::authorize_manage_templates(actor)?;

    let template: ShiftTemplate = ShiftTemplate::new(
        request.name.clone(),
        request.start_time,
        request.end_time,
        request.shift_type,
    )
    .map_err(translate_domain_error)?;

    let inserted: ShiftTemplate = store.insert_shift(&template)?;
    info!(actor_id = %actor.id, name = %inserted.name, "Created shift template");
    template_info(inserted)
}

/// Replaces the mutable fields of an existing shift template.
///
/// # Errors
///
/// Returns an error if the actor is not an admin, the template does not
/// exist, or the fields fail validation.
pub fn update_shift_template(
    store: &mut SqliteStore,
    shift_id: i64,
    request: &UpdateShiftTemplateRequest,
    actor: &AuthenticatedActor,
) -> Result<ShiftTemplateInfo, ApiError> {
    AuthorizationService::authorize_manage_templates(actor)?;

    let existing: ShiftTemplate = store
        .get_shift(shift_id)?
        .ok_or_else(|| template_not_found(shift_id))?;
    validate_template_fields(&request.name, request.start_time, request.end_time)
        .map_err(translate_domain_error)?;
    let duration_hours: u8 = compute_duration_hours(request.start_time, request.end_time)
        .map_err(translate_domain_error)?;

    let created_at: String = existing.created_at.ok_or_else(|| ApiError::Internal {
        message: format!("Shift template {shift_id} has no creation timestamp"),
    })?;
    let revised: ShiftTemplate = ShiftTemplate::with_id(
        shift_id,
        request.name.clone(),
        request.start_time,
        request.end_time,
        duration_hours,
        request.shift_type,
        request.is_active,
        created_at,
    );

    store
        .update_shift(&revised)
        .map_err(|e| map_not_found(e, "Shift template"))?;
    info!(actor_id = %actor.id, shift_id, "Updated shift template");
    template_info(revised)
}

/// Opens or closes a shift template for booking.
///
/// # Errors
///
/// Returns an error if the actor is not an admin or the template does
/// not exist.
pub fn set_template_active(
    store: &mut SqliteStore,
    shift_id: i64,
    active: bool,
    actor: &AuthenticatedActor,
) -> Result<(), ApiError> {
    AuthorizationService::authorize_manage_templates(actor)?;

    store
        .set_shift_active(shift_id, active)
        .map_err(|e| map_not_found(e, "Shift template"))?;
    info!(actor_id = %actor.id, shift_id, active, "Set shift template active flag");
    Ok(())
}

/// Deletes a shift template together with every booking that references
/// it.
///
/// # Errors
///
/// Returns an error if the actor is not an admin or the template does
/// not exist.
pub fn delete_shift_template(
    store: &mut SqliteStore,
    shift_id: i64,
    actor: &AuthenticatedActor,
) -> Result<DeleteShiftTemplateResponse, ApiError> {
    AuthorizationService::authorize_manage_templates(actor)?;

    let removed: usize = store
        .delete_shift_cascade(shift_id)
        .map_err(|e| map_not_found(e, "Shift template"))?;
    let removed_bookings: u64 = u64::try_from(removed).map_err(|_| ApiError::Internal {
        message: String::from("Cascade count out of range"),
    })?;
    info!(actor_id = %actor.id, shift_id, removed_bookings, "Deleted shift template");

    Ok(DeleteShiftTemplateResponse {
        shift_id,
        removed_bookings,
        message: format!(
            "Deleted shift template {shift_id} and {removed_bookings} dependent booking(s)"
        ),
    })
}

/// Books a shift slot for the calling actor.
///
/// The slot `(shift_id, shift_date)` admits at most one non-cancelled
/// booking across all users; a contended create fails with
/// `ApiError::SlotConflict` no matter how the two requests interleave.
///
/// # Errors
///
/// - `ApiError::ResourceNotFound` if the template does not exist
/// - `ApiError::InvalidInput` if the template is not open for booking
/// - `ApiError::PastShiftDate` if `shift_date` is before `today`
/// - `ApiError::SlotConflict` if the slot is already held
pub fn create_booking(
    store: &mut SqliteStore,
    request: &CreateBookingRequest,
    actor: &AuthenticatedActor,
    today: time::Date,
) -> Result<BookingInfo, ApiError> {
    let template: ShiftTemplate = store
        .get_shift(request.shift_id)?
        .ok_or_else(|| template_not_found(request.shift_id))?;
    if !template.is_active {
        return Err(ApiError::InvalidInput {
            field: String::from("shift_id"),
            message: format!(
                "Shift template {} is not open for booking",
                request.shift_id
            ),
        });
    }
    validate_booking_date(request.shift_date, today).map_err(translate_domain_error)?;

    let booking: Booking = Booking::new(actor.id.clone(), request.shift_id, request.shift_date);
    let inserted: Booking = store.insert_booking(&booking)?;
    info!(
        actor_id = %actor.id,
        shift_id = request.shift_id,
        shift_date = %request.shift_date,
        "Created booking"
    );
    booking_info(inserted)
}

/// Cancels a booking, releasing its slot while retaining the row.
///
/// Owners may cancel their own bookings; admins may cancel anyone's.
/// Cancelling an already-cancelled booking is a no-op, so a retried
/// cancel is safe.
///
/// # Errors
///
/// Returns an error if the booking does not exist, the actor is neither
/// owner nor admin, or the booking is already completed.
pub fn cancel_booking(
    store: &mut SqliteStore,
    booking_id: i64,
    actor: &AuthenticatedActor,
) -> Result<BookingInfo, ApiError> {
    let mut booking: Booking = store
        .get_booking(booking_id)?
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Booking"),
            message: format!("Booking {booking_id}"),
        })?;
    AuthorizationService::authorize_cancel_booking(actor, &booking.user_id)?;

    if !booking.status.occupies_slot() {
        debug!(actor_id = %actor.id, booking_id, "Cancel of already-cancelled booking");
        return booking_info(booking);
    }
    if !booking.status.can_transition_to(BookingStatus::Cancelled) {
        return Err(translate_domain_error(DomainError::InvalidStatusTransition {
            from: booking.status.as_str(),
            to: BookingStatus::Cancelled.as_str(),
        }));
    }

    store
        .update_booking_status(booking_id, BookingStatus::Cancelled)
        .map_err(|e| map_not_found(e, "Booking"))?;
    info!(actor_id = %actor.id, booking_id, "Cancelled booking");

    booking.status = BookingStatus::Cancelled;
    booking_info(booking)
}

/// Lists bookings for a scope, filtered by the date partition.
///
/// Own bookings are ordered by shift date ascending. The cross-user
/// report is ordered descending and requires admin rights, as does
/// reading another user's bookings.
///
/// # Errors
///
/// Returns an error if authorization or the store query fails.
pub fn list_bookings(
    store: &mut SqliteStore,
    actor: &AuthenticatedActor,
    scope: &BookingScope,
    window: BookingWindow,
    today: time::Date,
) -> Result<Vec<BookingInfo>, ApiError> {
    let rows: Vec<Booking> = match scope {
        BookingScope::Own => store.list_bookings(Some(&actor.id))?,
        BookingScope::User(user_id) => {
            if *user_id != actor.id {
                AuthorizationService::authorize_view_all_bookings(actor)?;
            }
            store.list_bookings(Some(user_id))?
        }
        BookingScope::All => {
            AuthorizationService::authorize_view_all_bookings(actor)?;
            store.list_bookings(None)?
        }
    };

    rows.into_iter()
        .filter(|booking| match window {
            BookingWindow::Upcoming => !is_past_date(booking.shift_date, today),
            BookingWindow::Past => is_past_date(booking.shift_date, today),
            BookingWindow::All => true,
        })
        .map(booking_info)
        .collect()
}

/// Returns the dashboard counters.
///
/// The recent-bookings window covers the trailing seven days up to and
/// including `today`, matching the lower bound inclusively.
///
/// # Errors
///
/// Returns an error if the actor is not an admin or a count query
/// fails.
pub fn get_dashboard_counts(
    store: &mut SqliteStore,
    actor: &AuthenticatedActor,
    today: time::Date,
) -> Result<DashboardCountsResponse, ApiError> {
    AuthorizationService::authorize_view_dashboard(actor)?;

    let window_start: time::Date = recent_window_start(today).map_err(translate_domain_error)?;
    let since: String = format_shift_date(window_start).map_err(translate_domain_error)?;

    Ok(DashboardCountsResponse {
        total_shifts: store.count_shifts()?,
        active_shifts: store.count_active_shifts()?,
        total_bookings: store.count_bookings()?,
        recent_bookings: store.count_bookings_since(&since)?,
    })
}

fn template_not_found(shift_id: i64) -> ApiError {
    ApiError::ResourceNotFound {
        resource_type: String::from("Shift template"),
        message: format!("Shift template {shift_id}"),
    }
}

fn map_not_found(error: PersistenceError, resource_type: &str) -> ApiError {
    match error {
        PersistenceError::NotFound(message) => ApiError::ResourceNotFound {
            resource_type: String::from(resource_type),
            message,
        },
        other => other.into(),
    }
}

fn template_info(template: ShiftTemplate) -> Result<ShiftTemplateInfo, ApiError> {
    let shift_id: i64 = template.shift_id.ok_or_else(|| ApiError::Internal {
        message: String::from("Shift template has no identifier"),
    })?;
    let created_at: String = template.created_at.ok_or_else(|| ApiError::Internal {
        message: format!("Shift template {shift_id} has no creation timestamp"),
    })?;
    let start_time: String = shift_desk_domain::format_time_of_day(template.start_time)
        .map_err(translate_domain_error)?;
    let end_time: String = shift_desk_domain::format_time_of_day(template.end_time)
        .map_err(translate_domain_error)?;

    Ok(ShiftTemplateInfo {
        shift_id,
        name: template.name,
        start_time,
        end_time,
        duration_hours: template.duration_hours,
        shift_type: String::from(template.shift_type.as_str()),
        is_active: template.is_active,
        created_at,
    })
}

fn booking_info(booking: Booking) -> Result<BookingInfo, ApiError> {
    let booking_id: i64 = booking.booking_id.ok_or_else(|| ApiError::Internal {
        message: String::from("Booking has no identifier"),
    })?;
    let created_at: String = booking.created_at.ok_or_else(|| ApiError::Internal {
        message: format!("Booking {booking_id} has no creation timestamp"),
    })?;
    let shift_date: String =
        format_shift_date(booking.shift_date).map_err(translate_domain_error)?;

    Ok(BookingInfo {
        booking_id,
        user_id: booking.user_id,
        shift_id: booking.shift_id,
        shift_date,
        status: String::from(booking.status.as_str()),
        created_at,
    })
}
