// Copyright (C) 2026 Shift Desk Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Caller-facing operation surface for Shift Desk.
//!
//! Every operation takes the caller's [`AuthenticatedActor`] explicitly
//! and, where date comparison is involved, an explicit `today` supplied
//! by the adapter. There is no ambient identity and no ambient clock:
//! the outer layer resolves both and threads them in, which keeps every
//! operation deterministic and directly testable.
//!
//! Authorization is a pure capability check on the actor's role; every
//! operation enforces it before touching the store.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod auth;
mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use auth::{AuthenticatedActor, AuthorizationService, Capability, Role};
pub use error::{ApiError, AuthError, translate_domain_error};
pub use handlers::{
    cancel_booking, create_booking, create_shift_template, delete_shift_template,
    get_dashboard_counts, list_bookings, list_shift_templates, set_template_active,
    update_shift_template,
};
pub use request_response::{
    BookingInfo, BookingScope, BookingWindow, CreateBookingRequest, CreateShiftTemplateRequest,
    DashboardCountsResponse, DeleteShiftTemplateResponse, ShiftTemplateInfo, TemplateListFilter,
    UpdateShiftTemplateRequest,
};
