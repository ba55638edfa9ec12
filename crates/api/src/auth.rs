// Copyright (C) 2026 Shift Desk Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Authentication and authorization types and services.

use crate::error::AuthError;

/// Actor roles for authorization.
///
/// Roles form a strict capability ordering: every capability granted to
/// `Worker` is granted to `Admin`, and every capability granted to
/// `Admin` is granted to `SuperAdmin`. The role is resolved once by the
/// outer layer from the session identity and carried on the actor; it is
/// never re-read mid-operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Worker role: may browse active shift templates, book shifts for
    /// themselves, and view or cancel their own bookings.
    Worker,
    /// Admin role: everything a worker may do, plus shift template
    /// management, the cross-user booking report, and the dashboard.
    Admin,
    /// Super admin role: everything an admin may do, plus operations
    /// reserved for the top of the ordering.
    SuperAdmin,
}

impl Role {
    /// Parses a role from its wire representation.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is not a known role string.
    pub fn parse(value: &str) -> Result<Self, AuthError> {
        match value {
            "worker" => Ok(Self::Worker),
            "admin" => Ok(Self::Admin),
            "super_admin" => Ok(Self::SuperAdmin),
            _ => Err(AuthError::UnknownRole {
                value: String::from(value),
            }),
        }
    }

    /// Returns the wire representation of this role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Worker => "worker",
            Self::Admin => "admin",
            Self::SuperAdmin => "super_admin",
        }
    }

    /// Checks whether this role grants a capability.
    ///
    /// Pure and total: no store access, no side effects.
    #[must_use]
    pub const fn permits(self, capability: Capability) -> bool {
        match capability {
            Capability::ReadOwn | Capability::WriteOwn => true,
            Capability::AdminShifts | Capability::AdminBookings => {
                matches!(self, Self::Admin | Self::SuperAdmin)
            }
            Capability::SuperAdminAll => matches!(self, Self::SuperAdmin),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Capabilities gating the operation surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Read the caller's own bookings and the active template list.
    ReadOwn,
    /// Create or cancel the caller's own bookings.
    WriteOwn,
    /// Manage shift templates and view the dashboard.
    AdminShifts,
    /// View and cancel any user's bookings.
    AdminBookings,
    /// Reserved for the top of the role ordering.
    SuperAdminAll,
}

/// An authenticated actor with an associated role.
///
/// This is the resolved output of the external session layer. Operations
/// receive it explicitly; nothing in this crate resolves identity itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedActor {
    /// The unique identifier for this actor.
    pub id: String,
    /// The role assigned to this actor.
    pub role: Role,
}

impl AuthenticatedActor {
    /// Creates a new authenticated actor.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier for this actor
    /// * `role` - The role assigned to this actor
    #[must_use]
    pub const fn new(id: String, role: Role) -> Self {
        Self { id, role }
    }
}

/// Authorization service for enforcing role-based access control.
pub struct AuthorizationService;

impl AuthorizationService {
    fn require(
        actor: &AuthenticatedActor,
        capability: Capability,
        action: &str,
        required_role: &str,
    ) -> Result<(), AuthError> {
        if actor.role.permits(capability) {
            Ok(())
        } else {
            Err(AuthError::Unauthorized {
                action: String::from(action),
                required_role: String::from(required_role),
            })
        }
    }

    /// Checks if an actor may manage shift templates.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor lacks the `AdminShifts` capability.
    pub fn authorize_manage_templates(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::require(actor, Capability::AdminShifts, "manage_templates", "Admin")
    }

    /// Checks if an actor may view the dashboard counters.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor lacks the `AdminShifts` capability.
    pub fn authorize_view_dashboard(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::require(actor, Capability::AdminShifts, "view_dashboard", "Admin")
    }

    /// Checks if an actor may view bookings beyond their own.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor lacks the `AdminBookings`
    /// capability.
    pub fn authorize_view_all_bookings(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::require(
            actor,
            Capability::AdminBookings,
            "view_all_bookings",
            "Admin",
        )
    }

    /// Checks if an actor may cancel the booking owned by `owner_id`.
    ///
    /// Owners may always cancel their own bookings; cancelling another
    /// user's booking requires the `AdminBookings` capability.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor is neither the owner nor an admin.
    pub fn authorize_cancel_booking(
        actor: &AuthenticatedActor,
        owner_id: &str,
    ) -> Result<(), AuthError> {
        if actor.id == owner_id {
            return Ok(());
        }
        Self::require(actor, Capability::AdminBookings, "cancel_booking", "Admin")
    }
}
