// Copyright (C) 2026 Shift Desk Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use shift_desk_domain::DomainError;
use shift_desk_persistence::PersistenceError;

/// Authentication and authorization errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The supplied role string is not a known role.
    UnknownRole {
        /// The unrecognized role value.
        value: String,
    },
    /// Authorization failed.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownRole { value } => {
                write!(f, "Unknown role: '{value}'")
            }
            Self::Unauthorized {
                action,
                required_role,
            } => {
                write!(f, "Unauthorized: '{action}' requires {required_role} role")
            }
        }
    }
}

impl std::error::Error for AuthError {}

/// API-level errors.
///
/// These are distinct from domain and persistence errors and represent
/// the API contract. `StoreUnavailable` is the only variant a caller
/// should retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// The requested shift date is in the past.
    PastShiftDate {
        /// A human-readable description of the rejection.
        message: String,
    },
    /// The booking slot is already held by a non-cancelled booking.
    SlotConflict {
        /// The contended shift template.
        shift_id: i64,
        /// The contended calendar date (ISO 8601).
        shift_date: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// Authorization failed - the actor does not have permission.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
    /// The store is temporarily unavailable. Safe to retry.
    StoreUnavailable {
        /// A description of the failure.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for '{field}': {message}")
            }
            Self::PastShiftDate { message } => {
                write!(f, "Past shift date: {message}")
            }
            Self::SlotConflict {
                shift_id,
                shift_date,
            } => {
                write!(f, "Slot already booked: shift {shift_id} on {shift_date}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Unauthorized {
                action,
                required_role,
            } => {
                write!(f, "Unauthorized: '{action}' requires {required_role} role")
            }
            Self::StoreUnavailable { message } => {
                write!(f, "Store unavailable: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into the API error contract.
#[must_use]
pub fn translate_domain_error(error: DomainError) -> ApiError {
    match error {
        DomainError::InvalidName(message) => ApiError::InvalidInput {
            field: String::from("name"),
            message,
        },
        DomainError::InvalidTimeRange(message) => ApiError::InvalidInput {
            field: String::from("end_time"),
            message,
        },
        DomainError::InvalidShiftType(message) => ApiError::InvalidInput {
            field: String::from("shift_type"),
            message,
        },
        DomainError::InvalidStatus(message) => ApiError::InvalidInput {
            field: String::from("status"),
            message,
        },
        DomainError::InvalidStatusTransition { from, to } => ApiError::InvalidInput {
            field: String::from("status"),
            message: format!("Cannot transition a booking from '{from}' to '{to}'"),
        },
        DomainError::PastShiftDate { shift_date, today } => ApiError::PastShiftDate {
            message: format!("Shift date {shift_date} is before today ({today})"),
        },
        DomainError::DateParseError { date_string, error } => ApiError::InvalidInput {
            field: String::from("shift_date"),
            message: format!("Cannot parse date '{date_string}': {error}"),
        },
        DomainError::TimeParseError { time_string, error } => ApiError::InvalidInput {
            field: String::from("time"),
            message: format!("Cannot parse time '{time_string}': {error}"),
        },
        DomainError::DateArithmeticOverflow { operation } => ApiError::Internal {
            message: format!("Date arithmetic overflow during {operation}"),
        },
    }
}

impl From<PersistenceError> for ApiError {
    fn from(error: PersistenceError) -> Self {
        match error {
            PersistenceError::ConnectionFailed(message) => Self::StoreUnavailable { message },
            PersistenceError::SlotTaken {
                shift_id,
                shift_date,
            } => Self::SlotConflict {
                shift_id,
                shift_date,
            },
            PersistenceError::NotFound(message) => Self::ResourceNotFound {
                resource_type: String::from("Record"),
                message,
            },
            PersistenceError::InitializationError(message)
            | PersistenceError::DatabaseError(message)
            | PersistenceError::CorruptRow(message) => Self::Internal { message },
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(error: AuthError) -> Self {
        match error {
            AuthError::UnknownRole { value } => Self::InvalidInput {
                field: String::from("actor_role"),
                message: format!("Unknown role: '{value}'"),
            },
            AuthError::Unauthorized {
                action,
                required_role,
            } => Self::Unauthorized {
                action,
                required_role,
            },
        }
    }
}
