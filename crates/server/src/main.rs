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
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use time::{Date, OffsetDateTime, Time};
use tokio::sync::Mutex;
use tracing::{error, info};

use shift_desk_api::{
    ApiError, AuthenticatedActor, BookingInfo, BookingScope, BookingWindow, CreateBookingRequest,
    CreateShiftTemplateRequest, DashboardCountsResponse, DeleteShiftTemplateResponse, Role,
    ShiftTemplateInfo, TemplateListFilter, UpdateShiftTemplateRequest, cancel_booking,
    create_booking, create_shift_template, delete_shift_template, get_dashboard_counts,
    list_bookings, list_shift_templates, set_template_active, translate_domain_error,
    update_shift_template,
};
use shift_desk_domain::{ShiftType, parse_shift_date, parse_time_of_day};
use shift_desk_persistence::SqliteStore;

/// Shift Desk Server - HTTP server for the shift scheduling and booking engine
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// Application state shared across handlers.
///
/// The store is wrapped in a Mutex to allow safe concurrent access;
/// handlers hold the lock only around store calls.
#[derive(Clone)]
struct AppState {
    /// The shift and booking store.
    store: Arc<Mutex<SqliteStore>>,
}

/// Query parameters identifying the calling actor.
#[derive(Debug, Deserialize)]
struct ActorQuery {
    /// The actor ID performing this action.
    actor_id: String,
    /// The role of the actor.
    actor_role: String,
}

/// Query parameters for listing shift templates.
#[derive(Debug, Deserialize)]
struct ListShiftsQuery {
    /// The actor ID performing this action.
    actor_id: String,
    /// The role of the actor.
    actor_role: String,
    /// Whether to return only active templates. Defaults to true; the
    /// full listing requires admin rights.
    active_only: Option<bool>,
}

/// API request for creating a shift template.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct CreateShiftApiRequest {
    /// The actor ID performing this action.
    actor_id: String,
    /// The role of the actor.
    actor_role: String,
    /// The display name of the template.
    name: String,
    /// The daily start time (`HH:MM` or `HH:MM:SS`).
    start_time: String,
    /// The daily end time (`HH:MM` or `HH:MM:SS`).
    end_time: String,
    /// The shift classification.
    shift_type: String,
}

/// API request for updating a shift template.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct UpdateShiftApiRequest {
    /// The actor ID performing this action.
    actor_id: String,
    /// The role of the actor.
    actor_role: String,
    /// The display name of the template.
    name: String,
    /// The daily start time (`HH:MM` or `HH:MM:SS`).
    start_time: String,
    /// The daily end time (`HH:MM` or `HH:MM:SS`).
    end_time: String,
    /// The shift classification.
    shift_type: String,
    /// Whether the template is open for booking.
    is_active: bool,
}

/// API request for setting a template's active flag.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct SetActiveApiRequest {
    /// The actor ID performing this action.
    actor_id: String,
    /// The role of the actor.
    actor_role: String,
    /// The desired active state.
    active: bool,
}

/// API request for booking a shift slot.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct CreateBookingApiRequest {
    /// The actor ID performing this action.
    actor_id: String,
    /// The role of the actor.
    actor_role: String,
    /// The shift template to book.
    shift_id: i64,
    /// The calendar date to book (ISO 8601).
    shift_date: String,
}

/// API request for cancelling a booking.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct CancelBookingApiRequest {
    /// The actor ID performing this action.
    actor_id: String,
    /// The role of the actor.
    actor_role: String,
}

/// Query parameters for listing bookings.
#[derive(Debug, Deserialize)]
struct ListBookingsQuery {
    /// The actor ID performing this action.
    actor_id: String,
    /// The role of the actor.
    actor_role: String,
    /// A specific user's bookings. Requires admin rights unless the
    /// user is the caller.
    user_id: Option<String>,
    /// Listing scope: "own" (default) or "all" (admin report).
    scope: Option<String>,
    /// Date partition: "upcoming", "past", or "all" (default).
    window: Option<String>,
}

/// API response for write operations without a richer payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct WriteResponse {
    /// Success indicator.
    success: bool,
    /// Optional message.
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match &err {
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::PastShiftDate { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::SlotConflict { .. } => StatusCode::CONFLICT,
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Unauthorized { .. } => StatusCode::FORBIDDEN,
            ApiError::StoreUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

/// Parses a role string, rejecting unknown roles with a 400.
fn parse_role(role_str: &str) -> Result<Role, HttpError> {
    Role::parse(role_str).map_err(|_| HttpError {
        status: StatusCode::BAD_REQUEST,
        message: format!(
            "Invalid role: '{role_str}'. Must be 'worker', 'admin', or 'super_admin'"
        ),
    })
}

/// Builds the authenticated actor from the resolved identity pair.
fn resolve_actor(actor_id: &str, actor_role: &str) -> Result<AuthenticatedActor, HttpError> {
    let role: Role = parse_role(actor_role)?;
    Ok(AuthenticatedActor::new(String::from(actor_id), role))
}

fn parse_wire_time(value: &str) -> Result<Time, HttpError> {
    parse_time_of_day(value).map_err(|e| translate_domain_error(e).into())
}

fn parse_wire_date(value: &str) -> Result<Date, HttpError> {
    parse_shift_date(value).map_err(|e| translate_domain_error(e).into())
}

fn parse_wire_shift_type(value: &str) -> Result<ShiftType, HttpError> {
    ShiftType::parse(value).map_err(|e| translate_domain_error(e).into())
}

fn parse_window(value: Option<&str>) -> Result<BookingWindow, HttpError> {
    match value {
        None | Some("all") => Ok(BookingWindow::All),
        Some("upcoming") => Ok(BookingWindow::Upcoming),
        Some("past") => Ok(BookingWindow::Past),
        Some(other) => Err(HttpError {
            status: StatusCode::BAD_REQUEST,
            message: format!(
                "Invalid window: '{other}'. Must be 'upcoming', 'past', or 'all'"
            ),
        }),
    }
}

/// The server's calendar day, computed once per request.
fn current_day() -> Date {
    OffsetDateTime::now_utc().date()
}

/// Handler for GET `/shifts` endpoint.
///
/// Lists shift templates: the active-only booking view by default, or
/// the full management view for admins.
async fn handle_list_shifts(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<ListShiftsQuery>,
) -> Result<Json<Vec<ShiftTemplateInfo>>, HttpError> {
    let actor: AuthenticatedActor = resolve_actor(&query.actor_id, &query.actor_role)?;
    let filter: TemplateListFilter = if query.active_only.unwrap_or(true) {
        TemplateListFilter::ForBooking
    } else {
        TemplateListFilter::All
    };

    let mut store = app_state.store.lock().await;
    let templates: Vec<ShiftTemplateInfo> = list_shift_templates(&mut store, &actor, filter)?;
    drop(store);

    Ok(Json(templates))
}

/// Handler for POST `/shifts` endpoint.
///
/// Creates a new shift template.
async fn handle_create_shift(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateShiftApiRequest>,
) -> Result<Json<ShiftTemplateInfo>, HttpError> {
    info!(
        actor_id = %req.actor_id,
        role = %req.actor_role,
        name = %req.name,
        "Handling create_shift request"
    );

    let actor: AuthenticatedActor = resolve_actor(&req.actor_id, &req.actor_role)?;
    let request: CreateShiftTemplateRequest = CreateShiftTemplateRequest {
        name: req.name,
        start_time: parse_wire_time(&req.start_time)?,
        end_time: parse_wire_time(&req.end_time)?,
        shift_type: parse_wire_shift_type(&req.shift_type)?,
    };

    let mut store = app_state.store.lock().await;
    let created: ShiftTemplateInfo = create_shift_template(&mut store, &request, &actor)?;
    drop(store);

    Ok(Json(created))
}

/// Handler for PUT `/shifts/{id}` endpoint.
///
/// Replaces the mutable fields of a shift template.
async fn handle_update_shift(
    AxumState(app_state): AxumState<AppState>,
    Path(shift_id): Path<i64>,
    Json(req): Json<UpdateShiftApiRequest>,
) -> Result<Json<ShiftTemplateInfo>, HttpError> {
    info!(
        actor_id = %req.actor_id,
        role = %req.actor_role,
        shift_id,
        "Handling update_shift request"
    );

    let actor: AuthenticatedActor = resolve_actor(&req.actor_id, &req.actor_role)?;
    let request: UpdateShiftTemplateRequest = UpdateShiftTemplateRequest {
        name: req.name,
        start_time: parse_wire_time(&req.start_time)?,
        end_time: parse_wire_time(&req.end_time)?,
        shift_type: parse_wire_shift_type(&req.shift_type)?,
        is_active: req.is_active,
    };

    let mut store = app_state.store.lock().await;
    let updated: ShiftTemplateInfo =
        update_shift_template(&mut store, shift_id, &request, &actor)?;
    drop(store);

    Ok(Json(updated))
}

/// Handler for DELETE `/shifts/{id}` endpoint.
///
/// Deletes a shift template and cascades to its bookings.
async fn handle_delete_shift(
    AxumState(app_state): AxumState<AppState>,
    Path(shift_id): Path<i64>,
    Query(query): Query<ActorQuery>,
) -> Result<Json<DeleteShiftTemplateResponse>, HttpError> {
    info!(
        actor_id = %query.actor_id,
        role = %query.actor_role,
        shift_id,
        "Handling delete_shift request"
    );

    let actor: AuthenticatedActor = resolve_actor(&query.actor_id, &query.actor_role)?;

    let mut store = app_state.store.lock().await;
    let response: DeleteShiftTemplateResponse =
        delete_shift_template(&mut store, shift_id, &actor)?;
    drop(store);

    Ok(Json(response))
}

/// Handler for POST `/shifts/{id}/active` endpoint.
///
/// Opens or closes a shift template for booking.
async fn handle_set_shift_active(
    AxumState(app_state): AxumState<AppState>,
    Path(shift_id): Path<i64>,
    Json(req): Json<SetActiveApiRequest>,
) -> Result<Json<WriteResponse>, HttpError> {
    info!(
        actor_id = %req.actor_id,
        role = %req.actor_role,
        shift_id,
        active = req.active,
        "Handling set_shift_active request"
    );

    let actor: AuthenticatedActor = resolve_actor(&req.actor_id, &req.actor_role)?;

    let mut store = app_state.store.lock().await;
    set_template_active(&mut store, shift_id, req.active, &actor)?;
    drop(store);

    Ok(Json(WriteResponse {
        success: true,
        message: Some(format!(
            "Shift template {shift_id} is now {}",
            if req.active { "active" } else { "inactive" }
        )),
    }))
}

/// Handler for GET `/bookings` endpoint.
///
/// Lists bookings for the caller, a named user, or everyone.
async fn handle_list_bookings(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<ListBookingsQuery>,
) -> Result<Json<Vec<BookingInfo>>, HttpError> {
    let actor: AuthenticatedActor = resolve_actor(&query.actor_id, &query.actor_role)?;
    let window: BookingWindow = parse_window(query.window.as_deref())?;
    let scope: BookingScope = match (query.user_id, query.scope.as_deref()) {
        (Some(user_id), _) => BookingScope::User(user_id),
        (None, Some("all")) => BookingScope::All,
        (None, None | Some("own")) => BookingScope::Own,
        (None, Some(other)) => {
            return Err(HttpError {
                status: StatusCode::BAD_REQUEST,
                message: format!("Invalid scope: '{other}'. Must be 'own' or 'all'"),
            });
        }
    };

    let mut store = app_state.store.lock().await;
    let bookings: Vec<BookingInfo> =
        list_bookings(&mut store, &actor, &scope, window, current_day())?;
    drop(store);

    Ok(Json(bookings))
}

/// Handler for POST `/bookings` endpoint.
///
/// Books a shift slot for the calling actor.
async fn handle_create_booking(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateBookingApiRequest>,
) -> Result<Json<BookingInfo>, HttpError> {
    info!(
        actor_id = %req.actor_id,
        role = %req.actor_role,
        shift_id = req.shift_id,
        shift_date = %req.shift_date,
        "Handling create_booking request"
    );

    let actor: AuthenticatedActor = resolve_actor(&req.actor_id, &req.actor_role)?;
    let request: CreateBookingRequest = CreateBookingRequest {
        shift_id: req.shift_id,
        shift_date: parse_wire_date(&req.shift_date)?,
    };

    let mut store = app_state.store.lock().await;
    let booking: BookingInfo = create_booking(&mut store, &request, &actor, current_day())?;
    drop(store);

    Ok(Json(booking))
}

/// Handler for POST `/bookings/{id}/cancel` endpoint.
///
/// Cancels a booking, releasing its slot.
async fn handle_cancel_booking(
    AxumState(app_state): AxumState<AppState>,
    Path(booking_id): Path<i64>,
    Json(req): Json<CancelBookingApiRequest>,
) -> Result<Json<BookingInfo>, HttpError> {
    info!(
        actor_id = %req.actor_id,
        role = %req.actor_role,
        booking_id,
        "Handling cancel_booking request"
    );

    let actor: AuthenticatedActor = resolve_actor(&req.actor_id, &req.actor_role)?;

    let mut store = app_state.store.lock().await;
    let booking: BookingInfo = cancel_booking(&mut store, booking_id, &actor)?;
    drop(store);

    Ok(Json(booking))
}

/// Handler for GET `/dashboard` endpoint.
///
/// Returns the admin dashboard counters.
async fn handle_dashboard(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<ActorQuery>,
) -> Result<Json<DashboardCountsResponse>, HttpError> {
    let actor: AuthenticatedActor = resolve_actor(&query.actor_id, &query.actor_role)?;

    let mut store = app_state.store.lock().await;
    let counts: DashboardCountsResponse =
        get_dashboard_counts(&mut store, &actor, current_day())?;
    drop(store);

    Ok(Json(counts))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/shifts", get(handle_list_shifts))
        .route("/shifts", post(handle_create_shift))
        .route("/shifts/{shift_id}", put(handle_update_shift))
        .route("/shifts/{shift_id}", delete(handle_delete_shift))
        .route("/shifts/{shift_id}/active", post(handle_set_shift_active))
        .route("/bookings", get(handle_list_bookings))
        .route("/bookings", post(handle_create_booking))
        .route("/bookings/{booking_id}/cancel", post(handle_cancel_booking))
        .route("/dashboard", get(handle_dashboard))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Shift Desk Server");

    // Initialize the store (in-memory or file-based based on CLI argument)
    let store: SqliteStore = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        SqliteStore::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        SqliteStore::new_in_memory()?
    };

    let app_state: AppState = AppState {
        store: Arc::new(Mutex::new(store)),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode as HttpStatusCode},
    };
    use tower::ServiceExt;

    /// Helper to create test app state with an in-memory store.
    fn create_test_app_state() -> AppState {
        let store: SqliteStore =
            SqliteStore::new_in_memory().expect("Failed to create in-memory store");
        AppState {
            store: Arc::new(Mutex::new(store)),
        }
    }

    fn create_shift_request(actor_role: &str, name: &str) -> CreateShiftApiRequest {
        CreateShiftApiRequest {
            actor_id: String::from("admin1"),
            actor_role: String::from(actor_role),
            name: String::from(name),
            start_time: String::from("09:00"),
            end_time: String::from("17:00"),
            shift_type: String::from("morning"),
        }
    }

    async fn post_json<T: Serialize>(app: Router, uri: &str, body: &T) -> Response {
        app.oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_string(body).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap()
    }

    async fn get_uri(app: Router, uri: &str) -> Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_json<T: serde::de::DeserializeOwned>(response: Response) -> T {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    /// Creates a shift template as admin and returns its ID.
    async fn setup_shift(app: &Router, name: &str) -> i64 {
        let response: Response =
            post_json(app.clone(), "/shifts", &create_shift_request("admin", name)).await;
        assert_eq!(response.status(), HttpStatusCode::OK);
        let info: ShiftTemplateInfo = body_json(response).await;
        info.shift_id
    }

    fn booking_request(actor_id: &str, shift_id: i64, shift_date: &str) -> CreateBookingApiRequest {
        CreateBookingApiRequest {
            actor_id: String::from(actor_id),
            actor_role: String::from("worker"),
            shift_id,
            shift_date: String::from(shift_date),
        }
    }

    #[tokio::test]
    async fn test_create_shift_as_admin_succeeds() {
        let app: Router = build_router(create_test_app_state());

        let response: Response =
            post_json(app, "/shifts", &create_shift_request("admin", "Day Shift")).await;
        assert_eq!(response.status(), HttpStatusCode::OK);

        let info: ShiftTemplateInfo = body_json(response).await;
        assert_eq!(info.name, "Day Shift");
        assert_eq!(info.duration_hours, 8);
        assert!(info.is_active);
    }

    #[tokio::test]
    async fn test_create_shift_as_worker_is_forbidden() {
        let app: Router = build_router(create_test_app_state());

        let response: Response =
            post_json(app, "/shifts", &create_shift_request("worker", "Day Shift")).await;
        assert_eq!(response.status(), HttpStatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_unknown_role_is_bad_request() {
        let app: Router = build_router(create_test_app_state());

        let response: Response =
            post_json(app, "/shifts", &create_shift_request("manager", "Day Shift")).await;
        assert_eq!(response.status(), HttpStatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_invalid_time_string_is_bad_request() {
        let app: Router = build_router(create_test_app_state());

        let mut request: CreateShiftApiRequest = create_shift_request("admin", "Day Shift");
        request.start_time = String::from("quarter past nine");
        let response: Response = post_json(app, "/shifts", &request).await;
        assert_eq!(response.status(), HttpStatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_contended_slot_returns_conflict_then_cancel_frees_it() {
        let app: Router = build_router(create_test_app_state());
        let shift_id: i64 = setup_shift(&app, "Morning").await;

        let first: Response = post_json(
            app.clone(),
            "/bookings",
            &booking_request("alice", shift_id, "2999-01-01"),
        )
        .await;
        assert_eq!(first.status(), HttpStatusCode::OK);
        let booking: BookingInfo = body_json(first).await;

        let conflict: Response = post_json(
            app.clone(),
            "/bookings",
            &booking_request("bob", shift_id, "2999-01-01"),
        )
        .await;
        assert_eq!(conflict.status(), HttpStatusCode::CONFLICT);

        let cancel: Response = post_json(
            app.clone(),
            &format!("/bookings/{}/cancel", booking.booking_id),
            &CancelBookingApiRequest {
                actor_id: String::from("alice"),
                actor_role: String::from("worker"),
            },
        )
        .await;
        assert_eq!(cancel.status(), HttpStatusCode::OK);

        let retry: Response = post_json(
            app,
            "/bookings",
            &booking_request("bob", shift_id, "2999-01-01"),
        )
        .await;
        assert_eq!(retry.status(), HttpStatusCode::OK);
        let rebooked: BookingInfo = body_json(retry).await;
        assert_eq!(rebooked.user_id, "bob");
    }

    #[tokio::test]
    async fn test_past_date_booking_is_unprocessable() {
        let app: Router = build_router(create_test_app_state());
        let shift_id: i64 = setup_shift(&app, "Morning").await;

        let response: Response = post_json(
            app,
            "/bookings",
            &booking_request("alice", shift_id, "2000-01-01"),
        )
        .await;
        assert_eq!(response.status(), HttpStatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_booking_unknown_shift_is_not_found() {
        let app: Router = build_router(create_test_app_state());

        let response: Response =
            post_json(app, "/bookings", &booking_request("alice", 999, "2999-01-01")).await;
        assert_eq!(response.status(), HttpStatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_worker_cannot_cancel_anothers_booking_over_http() {
        let app: Router = build_router(create_test_app_state());
        let shift_id: i64 = setup_shift(&app, "Morning").await;

        let created: Response = post_json(
            app.clone(),
            "/bookings",
            &booking_request("alice", shift_id, "2999-01-01"),
        )
        .await;
        let booking: BookingInfo = body_json(created).await;

        let response: Response = post_json(
            app,
            &format!("/bookings/{}/cancel", booking.booking_id),
            &CancelBookingApiRequest {
                actor_id: String::from("bob"),
                actor_role: String::from("worker"),
            },
        )
        .await;
        assert_eq!(response.status(), HttpStatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_delete_shift_cascades_over_http() {
        let app: Router = build_router(create_test_app_state());
        let shift_id: i64 = setup_shift(&app, "Morning").await;

        post_json(
            app.clone(),
            "/bookings",
            &booking_request("alice", shift_id, "2999-01-01"),
        )
        .await;

        let deleted: Response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!(
                        "/shifts/{shift_id}?actor_id=admin1&actor_role=admin"
                    ))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(deleted.status(), HttpStatusCode::OK);
        let cascade: DeleteShiftTemplateResponse = body_json(deleted).await;
        assert_eq!(cascade.removed_bookings, 1);

        let bookings: Response = get_uri(
            app,
            "/bookings?actor_id=alice&actor_role=worker",
        )
        .await;
        assert_eq!(bookings.status(), HttpStatusCode::OK);
        let listed: Vec<BookingInfo> = body_json(bookings).await;
        assert!(listed.is_empty());
    }

    #[tokio::test]
    async fn test_dashboard_requires_admin_and_reports_counts() {
        let app: Router = build_router(create_test_app_state());
        let shift_id: i64 = setup_shift(&app, "Morning").await;
        post_json(
            app.clone(),
            "/bookings",
            &booking_request("alice", shift_id, "2999-01-01"),
        )
        .await;

        let forbidden: Response =
            get_uri(app.clone(), "/dashboard?actor_id=alice&actor_role=worker").await;
        assert_eq!(forbidden.status(), HttpStatusCode::FORBIDDEN);

        let response: Response =
            get_uri(app, "/dashboard?actor_id=admin1&actor_role=admin").await;
        assert_eq!(response.status(), HttpStatusCode::OK);
        let counts: DashboardCountsResponse = body_json(response).await;
        assert_eq!(counts.total_shifts, 1);
        assert_eq!(counts.active_shifts, 1);
        assert_eq!(counts.total_bookings, 1);
        // The booking is far in the future, outside the trailing window.
        assert_eq!(counts.recent_bookings, 0);
    }

    #[tokio::test]
    async fn test_worker_sees_active_templates_but_not_management_view() {
        let app: Router = build_router(create_test_app_state());
        let shift_id: i64 = setup_shift(&app, "Morning").await;

        let set_inactive: Response = post_json(
            app.clone(),
            &format!("/shifts/{shift_id}/active"),
            &SetActiveApiRequest {
                actor_id: String::from("admin1"),
                actor_role: String::from("admin"),
                active: false,
            },
        )
        .await;
        assert_eq!(set_inactive.status(), HttpStatusCode::OK);

        let booking_view: Response =
            get_uri(app.clone(), "/shifts?actor_id=alice&actor_role=worker").await;
        let visible: Vec<ShiftTemplateInfo> = body_json(booking_view).await;
        assert!(visible.is_empty());

        let management: Response = get_uri(
            app.clone(),
            "/shifts?actor_id=alice&actor_role=worker&active_only=false",
        )
        .await;
        assert_eq!(management.status(), HttpStatusCode::FORBIDDEN);

        let admin_view: Response = get_uri(
            app,
            "/shifts?actor_id=admin1&actor_role=admin&active_only=false",
        )
        .await;
        let all: Vec<ShiftTemplateInfo> = body_json(admin_view).await;
        assert_eq!(all.len(), 1);
        assert!(!all[0].is_active);
    }
}
