use axum::{
    Router,
    extract::{FromRef, Request},
    http::HeaderName,
    middleware::{self, Next},
    response::Response,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::{DefaultOnResponse, TraceLayer},
};
use tracing::{Level, Span};

// --- Module Structure ---

// Core application services and components.
pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;

// Module for routing segregation (Public, Authenticated).
pub mod routes;
use auth::AuthUser;
use routes::{authenticated, public};

// --- Public Re-exports ---

// Makes core state types easily accessible to the main application entry point (main.rs).
pub use config::AppConfig;
pub use error::{ApiError, ApiResult};
pub use repository::{PostgresRepository, RepositoryState};

/// ApiDoc
///
/// Auto-generates the OpenAPI documentation (Swagger JSON) for the
/// application by aggregating every handler decorated with `#[utoipa::path]`
/// and every schema deriving `utoipa::ToSchema`. The resulting JSON is served
/// at `/api-docs/openapi.json`.
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::auth::login,
        handlers::users::register_user, handlers::users::get_me, handlers::users::list_users,
        handlers::users::get_user, handlers::users::update_user, handlers::users::delete_user,
        handlers::drivers::create_driver, handlers::drivers::list_drivers,
        handlers::drivers::get_driver, handlers::drivers::update_driver,
        handlers::drivers::delete_driver,
        handlers::vehicles::create_vehicle, handlers::vehicles::list_vehicles,
        handlers::vehicles::get_vehicle, handlers::vehicles::update_vehicle,
        handlers::vehicles::set_vehicle_status, handlers::vehicles::delete_vehicle,
        handlers::trips::create_trip, handlers::trips::list_trips, handlers::trips::get_trip,
        handlers::trips::update_trip, handlers::trips::set_trip_status,
        handlers::trips::delete_trip,
        handlers::fuel::create_fuel, handlers::fuel::list_fuel, handlers::fuel::get_fuel,
        handlers::fuel::update_fuel, handlers::fuel::delete_fuel,
        handlers::maintenance::create_maintenance, handlers::maintenance::list_maintenance,
        handlers::maintenance::get_maintenance, handlers::maintenance::update_maintenance,
        handlers::maintenance::delete_maintenance,
        handlers::incidents::create_panne, handlers::incidents::list_pannes,
        handlers::incidents::get_panne, handlers::incidents::update_panne,
        handlers::incidents::delete_panne,
        handlers::incidents::create_reparation, handlers::incidents::list_reparations,
        handlers::incidents::get_reparation, handlers::incidents::update_reparation,
        handlers::incidents::delete_reparation,
        handlers::documents::list_document_categories,
        handlers::documents::create_document_category,
        handlers::documents::update_document_category,
        handlers::documents::delete_document_category,
        handlers::documents::create_document, handlers::documents::list_documents,
        handlers::documents::list_expiring_documents, handlers::documents::get_document,
        handlers::documents::update_document, handlers::documents::delete_document,
        handlers::lookups::list_lookup, handlers::lookups::create_lookup,
        handlers::lookups::get_lookup, handlers::lookups::update_lookup,
        handlers::lookups::delete_lookup,
        handlers::analytics::expense_summary, handlers::analytics::detailed_expense_records,
        handlers::analytics::dashboard,
    ),
    components(
        schemas(
            models::UserAccount, models::CreateUserRequest, models::UpdateUserRequest,
            models::LoginForm, models::Token,
            models::Driver, models::DriverPayload,
            models::Vehicle, models::VehiclePayload, models::StatusUpdate,
            models::Trip, models::TripPayload,
            models::FuelRecord, models::FuelPayload, models::FuelUpdate,
            models::Maintenance, models::MaintenancePayload,
            models::Panne, models::PannePayload, models::PanneUpdate,
            models::Reparation, models::ReparationPayload, models::ReparationUpdate,
            models::DocumentCategory, models::DocumentCategoryPayload,
            models::VehicleDocument, models::VehicleDocumentPayload,
            models::LookupItem, models::LookupPayload,
            models::ExpenseSummary, models::MonthlyExpense, models::DetailedReport,
            models::FuelRecordDetail, models::ReparationRecordDetail,
            models::MaintenanceRecordDetail, models::PurchaseRecordDetail,
            models::DashboardCounts, models::VehicleStatusCount,
        )
    ),
    tags(
        (name = "fleetdash", description = "Fleet management administration API")
    )
)]
struct ApiDoc;

/// AppState
///
/// The single, thread-safe, immutable container holding all application
/// services and configuration, shared across every incoming request.
#[derive(Clone)]
pub struct AppState {
    /// Repository Layer: Abstracts database access via the PgPool connection.
    pub repo: RepositoryState,
    /// Configuration: The loaded, immutable environment configuration.
    pub config: AppConfig,
}

// --- Axum FromRef Extractor Implementations ---

// These allow handlers and extractors to pull individual components from the
// shared AppState.

impl FromRef<AppState> for RepositoryState {
    fn from_ref(app_state: &AppState) -> RepositoryState {
        app_state.repo.clone()
    }
}

impl FromRef<AppState> for AppConfig {
    fn from_ref(app_state: &AppState) -> AppConfig {
        app_state.config.clone()
    }
}

/// auth_middleware
///
/// Enforces authentication for the `authenticated_routes`.
///
/// *Mechanism*: It attempts to extract `AuthUser` from the request. Since
/// `AuthUser` implements `FromRequestParts`, a failed extraction (missing or
/// invalid token, deleted account, non-active status) rejects the request
/// with the extractor's error before any handler runs.
async fn auth_middleware(_auth_user: AuthUser, request: Request, next: Next) -> Response {
    next.run(request).await
}

/// create_router
///
/// Assembles the application's entire routing structure, applies global and
/// scoped middleware, and registers the application state.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_methods(Any)
        .allow_origin(Any)
        .allow_headers(Any);

    // Header name constant for request correlation.
    let x_request_id = HeaderName::from_static("x-request-id");

    let base_router = Router::new()
        // Documentation: serve the auto-generated Swagger UI.
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Public routes: no middleware applied.
        .merge(public::public_routes())
        // Authenticated routes: protected by the auth middleware, so the
        // whole administrative API sits behind a validated session.
        .merge(
            authenticated::authenticated_routes()
                .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware)),
        )
        .with_state(state);

    // Observability and correlation layers, applied outermost.
    base_router
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(x_request_id.clone(), MakeRequestUuid))
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(trace_span_logger)
                        .on_response(
                            DefaultOnResponse::new()
                                .level(Level::INFO)
                                .latency_unit(tower_http::LatencyUnit::Millis),
                        ),
                )
                .layer(PropagateRequestIdLayer::new(x_request_id)),
        )
        .layer(cors)
}

/// trace_span_logger
///
/// Customizes the span created by `TraceLayer`: the generated `x-request-id`
/// header is attached alongside the HTTP method and URI so every log line
/// for a single request shares one correlation ID.
fn trace_span_logger(request: &axum::http::Request<axum::body::Body>) -> Span {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown");

    tracing::info_span!(
        "http_request",
        method = ?request.method(),
        uri = ?request.uri(),
        req_id = %request_id,
    )
}
