use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};

use crate::{
    AppState,
    auth::AuthUser,
    error::{ApiError, ApiResult},
    models::{StatusUpdate, Trip, TripFilter, TripPayload, trip_status},
};

fn require_known_status(status: &str) -> ApiResult<()> {
    if trip_status::is_known(status) {
        return Ok(());
    }
    Err(ApiError::Validation(format!(
        "Invalid trip status '{status}'. Must be one of: planned, ongoing, completed, cancelled"
    )))
}

/// create_trip
///
/// [Authenticated Route] Assigns a vehicle and a driver to a trip. Both
/// references are checked up front so a missing one reports as a 404 naming
/// the record instead of a bare constraint error.
#[utoipa::path(
    post,
    path = "/trips",
    request_body = TripPayload,
    responses(
        (status = 201, description = "Trip created", body = Trip),
        (status = 400, description = "Unknown trip status"),
        (status = 404, description = "Vehicle or driver not found")
    )
)]
pub async fn create_trip(
    _auth: AuthUser,
    State(state): State<AppState>,
    Json(payload): Json<TripPayload>,
) -> ApiResult<(StatusCode, Json<Trip>)> {
    if let Some(status) = payload.status.as_deref() {
        require_known_status(status)?;
    }
    state.repo.get_vehicle(payload.vehicle_id).await?;
    state.repo.get_driver(payload.driver_id).await?;
    let trip = state.repo.create_trip(&payload).await?;
    Ok((StatusCode::CREATED, Json(trip)))
}

/// list_trips
///
/// [Authenticated Route] Trip listing with vehicle, driver and status
/// filters, most recent first.
#[utoipa::path(
    get,
    path = "/trips",
    params(TripFilter),
    responses((status = 200, description = "Trips", body = [Trip]))
)]
pub async fn list_trips(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(filter): Query<TripFilter>,
) -> ApiResult<Json<Vec<Trip>>> {
    let trips = state.repo.list_trips(&filter).await?;
    Ok(Json(trips))
}

/// get_trip
#[utoipa::path(
    get,
    path = "/trips/{id}",
    params(("id" = i32, Path, description = "Trip ID")),
    responses(
        (status = 200, description = "Trip", body = Trip),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_trip(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<Trip>> {
    let trip = state.repo.get_trip(id).await?;
    Ok(Json(trip))
}

/// update_trip
#[utoipa::path(
    put,
    path = "/trips/{id}",
    request_body = TripPayload,
    responses(
        (status = 200, description = "Updated", body = Trip),
        (status = 400, description = "Unknown trip status"),
        (status = 404, description = "Trip, vehicle or driver not found")
    )
)]
pub async fn update_trip(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<TripPayload>,
) -> ApiResult<Json<Trip>> {
    if let Some(status) = payload.status.as_deref() {
        require_known_status(status)?;
    }
    state.repo.get_vehicle(payload.vehicle_id).await?;
    state.repo.get_driver(payload.driver_id).await?;
    let trip = state.repo.update_trip(id, &payload).await?;
    Ok(Json(trip))
}

/// set_trip_status
///
/// [Authenticated Route] Status-only PATCH driving the planned/ongoing/
/// completed/cancelled lifecycle.
#[utoipa::path(
    patch,
    path = "/trips/{id}/status",
    request_body = StatusUpdate,
    responses(
        (status = 204, description = "Status changed"),
        (status = 400, description = "Unknown trip status"),
        (status = 404, description = "Not found")
    )
)]
pub async fn set_trip_status(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<StatusUpdate>,
) -> ApiResult<StatusCode> {
    require_known_status(&payload.status)?;
    state.repo.set_trip_status(id, &payload.status).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// delete_trip
#[utoipa::path(
    delete,
    path = "/trips/{id}",
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_trip(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<StatusCode> {
    state.repo.delete_trip(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
