use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};

use crate::{
    AppState,
    auth::AuthUser,
    error::ApiResult,
    models::{PageFilter, StatusUpdate, Vehicle, VehiclePayload},
};

/// create_vehicle
///
/// [Authenticated Route] Registers a new vehicle. The plate number is unique
/// (409 on duplicates) and lookup references are schema-validated (400 on
/// broken ones).
#[utoipa::path(
    post,
    path = "/vehicles",
    request_body = VehiclePayload,
    responses(
        (status = 201, description = "Vehicle created", body = Vehicle),
        (status = 400, description = "Broken lookup reference"),
        (status = 409, description = "Plate number already registered")
    )
)]
pub async fn create_vehicle(
    _auth: AuthUser,
    State(state): State<AppState>,
    Json(payload): Json<VehiclePayload>,
) -> ApiResult<(StatusCode, Json<Vehicle>)> {
    let vehicle = state.repo.create_vehicle(&payload).await?;
    Ok((StatusCode::CREATED, Json(vehicle)))
}

/// list_vehicles
///
/// [Authenticated Route] Vehicle listing; `search` matches the plate number.
#[utoipa::path(
    get,
    path = "/vehicles",
    params(PageFilter),
    responses((status = 200, description = "Vehicles", body = [Vehicle]))
)]
pub async fn list_vehicles(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(filter): Query<PageFilter>,
) -> ApiResult<Json<Vec<Vehicle>>> {
    let vehicles = state.repo.list_vehicles(&filter).await?;
    Ok(Json(vehicles))
}

/// get_vehicle
#[utoipa::path(
    get,
    path = "/vehicles/{id}",
    params(("id" = i32, Path, description = "Vehicle ID")),
    responses(
        (status = 200, description = "Vehicle", body = Vehicle),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_vehicle(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<Vehicle>> {
    let vehicle = state.repo.get_vehicle(id).await?;
    Ok(Json(vehicle))
}

/// update_vehicle
#[utoipa::path(
    put,
    path = "/vehicles/{id}",
    request_body = VehiclePayload,
    responses(
        (status = 200, description = "Updated", body = Vehicle),
        (status = 404, description = "Not found"),
        (status = 409, description = "Plate number already registered")
    )
)]
pub async fn update_vehicle(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<VehiclePayload>,
) -> ApiResult<Json<Vehicle>> {
    let vehicle = state.repo.update_vehicle(id, &payload).await?;
    Ok(Json(vehicle))
}

/// set_vehicle_status
///
/// [Authenticated Route] Status-only PATCH used by the quick actions on the
/// vehicle table (mark available, in maintenance, retired, ...).
#[utoipa::path(
    patch,
    path = "/vehicles/{id}/status",
    request_body = StatusUpdate,
    responses(
        (status = 204, description = "Status changed"),
        (status = 404, description = "Not found")
    )
)]
pub async fn set_vehicle_status(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<StatusUpdate>,
) -> ApiResult<StatusCode> {
    state.repo.set_vehicle_status(id, &payload.status).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// delete_vehicle
///
/// [Authenticated Route] Deletes a vehicle; dependent trips, fuel records,
/// pannes and documents are removed by the schema's cascade rules.
#[utoipa::path(
    delete,
    path = "/vehicles/{id}",
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_vehicle(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<StatusCode> {
    state.repo.delete_vehicle(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
