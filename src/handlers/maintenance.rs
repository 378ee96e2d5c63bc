use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};

use crate::{
    AppState,
    auth::AuthUser,
    error::ApiResult,
    models::{Maintenance, MaintenancePayload, PageFilter},
};

/// create_maintenance
///
/// [Authenticated Route] Logs a maintenance entry for a vehicle. The vehicle
/// must exist; category and garage are optional and schema-validated.
#[utoipa::path(
    post,
    path = "/maintenance",
    request_body = MaintenancePayload,
    responses(
        (status = 201, description = "Maintenance logged", body = Maintenance),
        (status = 400, description = "Broken category or garage reference"),
        (status = 404, description = "Vehicle not found")
    )
)]
pub async fn create_maintenance(
    _auth: AuthUser,
    State(state): State<AppState>,
    Json(payload): Json<MaintenancePayload>,
) -> ApiResult<(StatusCode, Json<Maintenance>)> {
    state.repo.get_vehicle(payload.vehicle_id).await?;
    let maintenance = state.repo.create_maintenance(&payload).await?;
    Ok((StatusCode::CREATED, Json(maintenance)))
}

/// list_maintenance
///
/// [Authenticated Route] Maintenance listing, newest first. `search` covers
/// the receipt, the vehicle plate, the category and the garage name.
#[utoipa::path(
    get,
    path = "/maintenance",
    params(PageFilter),
    responses((status = 200, description = "Maintenance logs", body = [Maintenance]))
)]
pub async fn list_maintenance(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(filter): Query<PageFilter>,
) -> ApiResult<Json<Vec<Maintenance>>> {
    let logs = state.repo.list_maintenance(&filter).await?;
    Ok(Json(logs))
}

/// get_maintenance
#[utoipa::path(
    get,
    path = "/maintenance/{id}",
    params(("id" = i32, Path, description = "Maintenance log ID")),
    responses(
        (status = 200, description = "Maintenance log", body = Maintenance),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_maintenance(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<Maintenance>> {
    let maintenance = state.repo.get_maintenance(id).await?;
    Ok(Json(maintenance))
}

/// update_maintenance
#[utoipa::path(
    put,
    path = "/maintenance/{id}",
    request_body = MaintenancePayload,
    responses(
        (status = 200, description = "Updated", body = Maintenance),
        (status = 404, description = "Log or vehicle not found")
    )
)]
pub async fn update_maintenance(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<MaintenancePayload>,
) -> ApiResult<Json<Maintenance>> {
    state.repo.get_vehicle(payload.vehicle_id).await?;
    let maintenance = state.repo.update_maintenance(id, &payload).await?;
    Ok(Json(maintenance))
}

/// delete_maintenance
#[utoipa::path(
    delete,
    path = "/maintenance/{id}",
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_maintenance(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<StatusCode> {
    state.repo.delete_maintenance(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
