use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};

use crate::{
    AppState,
    auth::AuthUser,
    error::ApiResult,
    models::{Driver, DriverPayload, PageFilter},
};

/// create_driver
///
/// [Authenticated Route] Registers a new driver. CNI number, email and
/// matricule uniqueness violations surface as 409s.
#[utoipa::path(
    post,
    path = "/drivers",
    request_body = DriverPayload,
    responses(
        (status = 201, description = "Driver created", body = Driver),
        (status = 409, description = "Duplicate CNI, email or matricule")
    )
)]
pub async fn create_driver(
    _auth: AuthUser,
    State(state): State<AppState>,
    Json(payload): Json<DriverPayload>,
) -> ApiResult<(StatusCode, Json<Driver>)> {
    let driver = state.repo.create_driver(&payload).await?;
    Ok((StatusCode::CREATED, Json(driver)))
}

/// list_drivers
///
/// [Authenticated Route] Driver listing. `search` matches names (including
/// the concatenated full name), CNI number, email and matricule.
#[utoipa::path(
    get,
    path = "/drivers",
    params(PageFilter),
    responses((status = 200, description = "Drivers", body = [Driver]))
)]
pub async fn list_drivers(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(filter): Query<PageFilter>,
) -> ApiResult<Json<Vec<Driver>>> {
    let drivers = state.repo.list_drivers(&filter).await?;
    Ok(Json(drivers))
}

/// get_driver
#[utoipa::path(
    get,
    path = "/drivers/{id}",
    params(("id" = i32, Path, description = "Driver ID")),
    responses(
        (status = 200, description = "Driver", body = Driver),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_driver(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<Driver>> {
    let driver = state.repo.get_driver(id).await?;
    Ok(Json(driver))
}

/// update_driver
#[utoipa::path(
    put,
    path = "/drivers/{id}",
    request_body = DriverPayload,
    responses(
        (status = 200, description = "Updated", body = Driver),
        (status = 404, description = "Not found"),
        (status = 409, description = "Duplicate CNI, email or matricule")
    )
)]
pub async fn update_driver(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<DriverPayload>,
) -> ApiResult<Json<Driver>> {
    let driver = state.repo.update_driver(id, &payload).await?;
    Ok(Json(driver))
}

/// delete_driver
#[utoipa::path(
    delete,
    path = "/drivers/{id}",
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_driver(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<StatusCode> {
    state.repo.delete_driver(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
