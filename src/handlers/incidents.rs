use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};

use crate::{
    AppState,
    auth::AuthUser,
    error::{ApiError, ApiResult},
    models::{
        LookupKind, Panne, PanneFilter, PannePayload, PanneUpdate, Reparation, ReparationFilter,
        ReparationPayload, ReparationUpdate,
    },
};

async fn require_panne_category(state: &AppState, id: i32) -> ApiResult<()> {
    if !state.repo.lookup_exists(LookupKind::CategoryPanne, id).await? {
        return Err(ApiError::NotFound(format!(
            "Panne category with id: {id} was not found"
        )));
    }
    Ok(())
}

async fn require_garage(state: &AppState, id: i32) -> ApiResult<()> {
    if !state.repo.lookup_exists(LookupKind::Garage, id).await? {
        return Err(ApiError::NotFound(format!(
            "Garage with id: {id} was not found"
        )));
    }
    Ok(())
}

/// create_panne
///
/// [Authenticated Route] Reports a vehicle breakdown. Vehicle and category
/// references are checked up front.
#[utoipa::path(
    post,
    path = "/pannes",
    request_body = PannePayload,
    responses(
        (status = 201, description = "Panne reported", body = Panne),
        (status = 404, description = "Vehicle or category not found")
    )
)]
pub async fn create_panne(
    _auth: AuthUser,
    State(state): State<AppState>,
    Json(payload): Json<PannePayload>,
) -> ApiResult<(StatusCode, Json<Panne>)> {
    state.repo.get_vehicle(payload.vehicle_id).await?;
    require_panne_category(&state, payload.category_panne_id).await?;
    let panne = state.repo.create_panne(&payload).await?;
    Ok((StatusCode::CREATED, Json(panne)))
}

/// list_pannes
///
/// [Authenticated Route] Panne listing, most recent first. `search` also
/// covers the vehicle plate and the category name.
#[utoipa::path(
    get,
    path = "/pannes",
    params(PanneFilter),
    responses((status = 200, description = "Pannes", body = [Panne]))
)]
pub async fn list_pannes(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(filter): Query<PanneFilter>,
) -> ApiResult<Json<Vec<Panne>>> {
    let pannes = state.repo.list_pannes(&filter).await?;
    Ok(Json(pannes))
}

/// get_panne
#[utoipa::path(
    get,
    path = "/pannes/{id}",
    params(("id" = i32, Path, description = "Panne ID")),
    responses(
        (status = 200, description = "Panne", body = Panne),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_panne(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<Panne>> {
    let panne = state.repo.get_panne(id).await?;
    Ok(Json(panne))
}

/// update_panne
///
/// [Authenticated Route] Partial update; changed references are re-checked.
#[utoipa::path(
    put,
    path = "/pannes/{id}",
    request_body = PanneUpdate,
    responses(
        (status = 200, description = "Updated", body = Panne),
        (status = 404, description = "Panne, vehicle or category not found")
    )
)]
pub async fn update_panne(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<PanneUpdate>,
) -> ApiResult<Json<Panne>> {
    if let Some(vehicle_id) = payload.vehicle_id {
        state.repo.get_vehicle(vehicle_id).await?;
    }
    if let Some(category_id) = payload.category_panne_id {
        require_panne_category(&state, category_id).await?;
    }
    let panne = state.repo.update_panne(id, &payload).await?;
    Ok(Json(panne))
}

/// delete_panne
///
/// [Authenticated Route] Deletes a panne; its reparations cascade.
#[utoipa::path(
    delete,
    path = "/pannes/{id}",
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_panne(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<StatusCode> {
    state.repo.delete_panne(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// create_reparation
///
/// [Authenticated Route] Records a repair against an existing panne,
/// performed by an existing garage.
#[utoipa::path(
    post,
    path = "/reparations",
    request_body = ReparationPayload,
    responses(
        (status = 201, description = "Reparation recorded", body = Reparation),
        (status = 404, description = "Panne or garage not found")
    )
)]
pub async fn create_reparation(
    _auth: AuthUser,
    State(state): State<AppState>,
    Json(payload): Json<ReparationPayload>,
) -> ApiResult<(StatusCode, Json<Reparation>)> {
    state.repo.get_panne(payload.panne_id).await?;
    require_garage(&state, payload.garage_id).await?;
    let reparation = state.repo.create_reparation(&payload).await?;
    Ok((StatusCode::CREATED, Json(reparation)))
}

/// list_reparations
///
/// [Authenticated Route] Reparation listing with panne, garage, status and
/// date-window filters. `search` covers the receipt, the panne description
/// and the garage name.
#[utoipa::path(
    get,
    path = "/reparations",
    params(ReparationFilter),
    responses((status = 200, description = "Reparations", body = [Reparation]))
)]
pub async fn list_reparations(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(filter): Query<ReparationFilter>,
) -> ApiResult<Json<Vec<Reparation>>> {
    let reparations = state.repo.list_reparations(&filter).await?;
    Ok(Json(reparations))
}

/// get_reparation
#[utoipa::path(
    get,
    path = "/reparations/{id}",
    params(("id" = i32, Path, description = "Reparation ID")),
    responses(
        (status = 200, description = "Reparation", body = Reparation),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_reparation(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<Reparation>> {
    let reparation = state.repo.get_reparation(id).await?;
    Ok(Json(reparation))
}

/// update_reparation
#[utoipa::path(
    put,
    path = "/reparations/{id}",
    request_body = ReparationUpdate,
    responses(
        (status = 200, description = "Updated", body = Reparation),
        (status = 404, description = "Reparation, panne or garage not found")
    )
)]
pub async fn update_reparation(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<ReparationUpdate>,
) -> ApiResult<Json<Reparation>> {
    if let Some(panne_id) = payload.panne_id {
        state.repo.get_panne(panne_id).await?;
    }
    if let Some(garage_id) = payload.garage_id {
        require_garage(&state, garage_id).await?;
    }
    let reparation = state.repo.update_reparation(id, &payload).await?;
    Ok(Json(reparation))
}

/// delete_reparation
#[utoipa::path(
    delete,
    path = "/reparations/{id}",
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_reparation(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<StatusCode> {
    state.repo.delete_reparation(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
