use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};

use crate::{
    AppState,
    auth::AuthUser,
    error::{ApiError, ApiResult},
    models::{FuelFilter, FuelPayload, FuelRecord, FuelUpdate, LookupKind},
};

fn require_positive(value: f64, name: &str) -> ApiResult<()> {
    if value <= 0.0 {
        return Err(ApiError::Validation(format!(
            "{name} must be greater than zero"
        )));
    }
    Ok(())
}

/// create_fuel
///
/// [Authenticated Route] Records a refuelling. Quantity and unit price must
/// be positive; the stored cost is computed server-side from their product.
/// The vehicle and fuel type are checked up front so missing references
/// report as 404s.
#[utoipa::path(
    post,
    path = "/fuel",
    request_body = FuelPayload,
    responses(
        (status = 201, description = "Fuel record created", body = FuelRecord),
        (status = 400, description = "Non-positive quantity or price"),
        (status = 404, description = "Vehicle or fuel type not found")
    )
)]
pub async fn create_fuel(
    _auth: AuthUser,
    State(state): State<AppState>,
    Json(payload): Json<FuelPayload>,
) -> ApiResult<(StatusCode, Json<FuelRecord>)> {
    require_positive(payload.quantity, "quantity")?;
    require_positive(payload.price_per_liter, "price_per_liter")?;

    state.repo.get_vehicle(payload.vehicle_id).await?;
    if !state
        .repo
        .lookup_exists(LookupKind::FuelType, payload.fuel_type_id)
        .await?
    {
        return Err(ApiError::NotFound(format!(
            "Fuel type with id: {} was not found",
            payload.fuel_type_id
        )));
    }

    let record = state
        .repo
        .create_fuel(
            payload.vehicle_id,
            payload.fuel_type_id,
            payload.quantity,
            payload.price_per_liter,
        )
        .await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// list_fuel
///
/// [Authenticated Route] Fuel-record listing with vehicle, fuel-type and
/// date-window filters, newest first.
#[utoipa::path(
    get,
    path = "/fuel",
    params(FuelFilter),
    responses((status = 200, description = "Fuel records", body = [FuelRecord]))
)]
pub async fn list_fuel(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(filter): Query<FuelFilter>,
) -> ApiResult<Json<Vec<FuelRecord>>> {
    let records = state.repo.list_fuel(&filter).await?;
    Ok(Json(records))
}

/// get_fuel
#[utoipa::path(
    get,
    path = "/fuel/{id}",
    params(("id" = i32, Path, description = "Fuel record ID")),
    responses(
        (status = 200, description = "Fuel record", body = FuelRecord),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_fuel(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<FuelRecord>> {
    let record = state.repo.get_fuel(id).await?;
    Ok(Json(record))
}

/// update_fuel
///
/// [Authenticated Route] Partial update. Changed quantity or unit price must
/// stay positive; the stored cost is recomputed from the effective pair.
#[utoipa::path(
    put,
    path = "/fuel/{id}",
    request_body = FuelUpdate,
    responses(
        (status = 200, description = "Updated", body = FuelRecord),
        (status = 400, description = "Non-positive quantity or price"),
        (status = 404, description = "Record, vehicle or fuel type not found")
    )
)]
pub async fn update_fuel(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<FuelUpdate>,
) -> ApiResult<Json<FuelRecord>> {
    if let Some(quantity) = payload.quantity {
        require_positive(quantity, "quantity")?;
    }
    if let Some(price) = payload.price_per_liter {
        require_positive(price, "price_per_liter")?;
    }
    if let Some(vehicle_id) = payload.vehicle_id {
        state.repo.get_vehicle(vehicle_id).await?;
    }
    if let Some(fuel_type_id) = payload.fuel_type_id {
        if !state
            .repo
            .lookup_exists(LookupKind::FuelType, fuel_type_id)
            .await?
        {
            return Err(ApiError::NotFound(format!(
                "Fuel type with id: {fuel_type_id} was not found"
            )));
        }
    }

    let record = state.repo.update_fuel(id, &payload).await?;
    Ok(Json(record))
}

/// delete_fuel
#[utoipa::path(
    delete,
    path = "/fuel/{id}",
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_fuel(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<StatusCode> {
    state.repo.delete_fuel(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
