use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};

use crate::{
    AppState,
    auth::AuthUser,
    error::{ApiError, ApiResult},
    models::{LookupItem, LookupKind, LookupPayload, PageFilter},
};

fn resolve_kind(slug: &str) -> ApiResult<LookupKind> {
    LookupKind::from_slug(slug)
        .ok_or_else(|| ApiError::NotFound(format!("Unknown lookup table: {slug}")))
}

/// list_lookup
///
/// [Authenticated Route] Rows of one reference table, addressed by its URL
/// slug (vehicle-types, vehicle-makes, vehicle-models, vehicle-transmissions,
/// fuel-types, garages, maintenance-categories, panne-categories).
#[utoipa::path(
    get,
    path = "/lookups/{kind}",
    params(
        ("kind" = String, Path, description = "Lookup table slug"),
        PageFilter
    ),
    responses(
        (status = 200, description = "Lookup rows", body = [LookupItem]),
        (status = 404, description = "Unknown lookup table")
    )
)]
pub async fn list_lookup(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Query(filter): Query<PageFilter>,
) -> ApiResult<Json<Vec<LookupItem>>> {
    let kind = resolve_kind(&kind)?;
    let items = state.repo.list_lookup(kind, &filter).await?;
    Ok(Json(items))
}

/// create_lookup
#[utoipa::path(
    post,
    path = "/lookups/{kind}",
    request_body = LookupPayload,
    responses(
        (status = 201, description = "Row created", body = LookupItem),
        (status = 404, description = "Unknown lookup table"),
        (status = 409, description = "Label already exists")
    )
)]
pub async fn create_lookup(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Json(payload): Json<LookupPayload>,
) -> ApiResult<(StatusCode, Json<LookupItem>)> {
    let kind = resolve_kind(&kind)?;
    let item = state.repo.create_lookup(kind, &payload).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// get_lookup
#[utoipa::path(
    get,
    path = "/lookups/{kind}/{id}",
    params(
        ("kind" = String, Path, description = "Lookup table slug"),
        ("id" = i32, Path, description = "Row ID")
    ),
    responses(
        (status = 200, description = "Lookup row", body = LookupItem),
        (status = 404, description = "Unknown table or missing row")
    )
)]
pub async fn get_lookup(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path((kind, id)): Path<(String, i32)>,
) -> ApiResult<Json<LookupItem>> {
    let kind = resolve_kind(&kind)?;
    let item = state.repo.get_lookup(kind, id).await?;
    Ok(Json(item))
}

/// update_lookup
#[utoipa::path(
    put,
    path = "/lookups/{kind}/{id}",
    request_body = LookupPayload,
    responses(
        (status = 200, description = "Updated", body = LookupItem),
        (status = 404, description = "Unknown table or missing row")
    )
)]
pub async fn update_lookup(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path((kind, id)): Path<(String, i32)>,
    Json(payload): Json<LookupPayload>,
) -> ApiResult<Json<LookupItem>> {
    let kind = resolve_kind(&kind)?;
    let item = state.repo.update_lookup(kind, id, &payload).await?;
    Ok(Json(item))
}

/// delete_lookup
///
/// [Authenticated Route] Deletes a lookup row. Rows still referenced by a
/// vehicle or record are protected by the schema and report as 400s.
#[utoipa::path(
    delete,
    path = "/lookups/{kind}/{id}",
    responses(
        (status = 204, description = "Deleted"),
        (status = 400, description = "Row still referenced"),
        (status = 404, description = "Unknown table or missing row")
    )
)]
pub async fn delete_lookup(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path((kind, id)): Path<(String, i32)>,
) -> ApiResult<StatusCode> {
    let kind = resolve_kind(&kind)?;
    state.repo.delete_lookup(kind, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
