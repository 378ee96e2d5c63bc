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
        DocumentCategory, DocumentCategoryPayload, DocumentFilter, ExpiringQuery, PageFilter,
        VehicleDocument, VehicleDocumentPayload,
    },
};

async fn validate_document_payload(
    state: &AppState,
    payload: &VehicleDocumentPayload,
) -> ApiResult<()> {
    if payload.expiration_date <= payload.issued_date {
        return Err(ApiError::Validation(
            "expiration_date must be after issued_date".to_string(),
        ));
    }
    state.repo.get_vehicle(payload.vehicle_id).await?;
    if !state.repo.document_category_exists(payload.category_id).await? {
        return Err(ApiError::NotFound(format!(
            "Document category with id: {} was not found",
            payload.category_id
        )));
    }
    Ok(())
}

/// list_document_categories
///
/// [Authenticated Route] Document kinds with their standard renewal cost.
#[utoipa::path(
    get,
    path = "/document-categories",
    params(PageFilter),
    responses((status = 200, description = "Document categories", body = [DocumentCategory]))
)]
pub async fn list_document_categories(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(filter): Query<PageFilter>,
) -> ApiResult<Json<Vec<DocumentCategory>>> {
    let categories = state.repo.list_document_categories(&filter).await?;
    Ok(Json(categories))
}

/// create_document_category
#[utoipa::path(
    post,
    path = "/document-categories",
    request_body = DocumentCategoryPayload,
    responses((status = 201, description = "Category created", body = DocumentCategory))
)]
pub async fn create_document_category(
    _auth: AuthUser,
    State(state): State<AppState>,
    Json(payload): Json<DocumentCategoryPayload>,
) -> ApiResult<(StatusCode, Json<DocumentCategory>)> {
    let category = state.repo.create_document_category(&payload).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// update_document_category
#[utoipa::path(
    put,
    path = "/document-categories/{id}",
    request_body = DocumentCategoryPayload,
    responses(
        (status = 200, description = "Updated", body = DocumentCategory),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_document_category(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<DocumentCategoryPayload>,
) -> ApiResult<Json<DocumentCategory>> {
    let category = state.repo.update_document_category(id, &payload).await?;
    Ok(Json(category))
}

/// delete_document_category
#[utoipa::path(
    delete,
    path = "/document-categories/{id}",
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_document_category(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<StatusCode> {
    state.repo.delete_document_category(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// create_document
///
/// [Authenticated Route] Attaches a document to a vehicle. Expiration must
/// postdate issuance; the vehicle and category must exist.
#[utoipa::path(
    post,
    path = "/documents",
    request_body = VehicleDocumentPayload,
    responses(
        (status = 201, description = "Document created", body = VehicleDocument),
        (status = 400, description = "Expiration not after issuance"),
        (status = 404, description = "Vehicle or category not found")
    )
)]
pub async fn create_document(
    _auth: AuthUser,
    State(state): State<AppState>,
    Json(payload): Json<VehicleDocumentPayload>,
) -> ApiResult<(StatusCode, Json<VehicleDocument>)> {
    validate_document_payload(&state, &payload).await?;
    let document = state.repo.create_document(&payload).await?;
    Ok((StatusCode::CREATED, Json(document)))
}

/// list_documents
///
/// [Authenticated Route] Vehicle-document listing ordered by expiration.
#[utoipa::path(
    get,
    path = "/documents",
    params(DocumentFilter),
    responses((status = 200, description = "Documents", body = [VehicleDocument]))
)]
pub async fn list_documents(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(filter): Query<DocumentFilter>,
) -> ApiResult<Json<Vec<VehicleDocument>>> {
    let documents = state.repo.list_documents(&filter).await?;
    Ok(Json(documents))
}

/// list_expiring_documents
///
/// [Authenticated Route] Documents expiring within the requested horizon
/// (default 30 days), feeding the renewal-reminder panel.
#[utoipa::path(
    get,
    path = "/documents/expiring",
    params(ExpiringQuery),
    responses((status = 200, description = "Expiring documents", body = [VehicleDocument]))
)]
pub async fn list_expiring_documents(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(query): Query<ExpiringQuery>,
) -> ApiResult<Json<Vec<VehicleDocument>>> {
    let documents = state
        .repo
        .list_expiring_documents(query.horizon_days())
        .await?;
    Ok(Json(documents))
}

/// get_document
#[utoipa::path(
    get,
    path = "/documents/{id}",
    params(("id" = i32, Path, description = "Document ID")),
    responses(
        (status = 200, description = "Document", body = VehicleDocument),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_document(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<VehicleDocument>> {
    let document = state.repo.get_document(id).await?;
    Ok(Json(document))
}

/// update_document
#[utoipa::path(
    put,
    path = "/documents/{id}",
    request_body = VehicleDocumentPayload,
    responses(
        (status = 200, description = "Updated", body = VehicleDocument),
        (status = 400, description = "Expiration not after issuance"),
        (status = 404, description = "Document, vehicle or category not found")
    )
)]
pub async fn update_document(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<VehicleDocumentPayload>,
) -> ApiResult<Json<VehicleDocument>> {
    validate_document_payload(&state, &payload).await?;
    let document = state.repo.update_document(id, &payload).await?;
    Ok(Json(document))
}

/// delete_document
#[utoipa::path(
    delete,
    path = "/documents/{id}",
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_document(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<StatusCode> {
    state.repo.delete_document(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
