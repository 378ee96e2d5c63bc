use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};

use crate::{
    AppState,
    auth::{AuthUser, hash_password},
    error::{ApiError, ApiResult},
    models::{CreateUserRequest, PageFilter, UpdateUserRequest, UserAccount, account_status},
};

/// register_user
///
/// [Public Route] Self-service registration. New accounts land in
/// `pending_approval` and cannot log in until an administrator activates
/// them; an explicit status in the payload is only honored when it is one of
/// the recognized states.
#[utoipa::path(
    post,
    path = "/user",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "Account created", body = UserAccount),
        (status = 400, description = "Unknown status value"),
        (status = 409, description = "Username or email already taken")
    )
)]
pub async fn register_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> ApiResult<(StatusCode, Json<UserAccount>)> {
    let status = match payload.status.as_deref() {
        Some(status) if !account_status::is_known(status) => {
            return Err(ApiError::Validation(format!(
                "Unknown account status: {status}"
            )));
        }
        Some(status) => status.to_string(),
        None => account_status::PENDING_APPROVAL.to_string(),
    };

    let password_hash = hash_password(&payload.password)?;
    let user = state
        .repo
        .create_user(payload.username, payload.email, password_hash, status)
        .await?;
    tracing::info!(user_id = user.id, "account registered");
    Ok((StatusCode::CREATED, Json(user)))
}

/// get_me
///
/// [Authenticated Route] Returns the account behind the presented token.
#[utoipa::path(
    get,
    path = "/me",
    responses((status = 200, description = "Current account", body = UserAccount))
)]
pub async fn get_me(
    AuthUser { id, .. }: AuthUser,
    State(state): State<AppState>,
) -> ApiResult<Json<UserAccount>> {
    let user = state.repo.get_user(id).await?;
    Ok(Json(user))
}

/// list_users
///
/// [Authenticated Route] Account listing for the user-management screen.
/// `search` matches username and email.
#[utoipa::path(
    get,
    path = "/users",
    params(PageFilter),
    responses((status = 200, description = "Accounts", body = [UserAccount]))
)]
pub async fn list_users(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(filter): Query<PageFilter>,
) -> ApiResult<Json<Vec<UserAccount>>> {
    let users = state.repo.list_users(&filter).await?;
    Ok(Json(users))
}

/// get_user
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = i32, Path, description = "Account ID")),
    responses(
        (status = 200, description = "Account", body = UserAccount),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_user(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<UserAccount>> {
    let user = state.repo.get_user(id).await?;
    Ok(Json(user))
}

/// update_user
///
/// [Authenticated Route] Partial account update. A provided password is
/// re-hashed before storage; a provided status drives the approval workflow
/// and must be a recognized state.
#[utoipa::path(
    put,
    path = "/users/{id}",
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Updated", body = UserAccount),
        (status = 400, description = "Unknown status value"),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_user(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateUserRequest>,
) -> ApiResult<Json<UserAccount>> {
    if let Some(status) = payload.status.as_deref() {
        if !account_status::is_known(status) {
            return Err(ApiError::Validation(format!(
                "Unknown account status: {status}"
            )));
        }
    }

    let password_hash = payload
        .password
        .as_deref()
        .map(hash_password)
        .transpose()?;

    let user = state.repo.update_user(id, &payload, password_hash).await?;
    Ok(Json(user))
}

/// delete_user
///
/// [Authenticated Route] Deletes an account. Self-deletion is rejected so an
/// administrator cannot lock themselves out mid-session.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    responses(
        (status = 204, description = "Deleted"),
        (status = 400, description = "Attempted self-deletion"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_user(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<StatusCode> {
    if auth.id == id {
        return Err(ApiError::Validation(
            "You cannot delete your own account".to_string(),
        ));
    }
    state.repo.delete_user(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
