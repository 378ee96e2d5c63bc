use axum::{Form, Json, extract::State};

use crate::{
    AppState,
    auth::{create_access_token, status_rejection, verify_password},
    error::{ApiError, ApiResult},
    models::{LoginForm, Token, account_status},
};

/// login
///
/// [Public Route] OAuth2-style password grant. The form's `username` field
/// accepts either the username or the email address. Unknown identifiers and
/// wrong passwords both produce the same generic 401 so the endpoint cannot
/// be used to probe for accounts; non-active accounts with correct
/// credentials get a status-specific 403 instead.
#[utoipa::path(
    post,
    path = "/login",
    request_body(content = LoginForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Access token issued", body = Token),
        (status = 401, description = "Invalid credentials"),
        (status = 403, description = "Account not active")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> ApiResult<Json<Token>> {
    let user = state
        .repo
        .find_user_by_identifier(&form.username)
        .await?
        .ok_or(ApiError::Unauthorized)?;

    if !verify_password(&form.password, &user.password) {
        return Err(ApiError::Unauthorized);
    }

    if user.status != account_status::ACTIVE {
        return Err(status_rejection(&user.status));
    }

    let access_token = create_access_token(&state.config, &user)?;
    tracing::info!(user_id = user.id, "login succeeded");

    Ok(Json(Token {
        access_token,
        token_type: "bearer".to_string(),
        user_id: user.id,
        username: user.username,
        status: user.status,
    }))
}
