use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use ts_rs::TS;
use utoipa::ToSchema;

/// Account status values recognized by the login and approval flows.
pub mod account_status {
    pub const ACTIVE: &str = "active";
    pub const INACTIVE: &str = "inactive";
    pub const SUSPENDED: &str = "suspended";
    pub const PENDING_APPROVAL: &str = "pending_approval";

    /// True when the status string is one of the recognized account states.
    pub fn is_known(status: &str) -> bool {
        matches!(status, ACTIVE | INACTIVE | SUSPENDED | PENDING_APPROVAL)
    }
}

/// UserAccount
///
/// The canonical identity record from the `user_account` table. The bcrypt
/// password hash never leaves the server: it is skipped on serialization and
/// excluded from the exported TypeScript type.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, Default)]
#[ts(export)]
pub struct UserAccount {
    pub id: i32,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing, default)]
    #[ts(skip)]
    #[schema(ignore)]
    pub password: String,
    /// Approval lifecycle: active | inactive | suspended | pending_approval.
    pub status: String,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
}

/// CreateUserRequest
///
/// Registration payload (POST /user). New accounts default to
/// `pending_approval` until an administrator activates them.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// UpdateUserRequest
///
/// Partial update payload for the admin user-management screen. A provided
/// `password` is re-hashed before storage; a provided `status` drives the
/// approval workflow.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct UpdateUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// LoginForm
///
/// OAuth2-style password grant form (POST /login). `username` accepts either
/// the username or the email address.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Token
///
/// Successful login response: the signed JWT plus the identity fields the
/// frontend caches for display and routing.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
    pub user_id: i32,
    pub username: String,
    pub status: String,
}
