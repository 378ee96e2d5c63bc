use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use ts_rs::TS;
use utoipa::ToSchema;

/// Driver
///
/// A driver record from the `driver` table. CNI number, email and matricule
/// (badge number) all carry unique constraints.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, Default)]
#[ts(export)]
pub struct Driver {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    /// National identity card number.
    pub cni_number: String,
    pub email: String,
    /// Registration/badge number.
    pub matricule: String,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
}

/// DriverPayload
///
/// Create/update payload: all fields are required, matching the original API
/// which used the create schema for both operations.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct DriverPayload {
    pub first_name: String,
    pub last_name: String,
    pub cni_number: String,
    pub email: String,
    pub matricule: String,
}
