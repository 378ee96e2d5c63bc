use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use ts_rs::TS;
use utoipa::ToSchema;

/// Maintenance
///
/// A scheduled-maintenance entry. Category and garage are nullable (SET NULL
/// on delete); the vehicle link cascades.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, Default)]
#[ts(export)]
pub struct Maintenance {
    pub id: i32,
    pub category_id: Option<i32>,
    pub vehicle_id: i32,
    pub garage_id: Option<i32>,
    pub maintenance_cost: f64,
    /// Receipt/invoice reference.
    pub receipt: String,
    #[ts(type = "string")]
    pub maintenance_date: DateTime<Utc>,
    pub status: String,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
}

/// MaintenancePayload
///
/// Create/update payload; `status` defaults to `active` on creation.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct MaintenancePayload {
    pub category_id: Option<i32>,
    pub vehicle_id: i32,
    pub garage_id: Option<i32>,
    pub maintenance_cost: f64,
    pub receipt: String,
    #[ts(type = "string")]
    pub maintenance_date: DateTime<Utc>,
    pub status: Option<String>,
}
