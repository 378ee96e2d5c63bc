use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use ts_rs::TS;
use utoipa::{IntoParams, ToSchema};

/// Panne
///
/// A vehicle breakdown/incident record. Stays `active` until closed or until
/// a reparation resolves it.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, Default)]
#[ts(export)]
pub struct Panne {
    pub id: i32,
    pub vehicle_id: i32,
    pub category_panne_id: i32,
    pub description: Option<String>,
    pub status: String,
    #[ts(type = "string")]
    pub panne_date: DateTime<Utc>,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
}

/// PannePayload
///
/// Creation payload; `status` defaults to `active`.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct PannePayload {
    pub vehicle_id: i32,
    pub category_panne_id: i32,
    pub description: Option<String>,
    pub status: Option<String>,
    #[ts(type = "string")]
    pub panne_date: DateTime<Utc>,
}

/// PanneUpdate
///
/// Partial update; foreign keys are validated when changed.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct PanneUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_panne_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(type = "string | null")]
    pub panne_date: Option<DateTime<Utc>>,
}

/// PanneFilter
///
/// List-endpoint filters for pannes. `search` also matches the vehicle plate
/// and the category name through joins.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct PanneFilter {
    pub vehicle_id: Option<i32>,
    pub category_panne_id: Option<i32>,
    pub status: Option<String>,
    pub search: Option<String>,
    pub limit: Option<i64>,
    pub skip: Option<i64>,
}

/// Reparation
///
/// A repair record resolving a panne, performed by a garage.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, Default)]
#[ts(export)]
pub struct Reparation {
    pub id: i32,
    pub panne_id: i32,
    pub garage_id: i32,
    pub cost: f64,
    pub receipt: String,
    #[ts(type = "string")]
    pub repair_date: DateTime<Utc>,
    /// in_progress | completed | cancelled.
    pub status: String,
}

/// ReparationPayload
///
/// Creation payload; `status` defaults to `in_progress`.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct ReparationPayload {
    pub panne_id: i32,
    pub garage_id: i32,
    pub cost: f64,
    pub receipt: String,
    #[ts(type = "string")]
    pub repair_date: DateTime<Utc>,
    pub status: Option<String>,
}

/// ReparationUpdate
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct ReparationUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub panne_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub garage_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(type = "string | null")]
    pub repair_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// ReparationFilter
///
/// List-endpoint filters for reparations; date bounds are inclusive whole
/// days against `repair_date`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct ReparationFilter {
    pub panne_id: Option<i32>,
    pub garage_id: Option<i32>,
    pub status: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub search: Option<String>,
    pub limit: Option<i64>,
    pub skip: Option<i64>,
}
