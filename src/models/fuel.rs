use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use ts_rs::TS;
use utoipa::{IntoParams, ToSchema};

/// FuelRecord
///
/// A refuelling entry. `cost` is always computed server-side from quantity
/// and unit price; clients never supply it.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, Default)]
#[ts(export)]
pub struct FuelRecord {
    pub id: i32,
    pub vehicle_id: i32,
    pub fuel_type_id: i32,
    pub quantity: f64,
    pub price_per_liter: f64,
    pub cost: f64,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
}

/// FuelPayload
///
/// Creation payload: cost is derived, so only the inputs are accepted.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct FuelPayload {
    pub vehicle_id: i32,
    pub fuel_type_id: i32,
    pub quantity: f64,
    pub price_per_liter: f64,
}

/// FuelUpdate
///
/// Partial update. When quantity or unit price change, the stored cost is
/// recomputed from the resulting pair.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct FuelUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuel_type_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_per_liter: Option<f64>,
}

/// FuelFilter
///
/// List-endpoint filters for fuel records. Date bounds are inclusive whole
/// days against `created_at`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct FuelFilter {
    pub vehicle_id: Option<i32>,
    pub fuel_type_id: Option<i32>,
    pub date_after: Option<NaiveDate>,
    pub date_before: Option<NaiveDate>,
    pub limit: Option<i64>,
    pub skip: Option<i64>,
}

/// Total cost of a refuelling, rounded to cents.
pub fn compute_cost(quantity: f64, price_per_liter: f64) -> f64 {
    (quantity * price_per_liter * 100.0).round() / 100.0
}
