use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use ts_rs::TS;
use utoipa::ToSchema;

/// Vehicle
///
/// A fleet vehicle from the `vehicle` table. Make, model, type, transmission
/// and fuel type are references into the lookup tables.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, Default)]
#[ts(export)]
pub struct Vehicle {
    pub id: i32,
    pub make_id: Option<i32>,
    pub model_id: Option<i32>,
    pub year: Option<i32>,
    pub plate_number: String,
    pub mileage: f64,
    pub engine_size: f64,
    pub vehicle_type_id: Option<i32>,
    pub transmission_id: Option<i32>,
    pub fuel_type_id: Option<i32>,
    pub vin: String,
    pub color: String,
    pub purchase_price: f64,
    #[ts(type = "string | null")]
    pub purchase_date: Option<DateTime<Utc>>,
    /// Operational state, e.g. available | in_use | in_maintenance | retired.
    pub status: String,
    #[ts(type = "string")]
    pub registration_date: DateTime<Utc>,
}

/// VehiclePayload
///
/// Create/update payload. `status` defaults to `available` on creation when
/// omitted.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct VehiclePayload {
    pub make_id: Option<i32>,
    pub model_id: Option<i32>,
    pub year: Option<i32>,
    pub plate_number: String,
    pub mileage: Option<f64>,
    pub engine_size: Option<f64>,
    pub vehicle_type_id: Option<i32>,
    pub transmission_id: Option<i32>,
    pub fuel_type_id: Option<i32>,
    pub vin: String,
    pub color: String,
    pub purchase_price: Option<f64>,
    #[ts(type = "string | null")]
    pub purchase_date: Option<DateTime<Utc>>,
    pub status: Option<String>,
}

/// StatusUpdate
///
/// Body for the status-only PATCH endpoints (vehicles and trips). Simple
/// status changes go through here instead of a full-row PUT.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct StatusUpdate {
    pub status: String,
}
