use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use ts_rs::TS;
use utoipa::{IntoParams, ToSchema};

/// Trip lifecycle states. Status writes are validated against this set so a
/// typo cannot park a trip in a state no filter or counter will ever match.
pub mod trip_status {
    pub const PLANNED: &str = "planned";
    pub const ONGOING: &str = "ongoing";
    pub const COMPLETED: &str = "completed";
    pub const CANCELLED: &str = "cancelled";

    pub fn is_known(status: &str) -> bool {
        matches!(status, PLANNED | ONGOING | COMPLETED | CANCELLED)
    }
}

/// Trip
///
/// A trip assignment binding a vehicle and a driver. `end_time` stays null
/// while the trip is planned or ongoing.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, Default)]
#[ts(export)]
pub struct Trip {
    pub id: i32,
    pub vehicle_id: i32,
    pub driver_id: i32,
    pub start_location: String,
    pub end_location: String,
    #[ts(type = "string")]
    pub start_time: DateTime<Utc>,
    #[ts(type = "string | null")]
    pub end_time: Option<DateTime<Utc>>,
    pub purpose: Option<String>,
    pub notes: Option<String>,
    /// planned | ongoing | completed | cancelled.
    pub status: String,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
    #[ts(type = "string | null")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// TripPayload
///
/// Create/update payload. `status` defaults to `planned` on creation.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct TripPayload {
    pub vehicle_id: i32,
    pub driver_id: i32,
    pub start_location: String,
    pub end_location: String,
    #[ts(type = "string")]
    pub start_time: DateTime<Utc>,
    #[ts(type = "string | null")]
    pub end_time: Option<DateTime<Utc>>,
    pub purpose: Option<String>,
    pub notes: Option<String>,
    pub status: Option<String>,
}

/// TripFilter
///
/// List-endpoint filters for trips, combined with the shared pagination pair.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct TripFilter {
    pub vehicle_id: Option<i32>,
    pub driver_id: Option<i32>,
    pub status: Option<String>,
    pub limit: Option<i64>,
    pub skip: Option<i64>,
}
