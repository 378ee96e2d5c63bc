use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use ts_rs::TS;
use utoipa::{IntoParams, ToSchema};

/// DocumentCategory
///
/// A document kind (insurance, technical inspection, road tax, ...) with its
/// standard renewal cost. Unlike the plain lookup tables this one carries a
/// cost column, so it gets its own schema.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, Default)]
#[ts(export)]
pub struct DocumentCategory {
    pub id: i32,
    pub doc_name: String,
    pub cost: f64,
}

/// DocumentCategoryPayload
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct DocumentCategoryPayload {
    pub doc_name: String,
    pub cost: Option<f64>,
}

/// VehicleDocument
///
/// An issued document attached to a vehicle, from the `document_vehicule`
/// table. Expiration must postdate issuance.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, Default)]
#[ts(export)]
pub struct VehicleDocument {
    pub id: i32,
    pub category_id: i32,
    pub vehicle_id: i32,
    #[ts(type = "string")]
    pub issued_date: DateTime<Utc>,
    #[ts(type = "string")]
    pub expiration_date: DateTime<Utc>,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
}

/// VehicleDocumentPayload
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct VehicleDocumentPayload {
    pub category_id: i32,
    pub vehicle_id: i32,
    #[ts(type = "string")]
    pub issued_date: DateTime<Utc>,
    #[ts(type = "string")]
    pub expiration_date: DateTime<Utc>,
}

/// DocumentFilter
///
/// List-endpoint filters for vehicle documents.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct DocumentFilter {
    pub vehicle_id: Option<i32>,
    pub category_id: Option<i32>,
    pub limit: Option<i64>,
    pub skip: Option<i64>,
}

/// ExpiringQuery
///
/// Horizon for the expiring-documents listing, in days (default 30).
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct ExpiringQuery {
    pub days: Option<i64>,
}

impl ExpiringQuery {
    /// Effective horizon. Negative values collapse to an empty window and
    /// oversized ones are capped so the day count survives the i32 interval
    /// argument intact.
    pub fn horizon_days(&self) -> i64 {
        self.days.unwrap_or(30).clamp(0, i32::MAX as i64)
    }
}
