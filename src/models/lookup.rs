use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use ts_rs::TS;
use utoipa::ToSchema;

/// LookupKind
///
/// The eight single-column reference tables behind the vehicle and incident
/// forms. Table and column names are static strings baked into the enum, so
/// the lookup repository can build its queries without any user-controlled
/// identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupKind {
    VehicleType,
    VehicleMake,
    VehicleModel,
    VehicleTransmission,
    FuelType,
    Garage,
    CategoryMaintenance,
    CategoryPanne,
}

impl LookupKind {
    pub fn table(self) -> &'static str {
        match self {
            LookupKind::VehicleType => "vehicle_type",
            LookupKind::VehicleMake => "vehicle_make",
            LookupKind::VehicleModel => "vehicle_model",
            LookupKind::VehicleTransmission => "vehicle_transmission",
            LookupKind::FuelType => "fuel_type",
            LookupKind::Garage => "garage",
            LookupKind::CategoryMaintenance => "category_maintenance",
            LookupKind::CategoryPanne => "category_panne",
        }
    }

    /// The single text column of the table.
    pub fn column(self) -> &'static str {
        match self {
            LookupKind::VehicleType => "vehicle_type",
            LookupKind::VehicleMake => "vehicle_make",
            LookupKind::VehicleModel => "vehicle_model",
            LookupKind::VehicleTransmission => "vehicle_transmission",
            LookupKind::FuelType => "fuel_type",
            LookupKind::Garage => "nom_garage",
            LookupKind::CategoryMaintenance => "cat_maintenance",
            LookupKind::CategoryPanne => "panne_name",
        }
    }

    /// URL segment for the shared /lookups/{kind} routes.
    pub fn slug(self) -> &'static str {
        match self {
            LookupKind::VehicleType => "vehicle-types",
            LookupKind::VehicleMake => "vehicle-makes",
            LookupKind::VehicleModel => "vehicle-models",
            LookupKind::VehicleTransmission => "vehicle-transmissions",
            LookupKind::FuelType => "fuel-types",
            LookupKind::Garage => "garages",
            LookupKind::CategoryMaintenance => "maintenance-categories",
            LookupKind::CategoryPanne => "panne-categories",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.slug() == slug)
    }

    pub const ALL: [LookupKind; 8] = [
        LookupKind::VehicleType,
        LookupKind::VehicleMake,
        LookupKind::VehicleModel,
        LookupKind::VehicleTransmission,
        LookupKind::FuelType,
        LookupKind::Garage,
        LookupKind::CategoryMaintenance,
        LookupKind::CategoryPanne,
    ];

    /// Human-readable name used in error messages.
    pub fn display_name(self) -> &'static str {
        match self {
            LookupKind::VehicleType => "vehicle type",
            LookupKind::VehicleMake => "vehicle make",
            LookupKind::VehicleModel => "vehicle model",
            LookupKind::VehicleTransmission => "vehicle transmission",
            LookupKind::FuelType => "fuel type",
            LookupKind::Garage => "garage",
            LookupKind::CategoryMaintenance => "maintenance category",
            LookupKind::CategoryPanne => "panne category",
        }
    }
}

/// LookupItem
///
/// Uniform row shape for every lookup table: the text column is selected
/// under the `label` alias.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, Default)]
#[ts(export)]
pub struct LookupItem {
    pub id: i32,
    pub label: String,
}

/// LookupPayload
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct LookupPayload {
    pub label: String,
}
