use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use utoipa::{IntoParams, ToSchema};

/// DateRangeQuery
///
/// Inclusive calendar-date window shared by the analytics endpoints. The
/// repository widens it to whole days before comparing against TIMESTAMP
/// columns.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct DateRangeQuery {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// DetailedRecordsQuery
///
/// Window plus an optional comma-separated category list
/// (fuel, reparation, maintenance, purchases). All categories when omitted.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct DetailedRecordsQuery {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub categories: Option<String>,
}

/// MonthlyExpense
///
/// One bar of the expense chart: costs bucketed per calendar month, with a
/// short display label like `Jan '25`.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default, PartialEq)]
#[ts(export)]
pub struct MonthlyExpense {
    pub month_year: String,
    pub fuel_cost: f64,
    pub reparation_cost: f64,
    pub maintenance_cost: f64,
    pub purchase_cost: f64,
}

/// ExpenseSummary
///
/// Aggregate spend over the requested window plus the zero-filled monthly
/// breakdown covering every month of the window.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct ExpenseSummary {
    pub total_fuel_cost: f64,
    pub total_reparation_cost: f64,
    pub total_maintenance_cost: f64,
    pub total_vehicle_purchase_cost: f64,
    pub monthly_breakdown: Vec<MonthlyExpense>,
}

/// FuelRecordDetail
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, TS, ToSchema, Default)]
#[ts(export)]
pub struct FuelRecordDetail {
    pub id: i32,
    pub vehicle_plate: String,
    #[ts(type = "string")]
    pub date: DateTime<Utc>,
    pub quantity: f64,
    pub cost: f64,
}

/// ReparationRecordDetail
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, TS, ToSchema, Default)]
#[ts(export)]
pub struct ReparationRecordDetail {
    pub id: i32,
    pub vehicle_plate: String,
    #[ts(type = "string")]
    pub repair_date: NaiveDate,
    pub description: String,
    pub cost: f64,
    pub provider: Option<String>,
}

/// MaintenanceRecordDetail
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, TS, ToSchema, Default)]
#[ts(export)]
pub struct MaintenanceRecordDetail {
    pub id: i32,
    pub vehicle_plate: String,
    #[ts(type = "string")]
    pub maintenance_date: NaiveDate,
    pub description: String,
    pub cost: f64,
    pub provider: Option<String>,
}

/// PurchaseRecordDetail
///
/// Vehicle acquisitions inside the window (purchase_price > 0).
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, TS, ToSchema, Default)]
#[ts(export)]
pub struct PurchaseRecordDetail {
    pub id: i32,
    pub plate_number: String,
    pub make: String,
    pub model: String,
    #[ts(type = "string | null")]
    pub purchase_date: Option<NaiveDate>,
    pub purchase_price: f64,
}

/// DetailedReport
///
/// Per-category record listings backing the exportable expense report.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct DetailedReport {
    pub fuel_records: Vec<FuelRecordDetail>,
    pub reparation_records: Vec<ReparationRecordDetail>,
    pub maintenance_records: Vec<MaintenanceRecordDetail>,
    pub purchase_records: Vec<PurchaseRecordDetail>,
}

/// VehicleStatusCount
///
/// One slice of the fleet-status breakdown: how many vehicles currently sit
/// in a given operational state.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, TS, ToSchema, Default, PartialEq)]
#[ts(export)]
pub struct VehicleStatusCount {
    pub status: String,
    pub count: i64,
}

/// DashboardCounts
///
/// Counter set for the admin dashboard header. The vehicle fleet is broken
/// down per status so every vehicle is accounted for in exactly one slice.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct DashboardCounts {
    pub total_vehicles: i64,
    pub vehicles_by_status: Vec<VehicleStatusCount>,
    pub total_drivers: i64,
    pub active_pannes: i64,
    pub ongoing_trips: i64,
    pub total_users: i64,
    pub pending_users: i64,
}
