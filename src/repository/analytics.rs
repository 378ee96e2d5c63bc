use async_trait::async_trait;
use chrono::{Datelike, NaiveDate};
use std::collections::HashMap;

use super::{PostgresRepository, day_bounds};
use crate::error::ApiResult;
use crate::models::{
    DashboardCounts, DetailedReport, ExpenseSummary, FuelRecordDetail, MaintenanceRecordDetail,
    MonthlyExpense, PurchaseRecordDetail, ReparationRecordDetail, VehicleStatusCount,
};

// Detail listings are exported as chronological reports, so they order
// ascending by date like the statements they feed.
const FUEL_DETAIL_QUERY: &str = "SELECT f.id, COALESCE(v.plate_number, 'N/A') AS vehicle_plate,
        f.created_at AS date, f.quantity, f.cost
 FROM fuel f
 LEFT JOIN vehicle v ON f.vehicle_id = v.id
 WHERE f.created_at >= $1 AND f.created_at < $2
 ORDER BY f.created_at";

const REPARATION_DETAIL_QUERY: &str =
    "SELECT r.id, COALESCE(v.plate_number, 'N/A') AS vehicle_plate,
        CAST(r.repair_date AS DATE) AS repair_date,
        COALESCE(p.description, '') AS description,
        r.cost, g.nom_garage AS provider
 FROM reparation r
 LEFT JOIN panne p ON r.panne_id = p.id
 LEFT JOIN vehicle v ON p.vehicle_id = v.id
 LEFT JOIN garage g ON r.garage_id = g.id
 WHERE r.repair_date >= $1 AND r.repair_date < $2
 ORDER BY r.repair_date";

const MAINTENANCE_DETAIL_QUERY: &str =
    "SELECT m.id, COALESCE(v.plate_number, 'N/A') AS vehicle_plate,
        CAST(m.maintenance_date AS DATE) AS maintenance_date,
        COALESCE(cm.cat_maintenance, '') AS description,
        m.maintenance_cost AS cost, g.nom_garage AS provider
 FROM maintenance m
 LEFT JOIN vehicle v ON m.vehicle_id = v.id
 LEFT JOIN category_maintenance cm ON m.category_id = cm.id
 LEFT JOIN garage g ON m.garage_id = g.id
 WHERE m.maintenance_date >= $1 AND m.maintenance_date < $2
 ORDER BY m.maintenance_date";

const PURCHASE_DETAIL_QUERY: &str = "SELECT v.id, v.plate_number,
        COALESCE(mk.vehicle_make, '') AS make,
        COALESCE(md.vehicle_model, '') AS model,
        CAST(v.purchase_date AS DATE) AS purchase_date,
        v.purchase_price
 FROM vehicle v
 LEFT JOIN vehicle_make mk ON v.make_id = mk.id
 LEFT JOIN vehicle_model md ON v.model_id = md.id
 WHERE v.purchase_price > 0
   AND v.purchase_date >= $1 AND v.purchase_date < $2
 ORDER BY v.purchase_date";

/// AnalyticsStore
///
/// Read-only aggregates over the expense-bearing tables. Monthly bucketing is
/// done with one grouped query per category and merged in memory, so months
/// with no records still show up as zeros in the chart.
#[async_trait]
pub trait AnalyticsStore: Send + Sync {
    async fn expense_summary(&self, start: NaiveDate, end: NaiveDate) -> ApiResult<ExpenseSummary>;
    async fn detailed_records(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        categories: &[String],
    ) -> ApiResult<DetailedReport>;
    async fn dashboard_counts(&self) -> ApiResult<DashboardCounts>;
}

/// Short chart label for a month, like `Jan '25`.
pub fn month_label(year: i32, month: u32) -> String {
    const NAMES: [&str; 12] = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];
    let name = NAMES
        .get(month.saturating_sub(1) as usize)
        .copied()
        .unwrap_or("???");
    format!("{name} '{:02}", year.rem_euclid(100))
}

/// Every (year, month) pair from the start month through the end month,
/// inclusive. Empty when the window is inverted.
pub fn month_span(start: NaiveDate, end: NaiveDate) -> Vec<(i32, u32)> {
    let mut months = Vec::new();
    let (mut year, mut month) = (start.year(), start.month());
    let last = (end.year(), end.month());
    while (year, month) <= last {
        months.push((year, month));
        if month == 12 {
            year += 1;
            month = 1;
        } else {
            month += 1;
        }
    }
    months
}

type MonthlyTotals = HashMap<(i32, u32), f64>;

impl PostgresRepository {
    async fn sum_in_window(
        &self,
        table: &str,
        cost_column: &str,
        date_column: &str,
        extra: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> ApiResult<f64> {
        let (lower, upper) = day_bounds(start, end);
        let total = sqlx::query_scalar::<_, Option<f64>>(&format!(
            "SELECT SUM({cost_column}) FROM {table}
             WHERE {date_column} >= $1 AND {date_column} < $2{extra}"
        ))
        .bind(lower)
        .bind(upper)
        .fetch_one(self.pool())
        .await?;
        Ok(total.unwrap_or(0.0))
    }

    async fn monthly_totals(
        &self,
        table: &str,
        cost_column: &str,
        date_column: &str,
        extra: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> ApiResult<MonthlyTotals> {
        let (lower, upper) = day_bounds(start, end);
        let rows = sqlx::query_as::<_, (i32, i32, f64)>(&format!(
            "SELECT CAST(EXTRACT(YEAR FROM {date_column}) AS INT4),
                    CAST(EXTRACT(MONTH FROM {date_column}) AS INT4),
                    SUM({cost_column})
             FROM {table}
             WHERE {date_column} >= $1 AND {date_column} < $2{extra}
             GROUP BY 1, 2"
        ))
        .bind(lower)
        .bind(upper)
        .fetch_all(self.pool())
        .await?;
        Ok(rows
            .into_iter()
            .map(|(year, month, sum)| ((year, month as u32), sum))
            .collect())
    }

    async fn count(&self, sql: &str) -> ApiResult<i64> {
        let n = sqlx::query_scalar::<_, i64>(sql).fetch_one(self.pool()).await?;
        Ok(n)
    }
}

#[async_trait]
impl AnalyticsStore for PostgresRepository {
    async fn expense_summary(&self, start: NaiveDate, end: NaiveDate) -> ApiResult<ExpenseSummary> {
        let total_fuel_cost = self
            .sum_in_window("fuel", "cost", "created_at", "", start, end)
            .await?;
        let total_reparation_cost = self
            .sum_in_window("reparation", "cost", "repair_date", "", start, end)
            .await?;
        let total_maintenance_cost = self
            .sum_in_window(
                "maintenance",
                "maintenance_cost",
                "maintenance_date",
                "",
                start,
                end,
            )
            .await?;
        let total_vehicle_purchase_cost = self
            .sum_in_window(
                "vehicle",
                "purchase_price",
                "purchase_date",
                " AND purchase_price > 0",
                start,
                end,
            )
            .await?;

        let fuel = self
            .monthly_totals("fuel", "cost", "created_at", "", start, end)
            .await?;
        let reparation = self
            .monthly_totals("reparation", "cost", "repair_date", "", start, end)
            .await?;
        let maintenance = self
            .monthly_totals(
                "maintenance",
                "maintenance_cost",
                "maintenance_date",
                "",
                start,
                end,
            )
            .await?;
        let purchases = self
            .monthly_totals(
                "vehicle",
                "purchase_price",
                "purchase_date",
                " AND purchase_price > 0",
                start,
                end,
            )
            .await?;

        let monthly_breakdown = month_span(start, end)
            .into_iter()
            .map(|(year, month)| MonthlyExpense {
                month_year: month_label(year, month),
                fuel_cost: fuel.get(&(year, month)).copied().unwrap_or(0.0),
                reparation_cost: reparation.get(&(year, month)).copied().unwrap_or(0.0),
                maintenance_cost: maintenance.get(&(year, month)).copied().unwrap_or(0.0),
                purchase_cost: purchases.get(&(year, month)).copied().unwrap_or(0.0),
            })
            .collect();

        Ok(ExpenseSummary {
            total_fuel_cost,
            total_reparation_cost,
            total_maintenance_cost,
            total_vehicle_purchase_cost,
            monthly_breakdown,
        })
    }

    async fn detailed_records(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        categories: &[String],
    ) -> ApiResult<DetailedReport> {
        let (lower, upper) = day_bounds(start, end);
        let wants = |name: &str| categories.is_empty() || categories.iter().any(|c| c == name);
        let mut report = DetailedReport::default();

        if wants("fuel") {
            report.fuel_records = sqlx::query_as::<_, FuelRecordDetail>(FUEL_DETAIL_QUERY)
                .bind(lower)
                .bind(upper)
                .fetch_all(self.pool())
                .await?;
        }

        if wants("reparation") {
            report.reparation_records =
                sqlx::query_as::<_, ReparationRecordDetail>(REPARATION_DETAIL_QUERY)
                    .bind(lower)
                    .bind(upper)
                    .fetch_all(self.pool())
                    .await?;
        }

        if wants("maintenance") {
            report.maintenance_records =
                sqlx::query_as::<_, MaintenanceRecordDetail>(MAINTENANCE_DETAIL_QUERY)
                    .bind(lower)
                    .bind(upper)
                    .fetch_all(self.pool())
                    .await?;
        }

        if wants("purchases") {
            report.purchase_records =
                sqlx::query_as::<_, PurchaseRecordDetail>(PURCHASE_DETAIL_QUERY)
                    .bind(lower)
                    .bind(upper)
                    .fetch_all(self.pool())
                    .await?;
        }

        Ok(report)
    }

    async fn dashboard_counts(&self) -> ApiResult<DashboardCounts> {
        Ok(DashboardCounts {
            total_vehicles: self.count("SELECT COUNT(*) FROM vehicle").await?,
            vehicles_by_status: sqlx::query_as::<_, VehicleStatusCount>(
                "SELECT status, COUNT(*) AS count FROM vehicle GROUP BY status ORDER BY status",
            )
            .fetch_all(self.pool())
            .await?,
            total_drivers: self.count("SELECT COUNT(*) FROM driver").await?,
            active_pannes: self
                .count("SELECT COUNT(*) FROM panne WHERE status = 'active'")
                .await?,
            ongoing_trips: self
                .count("SELECT COUNT(*) FROM trip WHERE status = 'ongoing'")
                .await?,
            total_users: self.count("SELECT COUNT(*) FROM user_account").await?,
            pending_users: self
                .count("SELECT COUNT(*) FROM user_account WHERE status = 'pending_approval'")
                .await?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_queries_order_ascending() {
        for query in [
            FUEL_DETAIL_QUERY,
            REPARATION_DETAIL_QUERY,
            MAINTENANCE_DETAIL_QUERY,
            PURCHASE_DETAIL_QUERY,
        ] {
            assert!(query.contains("ORDER BY"), "detail query must be ordered");
            assert!(
                !query.to_uppercase().contains("DESC"),
                "detail reports are chronological, oldest first"
            );
        }
    }
}
