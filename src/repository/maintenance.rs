use async_trait::async_trait;
use sqlx::{Postgres, query_builder::QueryBuilder};

use super::PostgresRepository;
use crate::error::{ApiError, ApiResult};
use crate::models::{Maintenance, MaintenancePayload, PageFilter};

const MAINTENANCE_COLUMNS: &str = "m.id, m.category_id, m.vehicle_id, m.garage_id, \
     m.maintenance_cost, m.receipt, m.maintenance_date, m.status, m.created_at";

/// MaintenanceStore
#[async_trait]
pub trait MaintenanceStore: Send + Sync {
    async fn create_maintenance(&self, payload: &MaintenancePayload) -> ApiResult<Maintenance>;
    async fn get_maintenance(&self, id: i32) -> ApiResult<Maintenance>;
    /// Search joins the vehicle plate, category name and garage name so the
    /// single search box covers everything shown in the table.
    async fn list_maintenance(&self, filter: &PageFilter) -> ApiResult<Vec<Maintenance>>;
    async fn update_maintenance(
        &self,
        id: i32,
        payload: &MaintenancePayload,
    ) -> ApiResult<Maintenance>;
    async fn delete_maintenance(&self, id: i32) -> ApiResult<()>;
}

#[async_trait]
impl MaintenanceStore for PostgresRepository {
    async fn create_maintenance(&self, payload: &MaintenancePayload) -> ApiResult<Maintenance> {
        let maintenance = sqlx::query_as::<_, Maintenance>(
            "INSERT INTO maintenance (category_id, vehicle_id, garage_id, maintenance_cost,
                 receipt, maintenance_date, status)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING id, category_id, vehicle_id, garage_id, maintenance_cost, receipt,
                 maintenance_date, status, created_at",
        )
        .bind(payload.category_id)
        .bind(payload.vehicle_id)
        .bind(payload.garage_id)
        .bind(payload.maintenance_cost)
        .bind(&payload.receipt)
        .bind(payload.maintenance_date)
        .bind(payload.status.as_deref().unwrap_or("active"))
        .fetch_one(self.pool())
        .await?;
        Ok(maintenance)
    }

    async fn get_maintenance(&self, id: i32) -> ApiResult<Maintenance> {
        sqlx::query_as::<_, Maintenance>(
            "SELECT id, category_id, vehicle_id, garage_id, maintenance_cost, receipt,
                 maintenance_date, status, created_at
             FROM maintenance WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool())
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Maintenance log with id: {id} was not found")))
    }

    async fn list_maintenance(&self, filter: &PageFilter) -> ApiResult<Vec<Maintenance>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(format!(
            "SELECT {MAINTENANCE_COLUMNS} FROM maintenance m
             LEFT JOIN vehicle v ON m.vehicle_id = v.id
             LEFT JOIN category_maintenance cm ON m.category_id = cm.id
             LEFT JOIN garage g ON m.garage_id = g.id
             WHERE 1=1"
        ));

        if let Some(search) = filter.search.as_deref().filter(|s| !s.is_empty()) {
            let pattern = format!("%{search}%");
            builder.push(" AND (m.receipt ILIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" OR v.plate_number ILIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" OR cm.cat_maintenance ILIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" OR g.nom_garage ILIKE ");
            builder.push_bind(pattern);
            builder.push(")");
        }

        builder.push(" ORDER BY m.maintenance_date DESC LIMIT ");
        builder.push_bind(filter.limit());
        builder.push(" OFFSET ");
        builder.push_bind(filter.skip());

        let rows = builder
            .build_query_as::<Maintenance>()
            .fetch_all(self.pool())
            .await?;
        Ok(rows)
    }

    async fn update_maintenance(
        &self,
        id: i32,
        payload: &MaintenancePayload,
    ) -> ApiResult<Maintenance> {
        sqlx::query_as::<_, Maintenance>(
            "UPDATE maintenance
             SET category_id = $2, vehicle_id = $3, garage_id = $4, maintenance_cost = $5,
                 receipt = $6, maintenance_date = $7, status = COALESCE($8, status)
             WHERE id = $1
             RETURNING id, category_id, vehicle_id, garage_id, maintenance_cost, receipt,
                 maintenance_date, status, created_at",
        )
        .bind(id)
        .bind(payload.category_id)
        .bind(payload.vehicle_id)
        .bind(payload.garage_id)
        .bind(payload.maintenance_cost)
        .bind(&payload.receipt)
        .bind(payload.maintenance_date)
        .bind(payload.status.as_deref())
        .fetch_optional(self.pool())
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Maintenance log with id: {id} does not exist")))
    }

    async fn delete_maintenance(&self, id: i32) -> ApiResult<()> {
        let result = sqlx::query("DELETE FROM maintenance WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await?;
        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound(format!(
                "Maintenance log with id: {id} does not exist"
            )));
        }
        Ok(())
    }
}
