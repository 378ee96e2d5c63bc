use async_trait::async_trait;
use sqlx::{Postgres, query_builder::QueryBuilder};

use super::{PostgresRepository, day_end_exclusive, day_start};
use crate::error::{ApiError, ApiResult};
use crate::models::{
    Panne, PanneFilter, PannePayload, PanneUpdate, Reparation, ReparationFilter, ReparationPayload,
    ReparationUpdate,
};

const PANNE_COLUMNS: &str =
    "p.id, p.vehicle_id, p.category_panne_id, p.description, p.status, p.panne_date, p.created_at";

const REPARATION_COLUMNS: &str =
    "r.id, r.panne_id, r.garage_id, r.cost, r.receipt, r.repair_date, r.status";

/// IncidentStore
///
/// Pannes (breakdowns) and the reparations that resolve them.
#[async_trait]
pub trait IncidentStore: Send + Sync {
    async fn create_panne(&self, payload: &PannePayload) -> ApiResult<Panne>;
    async fn get_panne(&self, id: i32) -> ApiResult<Panne>;
    async fn list_pannes(&self, filter: &PanneFilter) -> ApiResult<Vec<Panne>>;
    async fn update_panne(&self, id: i32, update: &PanneUpdate) -> ApiResult<Panne>;
    async fn delete_panne(&self, id: i32) -> ApiResult<()>;

    async fn create_reparation(&self, payload: &ReparationPayload) -> ApiResult<Reparation>;
    async fn get_reparation(&self, id: i32) -> ApiResult<Reparation>;
    async fn list_reparations(&self, filter: &ReparationFilter) -> ApiResult<Vec<Reparation>>;
    async fn update_reparation(&self, id: i32, update: &ReparationUpdate) -> ApiResult<Reparation>;
    async fn delete_reparation(&self, id: i32) -> ApiResult<()>;
}

#[async_trait]
impl IncidentStore for PostgresRepository {
    async fn create_panne(&self, payload: &PannePayload) -> ApiResult<Panne> {
        let panne = sqlx::query_as::<_, Panne>(
            "INSERT INTO panne (vehicle_id, category_panne_id, description, status, panne_date)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id, vehicle_id, category_panne_id, description, status, panne_date, created_at",
        )
        .bind(payload.vehicle_id)
        .bind(payload.category_panne_id)
        .bind(payload.description.as_deref())
        .bind(payload.status.as_deref().unwrap_or("active"))
        .bind(payload.panne_date)
        .fetch_one(self.pool())
        .await?;
        Ok(panne)
    }

    async fn get_panne(&self, id: i32) -> ApiResult<Panne> {
        sqlx::query_as::<_, Panne>(
            "SELECT id, vehicle_id, category_panne_id, description, status, panne_date, created_at
             FROM panne WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool())
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Panne with id: {id} was not found")))
    }

    async fn list_pannes(&self, filter: &PanneFilter) -> ApiResult<Vec<Panne>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(format!(
            "SELECT {PANNE_COLUMNS} FROM panne p
             LEFT JOIN vehicle v ON p.vehicle_id = v.id
             LEFT JOIN category_panne cp ON p.category_panne_id = cp.id
             WHERE 1=1"
        ));

        if let Some(vehicle_id) = filter.vehicle_id {
            builder.push(" AND p.vehicle_id = ");
            builder.push_bind(vehicle_id);
        }
        if let Some(category_id) = filter.category_panne_id {
            builder.push(" AND p.category_panne_id = ");
            builder.push_bind(category_id);
        }
        if let Some(status) = filter.status.as_deref().filter(|s| !s.is_empty()) {
            builder.push(" AND p.status = ");
            builder.push_bind(status.to_string());
        }
        if let Some(search) = filter.search.as_deref().filter(|s| !s.is_empty()) {
            let pattern = format!("%{search}%");
            builder.push(" AND (p.description ILIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" OR p.status ILIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" OR v.plate_number ILIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" OR cp.panne_name ILIKE ");
            builder.push_bind(pattern);
            builder.push(")");
        }

        builder.push(" ORDER BY p.panne_date DESC LIMIT ");
        builder.push_bind(filter.limit.unwrap_or(100).clamp(1, 1000));
        builder.push(" OFFSET ");
        builder.push_bind(filter.skip.unwrap_or(0).max(0));

        let pannes = builder
            .build_query_as::<Panne>()
            .fetch_all(self.pool())
            .await?;
        Ok(pannes)
    }

    async fn update_panne(&self, id: i32, update: &PanneUpdate) -> ApiResult<Panne> {
        sqlx::query_as::<_, Panne>(
            "UPDATE panne
             SET vehicle_id = COALESCE($2, vehicle_id),
                 category_panne_id = COALESCE($3, category_panne_id),
                 description = COALESCE($4, description),
                 status = COALESCE($5, status),
                 panne_date = COALESCE($6, panne_date)
             WHERE id = $1
             RETURNING id, vehicle_id, category_panne_id, description, status, panne_date, created_at",
        )
        .bind(id)
        .bind(update.vehicle_id)
        .bind(update.category_panne_id)
        .bind(update.description.as_deref())
        .bind(update.status.as_deref())
        .bind(update.panne_date)
        .fetch_optional(self.pool())
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Panne with id: {id} does not exist")))
    }

    async fn delete_panne(&self, id: i32) -> ApiResult<()> {
        let result = sqlx::query("DELETE FROM panne WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await?;
        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound(format!(
                "Panne with id: {id} does not exist"
            )));
        }
        Ok(())
    }

    async fn create_reparation(&self, payload: &ReparationPayload) -> ApiResult<Reparation> {
        let reparation = sqlx::query_as::<_, Reparation>(
            "INSERT INTO reparation (panne_id, garage_id, cost, receipt, repair_date, status)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING id, panne_id, garage_id, cost, receipt, repair_date, status",
        )
        .bind(payload.panne_id)
        .bind(payload.garage_id)
        .bind(payload.cost)
        .bind(&payload.receipt)
        .bind(payload.repair_date)
        .bind(payload.status.as_deref().unwrap_or("in_progress"))
        .fetch_one(self.pool())
        .await?;
        Ok(reparation)
    }

    async fn get_reparation(&self, id: i32) -> ApiResult<Reparation> {
        sqlx::query_as::<_, Reparation>(
            "SELECT id, panne_id, garage_id, cost, receipt, repair_date, status
             FROM reparation WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool())
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Reparation with id: {id} was not found")))
    }

    async fn list_reparations(&self, filter: &ReparationFilter) -> ApiResult<Vec<Reparation>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(format!(
            "SELECT {REPARATION_COLUMNS} FROM reparation r
             LEFT JOIN panne p ON r.panne_id = p.id
             LEFT JOIN garage g ON r.garage_id = g.id
             WHERE 1=1"
        ));

        if let Some(panne_id) = filter.panne_id {
            builder.push(" AND r.panne_id = ");
            builder.push_bind(panne_id);
        }
        if let Some(garage_id) = filter.garage_id {
            builder.push(" AND r.garage_id = ");
            builder.push_bind(garage_id);
        }
        if let Some(status) = filter.status.as_deref().filter(|s| !s.is_empty()) {
            builder.push(" AND r.status = ");
            builder.push_bind(status.to_string());
        }
        if let Some(start) = filter.start_date {
            builder.push(" AND r.repair_date >= ");
            builder.push_bind(day_start(start));
        }
        if let Some(end) = filter.end_date {
            builder.push(" AND r.repair_date < ");
            builder.push_bind(day_end_exclusive(end));
        }
        if let Some(search) = filter.search.as_deref().filter(|s| !s.is_empty()) {
            let pattern = format!("%{search}%");
            builder.push(" AND (r.receipt ILIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" OR r.status ILIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" OR p.description ILIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" OR g.nom_garage ILIKE ");
            builder.push_bind(pattern);
            builder.push(")");
        }

        builder.push(" ORDER BY r.repair_date DESC LIMIT ");
        builder.push_bind(filter.limit.unwrap_or(100).clamp(1, 1000));
        builder.push(" OFFSET ");
        builder.push_bind(filter.skip.unwrap_or(0).max(0));

        let reparations = builder
            .build_query_as::<Reparation>()
            .fetch_all(self.pool())
            .await?;
        Ok(reparations)
    }

    async fn update_reparation(&self, id: i32, update: &ReparationUpdate) -> ApiResult<Reparation> {
        sqlx::query_as::<_, Reparation>(
            "UPDATE reparation
             SET panne_id = COALESCE($2, panne_id),
                 garage_id = COALESCE($3, garage_id),
                 cost = COALESCE($4, cost),
                 receipt = COALESCE($5, receipt),
                 repair_date = COALESCE($6, repair_date),
                 status = COALESCE($7, status)
             WHERE id = $1
             RETURNING id, panne_id, garage_id, cost, receipt, repair_date, status",
        )
        .bind(id)
        .bind(update.panne_id)
        .bind(update.garage_id)
        .bind(update.cost)
        .bind(update.receipt.as_deref())
        .bind(update.repair_date)
        .bind(update.status.as_deref())
        .fetch_optional(self.pool())
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Reparation with id: {id} does not exist")))
    }

    async fn delete_reparation(&self, id: i32) -> ApiResult<()> {
        let result = sqlx::query("DELETE FROM reparation WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await?;
        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound(format!(
                "Reparation with id: {id} does not exist"
            )));
        }
        Ok(())
    }
}
