use async_trait::async_trait;
use sqlx::{Postgres, query_builder::QueryBuilder};

use super::{PostgresRepository, day_end_exclusive, day_start};
use crate::error::{ApiError, ApiResult};
use crate::models::{FuelFilter, FuelRecord, FuelUpdate, fuel::compute_cost};

const FUEL_COLUMNS: &str =
    "id, vehicle_id, fuel_type_id, quantity, price_per_liter, cost, created_at";

/// FuelStore
///
/// Fuel-record persistence. The stored cost is always the rounded product of
/// quantity and unit price; updates that touch either input recompute it.
#[async_trait]
pub trait FuelStore: Send + Sync {
    async fn create_fuel(
        &self,
        vehicle_id: i32,
        fuel_type_id: i32,
        quantity: f64,
        price_per_liter: f64,
    ) -> ApiResult<FuelRecord>;
    async fn get_fuel(&self, id: i32) -> ApiResult<FuelRecord>;
    async fn list_fuel(&self, filter: &FuelFilter) -> ApiResult<Vec<FuelRecord>>;
    async fn update_fuel(&self, id: i32, update: &FuelUpdate) -> ApiResult<FuelRecord>;
    async fn delete_fuel(&self, id: i32) -> ApiResult<()>;
}

#[async_trait]
impl FuelStore for PostgresRepository {
    async fn create_fuel(
        &self,
        vehicle_id: i32,
        fuel_type_id: i32,
        quantity: f64,
        price_per_liter: f64,
    ) -> ApiResult<FuelRecord> {
        let record = sqlx::query_as::<_, FuelRecord>(&format!(
            "INSERT INTO fuel (vehicle_id, fuel_type_id, quantity, price_per_liter, cost)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {FUEL_COLUMNS}"
        ))
        .bind(vehicle_id)
        .bind(fuel_type_id)
        .bind(quantity)
        .bind(price_per_liter)
        .bind(compute_cost(quantity, price_per_liter))
        .fetch_one(self.pool())
        .await?;
        Ok(record)
    }

    async fn get_fuel(&self, id: i32) -> ApiResult<FuelRecord> {
        sqlx::query_as::<_, FuelRecord>(&format!("SELECT {FUEL_COLUMNS} FROM fuel WHERE id = $1"))
            .bind(id)
            .fetch_optional(self.pool())
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("Fuel record with id: {id} was not found")))
    }

    async fn list_fuel(&self, filter: &FuelFilter) -> ApiResult<Vec<FuelRecord>> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {FUEL_COLUMNS} FROM fuel WHERE 1=1"));

        if let Some(vehicle_id) = filter.vehicle_id {
            builder.push(" AND vehicle_id = ");
            builder.push_bind(vehicle_id);
        }
        if let Some(fuel_type_id) = filter.fuel_type_id {
            builder.push(" AND fuel_type_id = ");
            builder.push_bind(fuel_type_id);
        }
        if let Some(after) = filter.date_after {
            builder.push(" AND created_at >= ");
            builder.push_bind(day_start(after));
        }
        if let Some(before) = filter.date_before {
            builder.push(" AND created_at < ");
            builder.push_bind(day_end_exclusive(before));
        }

        builder.push(" ORDER BY created_at DESC LIMIT ");
        builder.push_bind(filter.limit.unwrap_or(100).clamp(1, 1000));
        builder.push(" OFFSET ");
        builder.push_bind(filter.skip.unwrap_or(0).max(0));

        let records = builder
            .build_query_as::<FuelRecord>()
            .fetch_all(self.pool())
            .await?;
        Ok(records)
    }

    async fn update_fuel(&self, id: i32, update: &FuelUpdate) -> ApiResult<FuelRecord> {
        // Read-merge-write so the recomputed cost sees the effective pair.
        let current = self.get_fuel(id).await?;
        let quantity = update.quantity.unwrap_or(current.quantity);
        let price_per_liter = update.price_per_liter.unwrap_or(current.price_per_liter);

        let record = sqlx::query_as::<_, FuelRecord>(&format!(
            "UPDATE fuel
             SET vehicle_id = $2, fuel_type_id = $3, quantity = $4, price_per_liter = $5, cost = $6
             WHERE id = $1
             RETURNING {FUEL_COLUMNS}"
        ))
        .bind(id)
        .bind(update.vehicle_id.unwrap_or(current.vehicle_id))
        .bind(update.fuel_type_id.unwrap_or(current.fuel_type_id))
        .bind(quantity)
        .bind(price_per_liter)
        .bind(compute_cost(quantity, price_per_liter))
        .fetch_one(self.pool())
        .await?;
        Ok(record)
    }

    async fn delete_fuel(&self, id: i32) -> ApiResult<()> {
        let result = sqlx::query("DELETE FROM fuel WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await?;
        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound(format!(
                "Fuel record with id: {id} does not exist"
            )));
        }
        Ok(())
    }
}
