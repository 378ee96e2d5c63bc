use async_trait::async_trait;
use sqlx::{Postgres, query_builder::QueryBuilder};

use super::PostgresRepository;
use crate::error::{ApiError, ApiResult};
use crate::models::{PageFilter, Vehicle, VehiclePayload};

const VEHICLE_COLUMNS: &str = "id, make_id, model_id, year, plate_number, mileage, engine_size, \
     vehicle_type_id, transmission_id, fuel_type_id, vin, color, purchase_price, purchase_date, \
     status, registration_date";

/// VehicleStore
///
/// Vehicle persistence. The plate number carries a unique constraint; the
/// lookup foreign keys are validated by the schema (broken references map to
/// 400s).
#[async_trait]
pub trait VehicleStore: Send + Sync {
    async fn create_vehicle(&self, payload: &VehiclePayload) -> ApiResult<Vehicle>;
    async fn get_vehicle(&self, id: i32) -> ApiResult<Vehicle>;
    /// Search applies to the plate number only, as in the original listing.
    async fn list_vehicles(&self, filter: &PageFilter) -> ApiResult<Vec<Vehicle>>;
    async fn update_vehicle(&self, id: i32, payload: &VehiclePayload) -> ApiResult<Vehicle>;
    /// Status-only update for the PATCH endpoint.
    async fn set_vehicle_status(&self, id: i32, status: &str) -> ApiResult<()>;
    async fn delete_vehicle(&self, id: i32) -> ApiResult<()>;
}

#[async_trait]
impl VehicleStore for PostgresRepository {
    async fn create_vehicle(&self, payload: &VehiclePayload) -> ApiResult<Vehicle> {
        let vehicle = sqlx::query_as::<_, Vehicle>(&format!(
            "INSERT INTO vehicle (make_id, model_id, year, plate_number, mileage, engine_size,
                 vehicle_type_id, transmission_id, fuel_type_id, vin, color, purchase_price,
                 purchase_date, status)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
             RETURNING {VEHICLE_COLUMNS}"
        ))
        .bind(payload.make_id)
        .bind(payload.model_id)
        .bind(payload.year)
        .bind(&payload.plate_number)
        .bind(payload.mileage.unwrap_or(0.0))
        .bind(payload.engine_size.unwrap_or(0.0))
        .bind(payload.vehicle_type_id)
        .bind(payload.transmission_id)
        .bind(payload.fuel_type_id)
        .bind(&payload.vin)
        .bind(&payload.color)
        .bind(payload.purchase_price.unwrap_or(0.0))
        .bind(payload.purchase_date)
        .bind(payload.status.as_deref().unwrap_or("available"))
        .fetch_one(self.pool())
        .await?;
        Ok(vehicle)
    }

    async fn get_vehicle(&self, id: i32) -> ApiResult<Vehicle> {
        sqlx::query_as::<_, Vehicle>(&format!(
            "SELECT {VEHICLE_COLUMNS} FROM vehicle WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool())
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Vehicle with id: {id} was not found")))
    }

    async fn list_vehicles(&self, filter: &PageFilter) -> ApiResult<Vec<Vehicle>> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {VEHICLE_COLUMNS} FROM vehicle WHERE 1=1"));

        if let Some(search) = filter.search.as_deref().filter(|s| !s.is_empty()) {
            builder.push(" AND plate_number ILIKE ");
            builder.push_bind(format!("%{search}%"));
        }

        builder.push(" ORDER BY id LIMIT ");
        builder.push_bind(filter.limit());
        builder.push(" OFFSET ");
        builder.push_bind(filter.skip());

        let vehicles = builder
            .build_query_as::<Vehicle>()
            .fetch_all(self.pool())
            .await?;
        Ok(vehicles)
    }

    async fn update_vehicle(&self, id: i32, payload: &VehiclePayload) -> ApiResult<Vehicle> {
        sqlx::query_as::<_, Vehicle>(&format!(
            "UPDATE vehicle
             SET make_id = $2, model_id = $3, year = $4, plate_number = $5, mileage = $6,
                 engine_size = $7, vehicle_type_id = $8, transmission_id = $9, fuel_type_id = $10,
                 vin = $11, color = $12, purchase_price = $13, purchase_date = $14,
                 status = COALESCE($15, status)
             WHERE id = $1
             RETURNING {VEHICLE_COLUMNS}"
        ))
        .bind(id)
        .bind(payload.make_id)
        .bind(payload.model_id)
        .bind(payload.year)
        .bind(&payload.plate_number)
        .bind(payload.mileage.unwrap_or(0.0))
        .bind(payload.engine_size.unwrap_or(0.0))
        .bind(payload.vehicle_type_id)
        .bind(payload.transmission_id)
        .bind(payload.fuel_type_id)
        .bind(&payload.vin)
        .bind(&payload.color)
        .bind(payload.purchase_price.unwrap_or(0.0))
        .bind(payload.purchase_date)
        .bind(payload.status.as_deref())
        .fetch_optional(self.pool())
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Vehicle with id: {id} does not exist")))
    }

    async fn set_vehicle_status(&self, id: i32, status: &str) -> ApiResult<()> {
        let result = sqlx::query("UPDATE vehicle SET status = $2 WHERE id = $1")
            .bind(id)
            .bind(status)
            .execute(self.pool())
            .await?;
        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound(format!(
                "Vehicle with id {id} not found"
            )));
        }
        Ok(())
    }

    async fn delete_vehicle(&self, id: i32) -> ApiResult<()> {
        let result = sqlx::query("DELETE FROM vehicle WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await?;
        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound(format!(
                "Vehicle with id: {id} does not exist"
            )));
        }
        Ok(())
    }
}
