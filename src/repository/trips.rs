use async_trait::async_trait;
use sqlx::{Postgres, query_builder::QueryBuilder};

use super::PostgresRepository;
use crate::error::{ApiError, ApiResult};
use crate::models::{Trip, TripFilter, TripPayload};

const TRIP_COLUMNS: &str = "id, vehicle_id, driver_id, start_location, end_location, start_time, \
     end_time, purpose, notes, status, created_at, updated_at";

/// TripStore
///
/// Trip persistence. Vehicle/driver references are validated by the callers
/// before insertion so missing ones report as 404s with a useful message.
#[async_trait]
pub trait TripStore: Send + Sync {
    async fn create_trip(&self, payload: &TripPayload) -> ApiResult<Trip>;
    async fn get_trip(&self, id: i32) -> ApiResult<Trip>;
    async fn list_trips(&self, filter: &TripFilter) -> ApiResult<Vec<Trip>>;
    async fn update_trip(&self, id: i32, payload: &TripPayload) -> ApiResult<Trip>;
    async fn set_trip_status(&self, id: i32, status: &str) -> ApiResult<()>;
    async fn delete_trip(&self, id: i32) -> ApiResult<()>;
}

#[async_trait]
impl TripStore for PostgresRepository {
    async fn create_trip(&self, payload: &TripPayload) -> ApiResult<Trip> {
        let trip = sqlx::query_as::<_, Trip>(&format!(
            "INSERT INTO trip (vehicle_id, driver_id, start_location, end_location, start_time,
                 end_time, purpose, notes, status)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {TRIP_COLUMNS}"
        ))
        .bind(payload.vehicle_id)
        .bind(payload.driver_id)
        .bind(&payload.start_location)
        .bind(&payload.end_location)
        .bind(payload.start_time)
        .bind(payload.end_time)
        .bind(payload.purpose.as_deref())
        .bind(payload.notes.as_deref())
        .bind(payload.status.as_deref().unwrap_or("planned"))
        .fetch_one(self.pool())
        .await?;
        Ok(trip)
    }

    async fn get_trip(&self, id: i32) -> ApiResult<Trip> {
        sqlx::query_as::<_, Trip>(&format!("SELECT {TRIP_COLUMNS} FROM trip WHERE id = $1"))
            .bind(id)
            .fetch_optional(self.pool())
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("Trip with id: {id} was not found")))
    }

    async fn list_trips(&self, filter: &TripFilter) -> ApiResult<Vec<Trip>> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {TRIP_COLUMNS} FROM trip WHERE 1=1"));

        if let Some(vehicle_id) = filter.vehicle_id {
            builder.push(" AND vehicle_id = ");
            builder.push_bind(vehicle_id);
        }
        if let Some(driver_id) = filter.driver_id {
            builder.push(" AND driver_id = ");
            builder.push_bind(driver_id);
        }
        if let Some(status) = filter.status.as_deref().filter(|s| !s.is_empty()) {
            builder.push(" AND status = ");
            builder.push_bind(status.to_string());
        }

        builder.push(" ORDER BY start_time DESC LIMIT ");
        builder.push_bind(filter.limit.unwrap_or(100).clamp(1, 1000));
        builder.push(" OFFSET ");
        builder.push_bind(filter.skip.unwrap_or(0).max(0));

        let trips = builder
            .build_query_as::<Trip>()
            .fetch_all(self.pool())
            .await?;
        Ok(trips)
    }

    async fn update_trip(&self, id: i32, payload: &TripPayload) -> ApiResult<Trip> {
        sqlx::query_as::<_, Trip>(&format!(
            "UPDATE trip
             SET vehicle_id = $2, driver_id = $3, start_location = $4, end_location = $5,
                 start_time = $6, end_time = $7, purpose = $8, notes = $9,
                 status = COALESCE($10, status), updated_at = NOW()
             WHERE id = $1
             RETURNING {TRIP_COLUMNS}"
        ))
        .bind(id)
        .bind(payload.vehicle_id)
        .bind(payload.driver_id)
        .bind(&payload.start_location)
        .bind(&payload.end_location)
        .bind(payload.start_time)
        .bind(payload.end_time)
        .bind(payload.purpose.as_deref())
        .bind(payload.notes.as_deref())
        .bind(payload.status.as_deref())
        .fetch_optional(self.pool())
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Trip with id: {id} does not exist")))
    }

    async fn set_trip_status(&self, id: i32, status: &str) -> ApiResult<()> {
        let result = sqlx::query("UPDATE trip SET status = $2, updated_at = NOW() WHERE id = $1")
            .bind(id)
            .bind(status)
            .execute(self.pool())
            .await?;
        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound(format!("Trip with id {id} not found")));
        }
        Ok(())
    }

    async fn delete_trip(&self, id: i32) -> ApiResult<()> {
        let result = sqlx::query("DELETE FROM trip WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await?;
        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound(format!(
                "Trip with id: {id} does not exist"
            )));
        }
        Ok(())
    }
}
