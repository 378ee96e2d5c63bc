use async_trait::async_trait;
use sqlx::{Postgres, query_builder::QueryBuilder};

use super::PostgresRepository;
use crate::error::{ApiError, ApiResult};
use crate::models::{Driver, DriverPayload, PageFilter};

const DRIVER_COLUMNS: &str = "id, first_name, last_name, cni_number, email, matricule, created_at";

/// DriverStore
///
/// Driver persistence. CNI number, email and matricule uniqueness is enforced
/// by the schema; violations surface as 409s through the error mapping.
#[async_trait]
pub trait DriverStore: Send + Sync {
    async fn create_driver(&self, payload: &DriverPayload) -> ApiResult<Driver>;
    async fn get_driver(&self, id: i32) -> ApiResult<Driver>;
    async fn list_drivers(&self, filter: &PageFilter) -> ApiResult<Vec<Driver>>;
    async fn update_driver(&self, id: i32, payload: &DriverPayload) -> ApiResult<Driver>;
    async fn delete_driver(&self, id: i32) -> ApiResult<()>;
}

#[async_trait]
impl DriverStore for PostgresRepository {
    async fn create_driver(&self, payload: &DriverPayload) -> ApiResult<Driver> {
        let driver = sqlx::query_as::<_, Driver>(
            "INSERT INTO driver (first_name, last_name, cni_number, email, matricule)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id, first_name, last_name, cni_number, email, matricule, created_at",
        )
        .bind(&payload.first_name)
        .bind(&payload.last_name)
        .bind(&payload.cni_number)
        .bind(&payload.email)
        .bind(&payload.matricule)
        .fetch_one(self.pool())
        .await?;
        Ok(driver)
    }

    async fn get_driver(&self, id: i32) -> ApiResult<Driver> {
        sqlx::query_as::<_, Driver>(&format!(
            "SELECT {DRIVER_COLUMNS} FROM driver WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool())
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Driver with id: {id} was not found")))
    }

    /// The search term matches names (including the concatenated full name),
    /// CNI number, email and matricule, mirroring the admin screen's single
    /// search box.
    async fn list_drivers(&self, filter: &PageFilter) -> ApiResult<Vec<Driver>> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {DRIVER_COLUMNS} FROM driver WHERE 1=1"));

        if let Some(search) = filter.search.as_deref().filter(|s| !s.is_empty()) {
            let pattern = format!("%{search}%");
            builder.push(" AND (first_name ILIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" OR last_name ILIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" OR (first_name || ' ' || last_name) ILIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" OR cni_number ILIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" OR email ILIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" OR matricule ILIKE ");
            builder.push_bind(pattern);
            builder.push(")");
        }

        builder.push(" ORDER BY last_name, first_name LIMIT ");
        builder.push_bind(filter.limit());
        builder.push(" OFFSET ");
        builder.push_bind(filter.skip());

        let drivers = builder
            .build_query_as::<Driver>()
            .fetch_all(self.pool())
            .await?;
        Ok(drivers)
    }

    async fn update_driver(&self, id: i32, payload: &DriverPayload) -> ApiResult<Driver> {
        sqlx::query_as::<_, Driver>(
            "UPDATE driver
             SET first_name = $2, last_name = $3, cni_number = $4, email = $5, matricule = $6
             WHERE id = $1
             RETURNING id, first_name, last_name, cni_number, email, matricule, created_at",
        )
        .bind(id)
        .bind(&payload.first_name)
        .bind(&payload.last_name)
        .bind(&payload.cni_number)
        .bind(&payload.email)
        .bind(&payload.matricule)
        .fetch_optional(self.pool())
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Driver with id: {id} does not exist")))
    }

    async fn delete_driver(&self, id: i32) -> ApiResult<()> {
        let result = sqlx::query("DELETE FROM driver WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await?;
        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound(format!(
                "Driver with id: {id} does not exist"
            )));
        }
        Ok(())
    }
}
