use async_trait::async_trait;
use sqlx::{Postgres, query_builder::QueryBuilder};

use super::PostgresRepository;
use crate::error::{ApiError, ApiResult};
use crate::models::{
    DocumentCategory, DocumentCategoryPayload, DocumentFilter, PageFilter, VehicleDocument,
    VehicleDocumentPayload,
};

const DOCUMENT_COLUMNS: &str =
    "id, category_id, vehicle_id, issued_date, expiration_date, created_at";

/// DocumentStore
///
/// Vehicle paperwork: the `category_document` reference table (which carries
/// a cost column, unlike the plain lookups) and the issued documents
/// attached to vehicles.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn list_document_categories(
        &self,
        filter: &PageFilter,
    ) -> ApiResult<Vec<DocumentCategory>>;
    async fn create_document_category(
        &self,
        payload: &DocumentCategoryPayload,
    ) -> ApiResult<DocumentCategory>;
    async fn update_document_category(
        &self,
        id: i32,
        payload: &DocumentCategoryPayload,
    ) -> ApiResult<DocumentCategory>;
    async fn delete_document_category(&self, id: i32) -> ApiResult<()>;
    async fn document_category_exists(&self, id: i32) -> ApiResult<bool>;

    async fn create_document(&self, payload: &VehicleDocumentPayload) -> ApiResult<VehicleDocument>;
    async fn get_document(&self, id: i32) -> ApiResult<VehicleDocument>;
    async fn list_documents(&self, filter: &DocumentFilter) -> ApiResult<Vec<VehicleDocument>>;
    async fn update_document(
        &self,
        id: i32,
        payload: &VehicleDocumentPayload,
    ) -> ApiResult<VehicleDocument>;
    async fn delete_document(&self, id: i32) -> ApiResult<()>;
    /// Documents whose expiration falls within the next `days` days.
    async fn list_expiring_documents(&self, days: i64) -> ApiResult<Vec<VehicleDocument>>;
}

#[async_trait]
impl DocumentStore for PostgresRepository {
    async fn list_document_categories(
        &self,
        filter: &PageFilter,
    ) -> ApiResult<Vec<DocumentCategory>> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT id, doc_name, cost FROM category_document WHERE 1=1");

        if let Some(search) = filter.search.as_deref().filter(|s| !s.is_empty()) {
            builder.push(" AND doc_name ILIKE ");
            builder.push_bind(format!("%{search}%"));
        }

        builder.push(" ORDER BY id LIMIT ");
        builder.push_bind(filter.limit());
        builder.push(" OFFSET ");
        builder.push_bind(filter.skip());

        let categories = builder
            .build_query_as::<DocumentCategory>()
            .fetch_all(self.pool())
            .await?;
        Ok(categories)
    }

    async fn create_document_category(
        &self,
        payload: &DocumentCategoryPayload,
    ) -> ApiResult<DocumentCategory> {
        let category = sqlx::query_as::<_, DocumentCategory>(
            "INSERT INTO category_document (doc_name, cost) VALUES ($1, $2)
             RETURNING id, doc_name, cost",
        )
        .bind(&payload.doc_name)
        .bind(payload.cost.unwrap_or(0.0))
        .fetch_one(self.pool())
        .await?;
        Ok(category)
    }

    async fn update_document_category(
        &self,
        id: i32,
        payload: &DocumentCategoryPayload,
    ) -> ApiResult<DocumentCategory> {
        sqlx::query_as::<_, DocumentCategory>(
            "UPDATE category_document SET doc_name = $2, cost = COALESCE($3, cost)
             WHERE id = $1
             RETURNING id, doc_name, cost",
        )
        .bind(id)
        .bind(&payload.doc_name)
        .bind(payload.cost)
        .fetch_optional(self.pool())
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Document category with id: {id} does not exist")))
    }

    async fn delete_document_category(&self, id: i32) -> ApiResult<()> {
        let result = sqlx::query("DELETE FROM category_document WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await?;
        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound(format!(
                "Document category with id: {id} does not exist"
            )));
        }
        Ok(())
    }

    async fn document_category_exists(&self, id: i32) -> ApiResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM category_document WHERE id = $1)",
        )
        .bind(id)
        .fetch_one(self.pool())
        .await?;
        Ok(exists)
    }

    async fn create_document(
        &self,
        payload: &VehicleDocumentPayload,
    ) -> ApiResult<VehicleDocument> {
        let document = sqlx::query_as::<_, VehicleDocument>(&format!(
            "INSERT INTO document_vehicule (category_id, vehicle_id, issued_date, expiration_date)
             VALUES ($1, $2, $3, $4)
             RETURNING {DOCUMENT_COLUMNS}"
        ))
        .bind(payload.category_id)
        .bind(payload.vehicle_id)
        .bind(payload.issued_date)
        .bind(payload.expiration_date)
        .fetch_one(self.pool())
        .await?;
        Ok(document)
    }

    async fn get_document(&self, id: i32) -> ApiResult<VehicleDocument> {
        sqlx::query_as::<_, VehicleDocument>(&format!(
            "SELECT {DOCUMENT_COLUMNS} FROM document_vehicule WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool())
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Document with id: {id} was not found")))
    }

    async fn list_documents(&self, filter: &DocumentFilter) -> ApiResult<Vec<VehicleDocument>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(format!(
            "SELECT {DOCUMENT_COLUMNS} FROM document_vehicule WHERE 1=1"
        ));

        if let Some(vehicle_id) = filter.vehicle_id {
            builder.push(" AND vehicle_id = ");
            builder.push_bind(vehicle_id);
        }
        if let Some(category_id) = filter.category_id {
            builder.push(" AND category_id = ");
            builder.push_bind(category_id);
        }

        builder.push(" ORDER BY expiration_date LIMIT ");
        builder.push_bind(filter.limit.unwrap_or(100).clamp(1, 1000));
        builder.push(" OFFSET ");
        builder.push_bind(filter.skip.unwrap_or(0).max(0));

        let documents = builder
            .build_query_as::<VehicleDocument>()
            .fetch_all(self.pool())
            .await?;
        Ok(documents)
    }

    async fn update_document(
        &self,
        id: i32,
        payload: &VehicleDocumentPayload,
    ) -> ApiResult<VehicleDocument> {
        sqlx::query_as::<_, VehicleDocument>(&format!(
            "UPDATE document_vehicule
             SET category_id = $2, vehicle_id = $3, issued_date = $4, expiration_date = $5
             WHERE id = $1
             RETURNING {DOCUMENT_COLUMNS}"
        ))
        .bind(id)
        .bind(payload.category_id)
        .bind(payload.vehicle_id)
        .bind(payload.issued_date)
        .bind(payload.expiration_date)
        .fetch_optional(self.pool())
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Document with id: {id} does not exist")))
    }

    async fn delete_document(&self, id: i32) -> ApiResult<()> {
        let result = sqlx::query("DELETE FROM document_vehicule WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await?;
        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound(format!(
                "Document with id: {id} does not exist"
            )));
        }
        Ok(())
    }

    async fn list_expiring_documents(&self, days: i64) -> ApiResult<Vec<VehicleDocument>> {
        let documents = sqlx::query_as::<_, VehicleDocument>(&format!(
            "SELECT {DOCUMENT_COLUMNS} FROM document_vehicule
             WHERE expiration_date >= NOW()
               AND expiration_date <= NOW() + make_interval(days => $1)
             ORDER BY expiration_date"
        ))
        // make_interval takes an i32; clamp rather than truncate so an
        // oversized horizon cannot wrap into a tiny or negative window.
        .bind(days.clamp(0, i32::MAX as i64) as i32)
        .fetch_all(self.pool())
        .await?;
        Ok(documents)
    }
}
