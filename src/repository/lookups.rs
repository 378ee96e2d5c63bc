use async_trait::async_trait;
use sqlx::{Postgres, query_builder::QueryBuilder};

use super::PostgresRepository;
use crate::error::{ApiError, ApiResult};
use crate::models::{LookupItem, LookupKind, LookupPayload, PageFilter};

/// LookupStore
///
/// One implementation for the eight single-column reference tables. The
/// table and column names come from `LookupKind`, which only ever yields
/// static identifiers, so interpolating them into SQL is safe.
#[async_trait]
pub trait LookupStore: Send + Sync {
    async fn list_lookup(&self, kind: LookupKind, filter: &PageFilter)
    -> ApiResult<Vec<LookupItem>>;
    async fn get_lookup(&self, kind: LookupKind, id: i32) -> ApiResult<LookupItem>;
    async fn create_lookup(&self, kind: LookupKind, payload: &LookupPayload)
    -> ApiResult<LookupItem>;
    async fn update_lookup(
        &self,
        kind: LookupKind,
        id: i32,
        payload: &LookupPayload,
    ) -> ApiResult<LookupItem>;
    async fn delete_lookup(&self, kind: LookupKind, id: i32) -> ApiResult<()>;
    async fn lookup_exists(&self, kind: LookupKind, id: i32) -> ApiResult<bool>;
}

#[async_trait]
impl LookupStore for PostgresRepository {
    async fn list_lookup(
        &self,
        kind: LookupKind,
        filter: &PageFilter,
    ) -> ApiResult<Vec<LookupItem>> {
        let (table, column) = (kind.table(), kind.column());
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(format!(
            "SELECT id, {column} AS label FROM {table} WHERE 1=1"
        ));

        if let Some(search) = filter.search.as_deref().filter(|s| !s.is_empty()) {
            builder.push(format!(" AND {column} ILIKE "));
            builder.push_bind(format!("%{search}%"));
        }

        builder.push(format!(" ORDER BY {column} LIMIT "));
        builder.push_bind(filter.limit());
        builder.push(" OFFSET ");
        builder.push_bind(filter.skip());

        let items = builder
            .build_query_as::<LookupItem>()
            .fetch_all(self.pool())
            .await?;
        Ok(items)
    }

    async fn get_lookup(&self, kind: LookupKind, id: i32) -> ApiResult<LookupItem> {
        let (table, column) = (kind.table(), kind.column());
        sqlx::query_as::<_, LookupItem>(&format!(
            "SELECT id, {column} AS label FROM {table} WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool())
        .await?
        .ok_or_else(|| {
            ApiError::NotFound(format!(
                "{} with id: {id} was not found",
                kind.display_name()
            ))
        })
    }

    async fn create_lookup(
        &self,
        kind: LookupKind,
        payload: &LookupPayload,
    ) -> ApiResult<LookupItem> {
        let (table, column) = (kind.table(), kind.column());
        let item = sqlx::query_as::<_, LookupItem>(&format!(
            "INSERT INTO {table} ({column}) VALUES ($1) RETURNING id, {column} AS label"
        ))
        .bind(&payload.label)
        .fetch_one(self.pool())
        .await?;
        Ok(item)
    }

    async fn update_lookup(
        &self,
        kind: LookupKind,
        id: i32,
        payload: &LookupPayload,
    ) -> ApiResult<LookupItem> {
        let (table, column) = (kind.table(), kind.column());
        sqlx::query_as::<_, LookupItem>(&format!(
            "UPDATE {table} SET {column} = $2 WHERE id = $1 RETURNING id, {column} AS label"
        ))
        .bind(id)
        .bind(&payload.label)
        .fetch_optional(self.pool())
        .await?
        .ok_or_else(|| {
            ApiError::NotFound(format!(
                "{} with id: {id} does not exist",
                kind.display_name()
            ))
        })
    }

    async fn delete_lookup(&self, kind: LookupKind, id: i32) -> ApiResult<()> {
        let result = sqlx::query(&format!("DELETE FROM {} WHERE id = $1", kind.table()))
            .bind(id)
            .execute(self.pool())
            .await?;
        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound(format!(
                "{} with id: {id} does not exist",
                kind.display_name()
            )));
        }
        Ok(())
    }

    async fn lookup_exists(&self, kind: LookupKind, id: i32) -> ApiResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(&format!(
            "SELECT EXISTS(SELECT 1 FROM {} WHERE id = $1)",
            kind.table()
        ))
        .bind(id)
        .fetch_one(self.pool())
        .await?;
        Ok(exists)
    }
}
