use async_trait::async_trait;
use sqlx::{Postgres, query_builder::QueryBuilder};

use super::PostgresRepository;
use crate::error::{ApiError, ApiResult};
use crate::models::{PageFilter, UpdateUserRequest, UserAccount};

const USER_COLUMNS: &str = "id, username, email, password, status, created_at";

/// UserStore
///
/// Account persistence. Password hashing happens in the handler layer; this
/// store only ever sees the bcrypt hash.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn create_user(
        &self,
        username: String,
        email: String,
        password_hash: String,
        status: String,
    ) -> ApiResult<UserAccount>;
    async fn get_user(&self, id: i32) -> ApiResult<UserAccount>;
    /// Login lookup: matches either username or email. `None` means unknown
    /// identifier, which the caller folds into a generic credential error.
    async fn find_user_by_identifier(&self, identifier: &str) -> ApiResult<Option<UserAccount>>;
    async fn list_users(&self, filter: &PageFilter) -> ApiResult<Vec<UserAccount>>;
    /// Partial update; `password_hash` replaces the stored hash when present.
    async fn update_user(
        &self,
        id: i32,
        req: &UpdateUserRequest,
        password_hash: Option<String>,
    ) -> ApiResult<UserAccount>;
    async fn delete_user(&self, id: i32) -> ApiResult<()>;
}

#[async_trait]
impl UserStore for PostgresRepository {
    async fn create_user(
        &self,
        username: String,
        email: String,
        password_hash: String,
        status: String,
    ) -> ApiResult<UserAccount> {
        let user = sqlx::query_as::<_, UserAccount>(
            "INSERT INTO user_account (username, email, password, status)
             VALUES ($1, $2, $3, $4)
             RETURNING id, username, email, password, status, created_at",
        )
        .bind(username)
        .bind(email)
        .bind(password_hash)
        .bind(status)
        .fetch_one(self.pool())
        .await?;
        Ok(user)
    }

    async fn get_user(&self, id: i32) -> ApiResult<UserAccount> {
        sqlx::query_as::<_, UserAccount>(&format!(
            "SELECT {USER_COLUMNS} FROM user_account WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool())
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("User with id: {id} was not found")))
    }

    async fn find_user_by_identifier(&self, identifier: &str) -> ApiResult<Option<UserAccount>> {
        let user = sqlx::query_as::<_, UserAccount>(&format!(
            "SELECT {USER_COLUMNS} FROM user_account WHERE email = $1 OR username = $1"
        ))
        .bind(identifier)
        .fetch_optional(self.pool())
        .await?;
        Ok(user)
    }

    async fn list_users(&self, filter: &PageFilter) -> ApiResult<Vec<UserAccount>> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {USER_COLUMNS} FROM user_account WHERE 1=1"));

        if let Some(search) = filter.search.as_deref().filter(|s| !s.is_empty()) {
            let pattern = format!("%{search}%");
            builder.push(" AND (email ILIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" OR username ILIKE ");
            builder.push_bind(pattern);
            builder.push(")");
        }

        builder.push(" ORDER BY id LIMIT ");
        builder.push_bind(filter.limit());
        builder.push(" OFFSET ");
        builder.push_bind(filter.skip());

        let users = builder
            .build_query_as::<UserAccount>()
            .fetch_all(self.pool())
            .await?;
        Ok(users)
    }

    async fn update_user(
        &self,
        id: i32,
        req: &UpdateUserRequest,
        password_hash: Option<String>,
    ) -> ApiResult<UserAccount> {
        // COALESCE keeps any column whose field was not provided.
        sqlx::query_as::<_, UserAccount>(
            "UPDATE user_account
             SET username = COALESCE($2, username),
                 email = COALESCE($3, email),
                 password = COALESCE($4, password),
                 status = COALESCE($5, status)
             WHERE id = $1
             RETURNING id, username, email, password, status, created_at",
        )
        .bind(id)
        .bind(req.username.as_deref())
        .bind(req.email.as_deref())
        .bind(password_hash)
        .bind(req.status.as_deref())
        .fetch_optional(self.pool())
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("User with id: {id} does not exist")))
    }

    async fn delete_user(&self, id: i32) -> ApiResult<()> {
        let result = sqlx::query("DELETE FROM user_account WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await?;
        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound(format!(
                "User with id: {id} does not exist"
            )));
        }
        Ok(())
    }
}
