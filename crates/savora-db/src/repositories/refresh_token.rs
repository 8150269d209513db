//! PostgreSQL implementation of RefreshTokenRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use savora_core::traits::{RefreshToken, RefreshTokenRepository, RepoResult};

use crate::models::RefreshTokenModel;

use super::error::map_db_error;

/// PostgreSQL implementation of RefreshTokenRepository.
///
/// Rows are append-only. Redemption uses a conditional update so that two
/// concurrent redemptions of the same token cannot both succeed.
#[derive(Clone)]
pub struct PgRefreshTokenRepository {
    pool: PgPool,
}

impl PgRefreshTokenRepository {
    /// Create a new PgRefreshTokenRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RefreshTokenRepository for PgRefreshTokenRepository {
    #[instrument(skip(self, token))]
    async fn create(&self, token: &RefreshToken) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO refresh_tokens (id, jwt_id, user_id, created_at, expires_at, used, invalidated)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(&token.id)
        .bind(&token.jwt_id)
        .bind(token.user_id)
        .bind(token.created_at)
        .bind(token.expires_at)
        .bind(token.used)
        .bind(token.invalidated)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, id))]
    async fn find_by_id(&self, id: &str) -> RepoResult<Option<RefreshToken>> {
        let result = sqlx::query_as::<_, RefreshTokenModel>(
            r"
            SELECT id, jwt_id, user_id, created_at, expires_at, used, invalidated
            FROM refresh_tokens
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(RefreshToken::from))
    }

    #[instrument(skip(self, id))]
    async fn redeem(&self, id: &str) -> RepoResult<bool> {
        // Conditional update: only one of two racing redemptions can flip
        // `used` from FALSE to TRUE.
        let result = sqlx::query(
            r"
            UPDATE refresh_tokens
            SET used = TRUE
            WHERE id = $1 AND used = FALSE AND invalidated = FALSE
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self, id))]
    async fn invalidate(&self, id: &str) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            UPDATE refresh_tokens
            SET invalidated = TRUE
            WHERE id = $1 AND invalidated = FALSE
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn invalidate_all_for_user(&self, user_id: i64) -> RepoResult<u64> {
        let result = sqlx::query(
            r"
            UPDATE refresh_tokens
            SET invalidated = TRUE
            WHERE user_id = $1 AND used = FALSE AND invalidated = FALSE
            ",
        )
        .bind(user_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgRefreshTokenRepository>();
    }
}
