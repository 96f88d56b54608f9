use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::wish::model::Wish;
use business::domain::wish::repository::WishRepository;

use crate::db::map_sqlx_error;

pub struct WishRepositoryPostgres {
    pool: PgPool,
}

impl WishRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WishRepository for WishRepositoryPostgres {
    async fn insert(&self, wish: &Wish) -> Result<(), RepositoryError> {
        // The primary key arbitrates concurrent adds; the loser affects no row.
        let result = sqlx::query(
            "INSERT INTO wishes (user_id, product_id) VALUES ($1, $2) ON CONFLICT (user_id, product_id) DO NOTHING",
        )
        .bind(wish.user_id.as_str())
        .bind(wish.product_id.value())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::Duplicated);
        }
        Ok(())
    }

    async fn delete(&self, wish: &Wish) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM wishes WHERE user_id = $1 AND product_id = $2")
            .bind(wish.user_id.as_str())
            .bind(wish.product_id.value())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
