use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::asset::errors::AssetError;
use crate::domain::asset::models::Asset;
use crate::domain::asset::models::AssetName;
use crate::domain::asset::ports::AssetRepository;
use crate::domain::user::models::UserId;

pub struct PostgresAssetRepository {
    pool: PgPool,
}

impl PostgresAssetRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct AssetRow {
    name: String,
    data: Vec<u8>,
}

fn database_error(e: sqlx::Error) -> AssetError {
    AssetError::DatabaseError(e.to_string())
}

#[async_trait]
impl AssetRepository for PostgresAssetRepository {
    async fn list(
        &self,
        user_id: UserId,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Asset>, AssetError> {
        let rows = sqlx::query_as::<_, AssetRow>(
            r#"
            SELECT name, data
            FROM assets
            WHERE user_id = $1 AND deleted = FALSE
            ORDER BY name
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(user_id.as_i64())
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(rows
            .into_iter()
            .map(|r| Asset {
                name: AssetName::from_stored(r.name),
                data: r.data,
            })
            .collect())
    }

    async fn find(
        &self,
        user_id: UserId,
        name: &AssetName,
    ) -> Result<Option<Vec<u8>>, AssetError> {
        sqlx::query_scalar::<_, Vec<u8>>(
            r#"
            SELECT data
            FROM assets
            WHERE user_id = $1 AND name = $2 AND deleted = FALSE
            "#,
        )
        .bind(user_id.as_i64())
        .bind(name.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)
    }

    async fn insert_if_absent(
        &self,
        user_id: UserId,
        name: &AssetName,
        data: &[u8],
    ) -> Result<(), AssetError> {
        sqlx::query(
            r#"
            INSERT INTO assets (name, user_id, data, created_at)
            VALUES ($1, $2, $3, NOW())
            ON CONFLICT (name, user_id)
            DO NOTHING
            "#,
        )
        .bind(name.as_str())
        .bind(user_id.as_i64())
        .bind(data)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(())
    }

    async fn upsert(
        &self,
        user_id: UserId,
        name: &AssetName,
        data: &[u8],
    ) -> Result<(), AssetError> {
        sqlx::query(
            r#"
            INSERT INTO assets (name, user_id, data, created_at)
            VALUES ($1, $2, $3, NOW())
            ON CONFLICT (name, user_id)
            DO UPDATE SET data = EXCLUDED.data, created_at = EXCLUDED.created_at
            "#,
        )
        .bind(name.as_str())
        .bind(user_id.as_i64())
        .bind(data)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(())
    }

    async fn soft_delete(&self, user_id: UserId, name: &AssetName) -> Result<(), AssetError> {
        sqlx::query("UPDATE assets SET deleted = TRUE WHERE name = $1 AND user_id = $2")
            .bind(name.as_str())
            .bind(user_id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(database_error)?;

        Ok(())
    }

    async fn hard_delete(&self, user_id: UserId, name: &AssetName) -> Result<(), AssetError> {
        sqlx::query("DELETE FROM assets WHERE name = $1 AND user_id = $2")
            .bind(name.as_str())
            .bind(user_id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(database_error)?;

        Ok(())
    }
}
