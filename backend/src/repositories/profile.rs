//! Profile target repository for database operations

use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Profile target record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProfileTargetRecord {
    pub user_id: Uuid,
    pub target_calories: i32,
    pub formula: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// Profile repository for database operations
pub struct ProfileRepository;

impl ProfileRepository {
    /// Insert or replace the daily calorie target for a user
    pub async fn upsert_target_calories(
        pool: &PgPool,
        user_id: Uuid,
        target_calories: i32,
        formula: Option<&str>,
    ) -> Result<ProfileTargetRecord> {
        let record = sqlx::query_as::<_, ProfileTargetRecord>(
            r#"
            INSERT INTO profiles (user_id, target_calories, formula, updated_at)
            VALUES ($1, $2, $3, NOW())
            ON CONFLICT (user_id) DO UPDATE SET
                target_calories = EXCLUDED.target_calories,
                formula = EXCLUDED.formula,
                updated_at = NOW()
            RETURNING user_id, target_calories, formula, updated_at
            "#,
        )
        .bind(user_id)
        .bind(target_calories)
        .bind(formula)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// Get the stored daily calorie target for a user
    pub async fn get_target(pool: &PgPool, user_id: Uuid) -> Result<Option<ProfileTargetRecord>> {
        let record = sqlx::query_as::<_, ProfileTargetRecord>(
            r#"
            SELECT user_id, target_calories, formula, updated_at
            FROM profiles
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }
}
