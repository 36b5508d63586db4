use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

use crate::{
    domain::Achievement,
    error::{AppError, Result},
    repository::AchievementRepository,
};

#[derive(FromRow)]
struct AchievementRow {
    id: String,
    category: String,
    headline: String,
    description: String,
    image_path: Option<String>,
    created_at: NaiveDateTime,
}

pub struct SqliteAchievementRepository {
    pool: SqlitePool,
}

impl SqliteAchievementRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_achievement(row: AchievementRow) -> Result<Achievement> {
        Ok(Achievement {
            id: Uuid::parse_str(&row.id).map_err(|e| AppError::Database(e.to_string()))?,
            category: row.category,
            headline: row.headline,
            description: row.description,
            image_path: row.image_path,
            created_at: DateTime::from_naive_utc_and_offset(row.created_at, Utc),
        })
    }
}

#[async_trait]
impl AchievementRepository for SqliteAchievementRepository {
    async fn create(&self, achievement: Achievement) -> Result<Achievement> {
        sqlx::query(
            r#"
            INSERT INTO achievements (id, category, headline, description, image_path, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(achievement.id.to_string())
        .bind(&achievement.category)
        .bind(&achievement.headline)
        .bind(&achievement.description)
        .bind(&achievement.image_path)
        .bind(achievement.created_at.naive_utc())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

        self.find_by_id(achievement.id).await?.ok_or_else(|| {
            AppError::Database("Failed to retrieve created achievement".to_string())
        })
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Achievement>> {
        let row = sqlx::query_as::<_, AchievementRow>(
            r#"
            SELECT id, category, headline, description, image_path, created_at
            FROM achievements
            WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

        match row {
            Some(r) => Ok(Some(Self::row_to_achievement(r)?)),
            None => Ok(None),
        }
    }

    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Achievement>> {
        let rows = sqlx::query_as::<_, AchievementRow>(
            r#"
            SELECT id, category, headline, description, image_path, created_at
            FROM achievements
            ORDER BY created_at DESC
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

        rows.into_iter().map(Self::row_to_achievement).collect()
    }

    async fn count(&self) -> Result<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM achievements")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        sqlx::query("DELETE FROM achievements WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(())
    }
}
