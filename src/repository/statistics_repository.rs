use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

use crate::{
    domain::Statistics,
    error::{AppError, Result},
    repository::StatisticsRepository,
};

#[derive(FromRow)]
struct StatisticsRow {
    id: String,
    teaching: String,
    nonteaching: String,
    students: String,
    created_at: NaiveDateTime,
}

pub struct SqliteStatisticsRepository {
    pool: SqlitePool,
}

impl SqliteStatisticsRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_statistics(row: StatisticsRow) -> Result<Statistics> {
        Ok(Statistics {
            id: Uuid::parse_str(&row.id).map_err(|e| AppError::Database(e.to_string()))?,
            teaching: row.teaching,
            nonteaching: row.nonteaching,
            students: row.students,
            created_at: DateTime::from_naive_utc_and_offset(row.created_at, Utc),
        })
    }
}

#[async_trait]
impl StatisticsRepository for SqliteStatisticsRepository {
    async fn create(&self, statistics: Statistics) -> Result<Statistics> {
        sqlx::query(
            r#"
            INSERT INTO statistics (id, teaching, nonteaching, students, created_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(statistics.id.to_string())
        .bind(&statistics.teaching)
        .bind(&statistics.nonteaching)
        .bind(&statistics.students)
        .bind(statistics.created_at.naive_utc())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

        self.find_by_id(statistics.id).await?.ok_or_else(|| {
            AppError::Database("Failed to retrieve created statistics".to_string())
        })
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Statistics>> {
        let row = sqlx::query_as::<_, StatisticsRow>(
            r#"
            SELECT id, teaching, nonteaching, students, created_at
            FROM statistics
            WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

        match row {
            Some(r) => Ok(Some(Self::row_to_statistics(r)?)),
            None => Ok(None),
        }
    }

    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Statistics>> {
        let rows = sqlx::query_as::<_, StatisticsRow>(
            r#"
            SELECT id, teaching, nonteaching, students, created_at
            FROM statistics
            ORDER BY created_at DESC
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

        rows.into_iter().map(Self::row_to_statistics).collect()
    }

    async fn count(&self) -> Result<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM statistics")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    async fn update(
        &self,
        id: Uuid,
        teaching: &str,
        nonteaching: &str,
        students: &str,
    ) -> Result<Statistics> {
        sqlx::query(
            r#"
            UPDATE statistics
            SET teaching = ?, nonteaching = ?, students = ?
            WHERE id = ?
            "#,
        )
        .bind(teaching)
        .bind(nonteaching)
        .bind(students)
        .bind(id.to_string())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

        self.find_by_id(id).await?.ok_or_else(|| {
            AppError::Database("Failed to retrieve updated statistics".to_string())
        })
    }
}
