use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

use crate::{
    domain::NewsArticle,
    error::{AppError, Result},
    repository::NewsRepository,
};

#[derive(FromRow)]
struct NewsRow {
    id: String,
    title: String,
    author: String,
    content: String,
    images: String,
    created_at: NaiveDateTime,
}

pub struct SqliteNewsRepository {
    pool: SqlitePool,
}

impl SqliteNewsRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_article(row: NewsRow) -> Result<NewsArticle> {
        // images is a JSON array column; an unreadable value is a data bug,
        // not a request error
        let images: Vec<String> = serde_json::from_str(&row.images)
            .map_err(|e| AppError::Database(format!("Invalid images column: {}", e)))?;

        Ok(NewsArticle {
            id: Uuid::parse_str(&row.id).map_err(|e| AppError::Database(e.to_string()))?,
            title: row.title,
            author: row.author,
            content: row.content,
            images,
            created_at: DateTime::from_naive_utc_and_offset(row.created_at, Utc),
        })
    }
}

#[async_trait]
impl NewsRepository for SqliteNewsRepository {
    async fn create(&self, article: NewsArticle) -> Result<NewsArticle> {
        let id_str = article.id.to_string();
        let images_json = serde_json::to_string(&article.images)
            .map_err(|e| AppError::Internal(format!("Failed to encode images: {}", e)))?;

        sqlx::query(
            r#"
            INSERT INTO news (id, title, author, content, images, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&id_str)
        .bind(&article.title)
        .bind(&article.author)
        .bind(&article.content)
        .bind(&images_json)
        .bind(article.created_at.naive_utc())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

        self.find_by_id(article.id).await?.ok_or_else(|| {
            AppError::Database("Failed to retrieve created news article".to_string())
        })
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<NewsArticle>> {
        let row = sqlx::query_as::<_, NewsRow>(
            r#"
            SELECT id, title, author, content, images, created_at
            FROM news
            WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

        match row {
            Some(r) => Ok(Some(Self::row_to_article(r)?)),
            None => Ok(None),
        }
    }

    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<NewsArticle>> {
        let rows = sqlx::query_as::<_, NewsRow>(
            r#"
            SELECT id, title, author, content, images, created_at
            FROM news
            ORDER BY created_at DESC
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

        rows.into_iter().map(Self::row_to_article).collect()
    }

    async fn count(&self) -> Result<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM news")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        sqlx::query("DELETE FROM news WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(())
    }
}
