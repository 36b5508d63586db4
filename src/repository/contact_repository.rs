use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

use crate::{
    domain::ContactInquiry,
    error::{AppError, Result},
    repository::ContactRepository,
};

#[derive(FromRow)]
struct ContactRow {
    id: String,
    name: String,
    email: String,
    mobile: String,
    address: String,
    course_strand: String,
    message: String,
    is_done: i32,
    created_at: NaiveDateTime,
}

pub struct SqliteContactRepository {
    pool: SqlitePool,
}

impl SqliteContactRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_inquiry(row: ContactRow) -> Result<ContactInquiry> {
        Ok(ContactInquiry {
            id: Uuid::parse_str(&row.id).map_err(|e| AppError::Database(e.to_string()))?,
            name: row.name,
            email: row.email,
            mobile: row.mobile,
            address: row.address,
            course_strand: row.course_strand,
            message: row.message,
            is_done: row.is_done != 0,
            created_at: DateTime::from_naive_utc_and_offset(row.created_at, Utc),
        })
    }
}

#[async_trait]
impl ContactRepository for SqliteContactRepository {
    async fn create(&self, inquiry: ContactInquiry) -> Result<ContactInquiry> {
        let is_done_int = if inquiry.is_done { 1i32 } else { 0i32 };

        sqlx::query(
            r#"
            INSERT INTO contact_inquiries (
                id, name, email, mobile, address, course_strand, message,
                is_done, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(inquiry.id.to_string())
        .bind(&inquiry.name)
        .bind(&inquiry.email)
        .bind(&inquiry.mobile)
        .bind(&inquiry.address)
        .bind(&inquiry.course_strand)
        .bind(&inquiry.message)
        .bind(is_done_int)
        .bind(inquiry.created_at.naive_utc())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

        self.find_by_id(inquiry.id).await?.ok_or_else(|| {
            AppError::Database("Failed to retrieve created contact inquiry".to_string())
        })
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ContactInquiry>> {
        let row = sqlx::query_as::<_, ContactRow>(
            r#"
            SELECT id, name, email, mobile, address, course_strand, message,
                   is_done, created_at
            FROM contact_inquiries
            WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

        match row {
            Some(r) => Ok(Some(Self::row_to_inquiry(r)?)),
            None => Ok(None),
        }
    }

    async fn list(
        &self,
        limit: i64,
        offset: i64,
        is_done: Option<bool>,
    ) -> Result<Vec<ContactInquiry>> {
        // The admin dashboard filters open vs. handled inquiries
        let rows = match is_done {
            Some(flag) => {
                sqlx::query_as::<_, ContactRow>(
                    r#"
                    SELECT id, name, email, mobile, address, course_strand, message,
                           is_done, created_at
                    FROM contact_inquiries
                    WHERE is_done = ?
                    ORDER BY created_at DESC
                    LIMIT ? OFFSET ?
                    "#,
                )
                .bind(if flag { 1i32 } else { 0i32 })
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, ContactRow>(
                    r#"
                    SELECT id, name, email, mobile, address, course_strand, message,
                           is_done, created_at
                    FROM contact_inquiries
                    ORDER BY created_at DESC
                    LIMIT ? OFFSET ?
                    "#,
                )
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(|e| AppError::Database(e.to_string()))?;

        rows.into_iter().map(Self::row_to_inquiry).collect()
    }

    async fn count(&self, is_done: Option<bool>) -> Result<i64> {
        let count = match is_done {
            Some(flag) => {
                sqlx::query_scalar::<_, i64>(
                    "SELECT COUNT(*) FROM contact_inquiries WHERE is_done = ?",
                )
                .bind(if flag { 1i32 } else { 0i32 })
                .fetch_one(&self.pool)
                .await
            }
            None => {
                sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM contact_inquiries")
                    .fetch_one(&self.pool)
                    .await
            }
        }
        .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(count)
    }

    async fn set_done(&self, id: Uuid, is_done: bool) -> Result<ContactInquiry> {
        sqlx::query("UPDATE contact_inquiries SET is_done = ? WHERE id = ?")
            .bind(if is_done { 1i32 } else { 0i32 })
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        self.find_by_id(id).await?.ok_or_else(|| {
            AppError::Database("Failed to retrieve updated contact inquiry".to_string())
        })
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        sqlx::query("DELETE FROM contact_inquiries WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(())
    }
}
