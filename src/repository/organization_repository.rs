use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

use crate::{
    domain::Organization,
    error::{AppError, Result},
    repository::OrganizationRepository,
};

#[derive(FromRow)]
struct OrganizationRow {
    id: String,
    club_name: String,
    description: String,
    officers: String,
    adviser: String,
    activities: String,
    image_path: String,
    logo_path: String,
    created_at: NaiveDateTime,
}

pub struct SqliteOrganizationRepository {
    pool: SqlitePool,
}

impl SqliteOrganizationRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_organization(row: OrganizationRow) -> Result<Organization> {
        Ok(Organization {
            id: Uuid::parse_str(&row.id).map_err(|e| AppError::Database(e.to_string()))?,
            club_name: row.club_name,
            description: row.description,
            officers: row.officers,
            adviser: row.adviser,
            activities: row.activities,
            image_path: row.image_path,
            logo_path: row.logo_path,
            created_at: DateTime::from_naive_utc_and_offset(row.created_at, Utc),
        })
    }
}

#[async_trait]
impl OrganizationRepository for SqliteOrganizationRepository {
    async fn create(&self, organization: Organization) -> Result<Organization> {
        sqlx::query(
            r#"
            INSERT INTO organizations (
                id, club_name, description, officers, adviser, activities,
                image_path, logo_path, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(organization.id.to_string())
        .bind(&organization.club_name)
        .bind(&organization.description)
        .bind(&organization.officers)
        .bind(&organization.adviser)
        .bind(&organization.activities)
        .bind(&organization.image_path)
        .bind(&organization.logo_path)
        .bind(organization.created_at.naive_utc())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

        self.find_by_id(organization.id).await?.ok_or_else(|| {
            AppError::Database("Failed to retrieve created organization".to_string())
        })
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Organization>> {
        let row = sqlx::query_as::<_, OrganizationRow>(
            r#"
            SELECT id, club_name, description, officers, adviser, activities,
                   image_path, logo_path, created_at
            FROM organizations
            WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

        match row {
            Some(r) => Ok(Some(Self::row_to_organization(r)?)),
            None => Ok(None),
        }
    }

    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Organization>> {
        let rows = sqlx::query_as::<_, OrganizationRow>(
            r#"
            SELECT id, club_name, description, officers, adviser, activities,
                   image_path, logo_path, created_at
            FROM organizations
            ORDER BY created_at DESC
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

        rows.into_iter().map(Self::row_to_organization).collect()
    }

    async fn count(&self) -> Result<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM organizations")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        sqlx::query("DELETE FROM organizations WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(())
    }
}
