use sqlx::PgPool;

use crate::dto::people::CreateOrganizerRequest;
use crate::error::{Result, StorageError};
use crate::models::Organizer;

pub struct OrganizerRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> OrganizerRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Organizer> {
        let organizer = sqlx::query_as::<_, Organizer>(
            r#"
            SELECT organizer_id, last_name, first_name, patronymic, position,
                   qualification, created_at
            FROM organizers
            WHERE organizer_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(organizer)
    }

    pub async fn create(&self, req: &CreateOrganizerRequest) -> Result<Organizer> {
        let organizer = sqlx::query_as::<_, Organizer>(
            r#"
            INSERT INTO organizers (last_name, first_name, patronymic, position, qualification)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING organizer_id, last_name, first_name, patronymic, position,
                      qualification, created_at
            "#,
        )
        .bind(&req.last_name)
        .bind(&req.first_name)
        .bind(&req.patronymic)
        .bind(&req.position)
        .bind(&req.qualification)
        .fetch_one(self.pool)
        .await?;

        Ok(organizer)
    }
}
