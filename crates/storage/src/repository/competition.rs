use sqlx::{PgPool, QueryBuilder};

use crate::dto::common::CompetitionFilter;
use crate::dto::competition::CreateCompetitionRequest;
use crate::error::{Result, StorageError};
use crate::models::Competition;

const COMPETITION_COLUMNS: &str = "competition_id, organizer_id, name, kind, location, \
                                   start_date, end_date, created_at";

/// Repository for Competition database operations
pub struct CompetitionRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CompetitionRepository<'a> {
    /// Create a new CompetitionRepository
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List competitions, newest first, with the total matching count
    pub async fn list(&self, filter: &CompetitionFilter) -> Result<(Vec<Competition>, i64)> {
        let pagination = filter.pagination();

        let mut count_query = QueryBuilder::new("SELECT COUNT(*) FROM competitions WHERE 1=1");
        if let Some(organizer_id) = filter.organizer_id {
            count_query.push(" AND organizer_id = ");
            count_query.push_bind(organizer_id);
        }
        let total_items = count_query
            .build_query_scalar::<i64>()
            .fetch_one(self.pool)
            .await?;

        let mut query = QueryBuilder::new("SELECT ");
        query.push(COMPETITION_COLUMNS);
        query.push(" FROM competitions WHERE 1=1");
        if let Some(organizer_id) = filter.organizer_id {
            query.push(" AND organizer_id = ");
            query.push_bind(organizer_id);
        }
        query.push(" ORDER BY start_date DESC, competition_id DESC LIMIT ");
        query.push_bind(pagination.limit());
        query.push(" OFFSET ");
        query.push_bind(pagination.offset());

        let competitions: Vec<Competition> = query.build_query_as().fetch_all(self.pool).await?;

        Ok((competitions, total_items))
    }

    /// Get a competition by ID
    pub async fn find_by_id(&self, id: i32) -> Result<Competition> {
        let competition = sqlx::query_as::<_, Competition>(&format!(
            "SELECT {COMPETITION_COLUMNS} FROM competitions WHERE competition_id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(competition)
    }

    /// Create a new competition owned by `organizer_id`
    pub async fn create(
        &self,
        organizer_id: i32,
        req: &CreateCompetitionRequest,
    ) -> Result<Competition> {
        let competition = sqlx::query_as::<_, Competition>(&format!(
            r#"
            INSERT INTO competitions (organizer_id, name, kind, location, start_date, end_date)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {COMPETITION_COLUMNS}
            "#
        ))
        .bind(organizer_id)
        .bind(&req.name)
        .bind(&req.kind)
        .bind(&req.location)
        .bind(req.start_date)
        .bind(req.end_date)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            StorageError::from(e)
                .with_constraint_message("Competition already exists", "Organizer does not exist")
        })?;

        Ok(competition)
    }

    pub async fn count_by_organizer(&self, organizer_id: i32) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM competitions WHERE organizer_id = $1",
        )
        .bind(organizer_id)
        .fetch_one(self.pool)
        .await?;

        Ok(count)
    }
}
