use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Team {
    pub team_id: i32,
    pub name: String,
    pub mentor: Option<String>,
    pub created_at: chrono::NaiveDateTime,
}
