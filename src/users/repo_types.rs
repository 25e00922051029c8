use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// User record in the database.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    #[serde(skip_serializing)]
    #[allow(dead_code)] // only bound and compared in SQL, never read in Rust
    pub password: String,
    pub name: Option<String>,
    pub created_at: OffsetDateTime,
}
