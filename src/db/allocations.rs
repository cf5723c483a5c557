//! Allocation database model — intent: money assigned to a category in a
//! calendar month. At most one row per `(category_id, period)`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Allocation {
    #[schema(value_type = String, format = "uuid")]
    pub id: Uuid,
    #[schema(value_type = String, format = "uuid")]
    pub category_id: Uuid,
    #[schema(example = "2024-01")]
    pub period: String,
    pub amount: i64,
    pub notes: Option<String>,
    #[schema(value_type = String, format = "date-time")]
    pub created_at: DateTime<Utc>,
    #[schema(value_type = String, format = "date-time")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct DbAllocation {
    pub id: Uuid,
    pub category_id: Uuid,
    pub period: String,
    pub amount: i64,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<DbAllocation> for Allocation {
    fn from(row: DbAllocation) -> Self {
        Self {
            id: row.id,
            category_id: row.category_id,
            period: row.period,
            amount: row.amount,
            notes: row.notes,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
