//! Category group database model.
//!
//! Pure visual grouping of categories. Exactly one row is reserved — see
//! [`RESERVED_GROUP_ID`] — and carries the "Credit Card Payments" payment
//! categories; it is seeded by `migrations/0001_init.sql` at a fixed id so
//! the kernel never has to look it up by name.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

pub const RESERVED_GROUP_ID: Uuid = Uuid::from_u128(1);

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryGroup {
    #[schema(value_type = String, format = "uuid")]
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub display_order: i32,
    pub is_reserved: bool,
    #[schema(value_type = String, format = "date-time")]
    pub created_at: DateTime<Utc>,
    #[schema(value_type = String, format = "date-time")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct DbCategoryGroup {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub display_order: i32,
    pub is_reserved: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<DbCategoryGroup> for CategoryGroup {
    fn from(row: DbCategoryGroup) -> Self {
        Self {
            id: row.id,
            name: row.name,
            description: row.description,
            display_order: row.display_order,
            is_reserved: row.is_reserved,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
