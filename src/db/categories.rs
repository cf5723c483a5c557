//! Category database model.
//!
//! A category with `payment_for_account_id` set is a *payment category*:
//! system-managed, one-to-one with a credit account, always a member of the
//! reserved "Credit Card Payments" group.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Category {
    #[schema(value_type = String, format = "uuid")]
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub color: Option<String>,
    #[schema(value_type = Option<String>, format = "uuid")]
    pub payment_for_account_id: Option<Uuid>,
    #[schema(value_type = Option<String>, format = "uuid")]
    pub group_id: Option<Uuid>,
    #[schema(value_type = String, format = "date-time")]
    pub created_at: DateTime<Utc>,
    #[schema(value_type = String, format = "date-time")]
    pub updated_at: DateTime<Utc>,
}

impl Category {
    pub fn is_payment_category(&self) -> bool {
        self.payment_for_account_id.is_some()
    }
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct DbCategory {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub color: Option<String>,
    pub payment_for_account_id: Option<Uuid>,
    pub group_id: Option<Uuid>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DbCategory {
    pub fn is_payment_category_row(&self) -> bool {
        self.payment_for_account_id.is_some()
    }
}

impl From<DbCategory> for Category {
    fn from(row: DbCategory) -> Self {
        Self {
            id: row.id,
            name: row.name,
            description: row.description,
            color: row.color,
            payment_for_account_id: row.payment_for_account_id,
            group_id: row.group_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
