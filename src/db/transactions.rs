//! Transaction database model — atomic monetary events.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Normal,
    Transfer,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Normal => "normal",
            TransactionType::Transfer => "transfer",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "normal" => Some(TransactionType::Normal),
            "transfer" => Some(TransactionType::Transfer),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Transaction {
    #[schema(value_type = String, format = "uuid")]
    pub id: Uuid,
    #[schema(value_type = String)]
    pub r#type: TransactionType,
    #[schema(value_type = String, format = "uuid")]
    pub account_id: Uuid,
    #[schema(value_type = Option<String>, format = "uuid")]
    pub transfer_to_account_id: Option<Uuid>,
    #[schema(value_type = Option<String>, format = "uuid")]
    pub category_id: Option<Uuid>,
    pub amount: i64,
    pub description: String,
    #[schema(value_type = String, format = "date")]
    pub date: NaiveDate,
    pub fitid: Option<String>,
    #[schema(value_type = String, format = "date-time")]
    pub created_at: DateTime<Utc>,
    #[schema(value_type = String, format = "date-time")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct DbTransaction {
    pub id: Uuid,
    pub r#type: String,
    pub account_id: Uuid,
    pub transfer_to_account_id: Option<Uuid>,
    pub category_id: Option<Uuid>,
    pub amount: i64,
    pub description: String,
    pub date: NaiveDate,
    pub fitid: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<DbTransaction> for Transaction {
    fn from(row: DbTransaction) -> Self {
        Self {
            id: row.id,
            r#type: TransactionType::from_str(&row.r#type).unwrap_or(TransactionType::Normal),
            account_id: row.account_id,
            transfer_to_account_id: row.transfer_to_account_id,
            category_id: row.category_id,
            amount: row.amount,
            description: row.description,
            date: row.date,
            fitid: row.fitid,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
