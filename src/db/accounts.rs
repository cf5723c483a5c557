//! Account database model.
//!
//! This module provides the database model for the `accounts` table — real
//! cash/debt positions whose `balance` is authoritative and adjusted in the
//! same transaction as the row change that causes it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Account type — controlled from code, stored as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Checking,
    Savings,
    Cash,
    Credit,
}

impl AccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Checking => "checking",
            AccountType::Savings => "savings",
            AccountType::Cash => "cash",
            AccountType::Credit => "credit",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "checking" => Some(AccountType::Checking),
            "savings" => Some(AccountType::Savings),
            "cash" => Some(AccountType::Cash),
            "credit" => Some(AccountType::Credit),
            _ => None,
        }
    }

    pub fn is_credit(&self) -> bool {
        matches!(self, AccountType::Credit)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Account {
    #[schema(value_type = String, format = "uuid")]
    pub id: Uuid,
    pub name: String,
    pub balance: i64,
    #[schema(value_type = String)]
    pub r#type: AccountType,
    #[schema(value_type = String, format = "date-time")]
    pub created_at: DateTime<Utc>,
    #[schema(value_type = String, format = "date-time")]
    pub updated_at: DateTime<Utc>,
}

/// Database row structure for accounts — `type` is stored as text and
/// converted at the boundary.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct DbAccount {
    pub id: Uuid,
    pub name: String,
    pub balance: i64,
    pub r#type: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<DbAccount> for Account {
    fn from(row: DbAccount) -> Self {
        Self {
            id: row.id,
            name: row.name,
            balance: row.balance,
            r#type: AccountType::from_str(&row.r#type).unwrap_or(AccountType::Checking),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
