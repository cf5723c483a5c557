//! Internal: create the one-to-one payment category for a newly created
//! credit account. Not exposed over HTTP — only `create_account` calls this.

use sqlx::{Postgres, Transaction};
use uuid::Uuid;

use crate::db::categories::{Category, DbCategory};
use crate::db::category_groups::RESERVED_GROUP_ID;
use crate::errors::AppError;

pub async fn create_payment_category(
    tx: &mut Transaction<'_, Postgres>,
    account_id: Uuid,
    account_name: &str,
) -> Result<Category, AppError> {
    let name = format!("{account_name} Payment");

    let row = sqlx::query_as::<_, DbCategory>(
        r#"
        INSERT INTO categories (name, payment_for_account_id, group_id)
        VALUES ($1, $2, $3)
        RETURNING id, name, description, color, payment_for_account_id, group_id, deleted_at, created_at, updated_at
        "#,
    )
    .bind(&name)
    .bind(account_id)
    .bind(RESERVED_GROUP_ID)
    .fetch_one(&mut **tx)
    .await
    .map_err(|e| match &e {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            AppError::conflict(format!("account {account_id} already has a payment category"))
        }
        _ => AppError::from(e),
    })?;

    Ok(row.into())
}
