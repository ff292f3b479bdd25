//! Expense statements against one already-acquired connection.
//! Mutations run in their own transaction: committed on success, rolled back on drop.

use crate::models::{Expense, ExpenseCreate, ExpenseUpdate};
use crate::sql::{assignments, update_expense as update_statement, DELETE_SQL, INSERT_SQL, SELECT_ALL_SQL, SELECT_BY_ID_SQL};
use sqlx::{Connection, PgConnection};

/// Insert one row. `id` and both timestamps are assigned by the database.
pub async fn create_expense(conn: &mut PgConnection, expense: &ExpenseCreate) -> Result<Expense, sqlx::Error> {
    let mut tx = conn.begin().await?;
    tracing::debug!(sql = %INSERT_SQL, category = %expense.category, "query");
    let row = sqlx::query_as::<_, Expense>(INSERT_SQL)
        .bind(expense.amount)
        .bind(&expense.category)
        .bind(&expense.description)
        .bind(expense.date)
        .fetch_one(&mut *tx)
        .await?;
    tx.commit().await?;
    Ok(row)
}

pub async fn get_expense(conn: &mut PgConnection, id: i64) -> Result<Option<Expense>, sqlx::Error> {
    tracing::debug!(sql = %SELECT_BY_ID_SQL, id, "query");
    sqlx::query_as::<_, Expense>(SELECT_BY_ID_SQL)
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
}

/// All rows, newest `date` first; same-day rows newest insert first.
pub async fn list_expenses(conn: &mut PgConnection) -> Result<Vec<Expense>, sqlx::Error> {
    tracing::debug!(sql = %SELECT_ALL_SQL, "query");
    sqlx::query_as::<_, Expense>(SELECT_ALL_SQL).fetch_all(&mut *conn).await
}

/// Overwrite only the supplied fields and touch `updated_at`. `None` when no row has `id`.
pub async fn update_expense(
    conn: &mut PgConnection,
    id: i64,
    update: &ExpenseUpdate,
) -> Result<Option<Expense>, sqlx::Error> {
    let mut qb = update_statement(id, assignments(update));
    let mut tx = conn.begin().await?;
    tracing::debug!(sql = %qb.sql(), id, "query");
    let row = qb.build_query_as::<Expense>().fetch_optional(&mut *tx).await?;
    match row {
        Some(row) => {
            tx.commit().await?;
            Ok(Some(row))
        }
        None => Ok(None),
    }
}

/// Hard delete. Returns whether a row existed.
pub async fn delete_expense(conn: &mut PgConnection, id: i64) -> Result<bool, sqlx::Error> {
    let mut tx = conn.begin().await?;
    tracing::debug!(sql = %DELETE_SQL, id, "query");
    let affected = sqlx::query(DELETE_SQL).bind(id).execute(&mut *tx).await?.rows_affected();
    if affected == 0 {
        return Ok(false);
    }
    tx.commit().await?;
    Ok(true)
}
