//! ExpenseService: one CRUD call per method, database faults translated to `ServiceError`.

use crate::crud;
use crate::error::ServiceError;
use crate::models::{Expense, ExpenseCreate, ExpenseUpdate};
use sqlx::pool::PoolConnection;
use sqlx::{PgConnection, Postgres};
use std::ops::DerefMut;

/// Service bound to a single connection for the lifetime of one request.
/// Dropping the service releases a pooled connection.
pub struct ExpenseService<C = PoolConnection<Postgres>> {
    conn: C,
}

impl<C> ExpenseService<C>
where
    C: DerefMut<Target = PgConnection>,
{
    pub fn new(conn: C) -> Self {
        ExpenseService { conn }
    }

    pub async fn create(&mut self, expense: &ExpenseCreate) -> Result<Expense, ServiceError> {
        Ok(crud::create_expense(&mut *self.conn, expense).await?)
    }

    pub async fn get_all(&mut self) -> Result<Vec<Expense>, ServiceError> {
        Ok(crud::list_expenses(&mut *self.conn).await?)
    }

    pub async fn get_by_id(&mut self, id: i64) -> Result<Expense, ServiceError> {
        crud::get_expense(&mut *self.conn, id)
            .await?
            .ok_or(ServiceError::NotFound(id))
    }

    /// An empty update still refreshes `updated_at`.
    pub async fn update(&mut self, id: i64, update: &ExpenseUpdate) -> Result<Expense, ServiceError> {
        crud::update_expense(&mut *self.conn, id, update)
            .await?
            .ok_or(ServiceError::NotFound(id))
    }

    pub async fn delete(&mut self, id: i64) -> Result<(), ServiceError> {
        if crud::delete_expense(&mut *self.conn, id).await? {
            Ok(())
        } else {
            Err(ServiceError::NotFound(id))
        }
    }
}
