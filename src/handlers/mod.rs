//! HTTP handlers for expense CRUD.

pub mod expenses;
