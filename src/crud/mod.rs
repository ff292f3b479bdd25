//! Data access: one function per statement, raw `sqlx::Error` on failure.

mod expenses;
pub use expenses::*;
