//! Request extractors that reject bad input before any connection is taken.

mod expense_id;
mod validated;
pub use expense_id::ExpenseId;
pub use validated::ValidatedJson;
