//! Expense entity and the request shapes validated before the service layer.

mod expense;
pub mod validation;
pub use expense::{Expense, ExpenseCreate, ExpenseUpdate};
pub use validation::Validate;
