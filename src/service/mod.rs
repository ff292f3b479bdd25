//! Business layer between handlers and data access.

mod expenses;
pub use expenses::ExpenseService;
