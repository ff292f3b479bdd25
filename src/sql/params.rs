//! Column assignments collected from an update shape, bound as typed parameters.

use crate::models::ExpenseUpdate;
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// A value that can be bound to one expense column.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    Decimal(Decimal),
    Text(String),
    Date(NaiveDate),
}

/// `column = value` pair for an UPDATE. Column names come from this module only.
#[derive(Clone, Debug, PartialEq)]
pub struct Assignment {
    pub column: &'static str,
    pub value: FieldValue,
}

impl Assignment {
    fn new(column: &'static str, value: FieldValue) -> Self {
        Assignment { column, value }
    }
}

/// One assignment per supplied field, in a fixed column order.
pub fn assignments(update: &ExpenseUpdate) -> Vec<Assignment> {
    let mut out = Vec::with_capacity(4);
    if let Some(amount) = update.amount {
        out.push(Assignment::new("amount", FieldValue::Decimal(amount)));
    }
    if let Some(category) = &update.category {
        out.push(Assignment::new("category", FieldValue::Text(category.clone())));
    }
    if let Some(description) = &update.description {
        out.push(Assignment::new("description", FieldValue::Text(description.clone())));
    }
    if let Some(date) = update.date {
        out.push(Assignment::new("date", FieldValue::Date(date)));
    }
    out
}
