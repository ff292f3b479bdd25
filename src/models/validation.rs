//! Field rules for expense request bodies. All failing fields are reported together.

use crate::error::ValidationErrors;
use crate::models::{ExpenseCreate, ExpenseUpdate};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_json::{Map, Value};
use std::str::FromStr;

pub const CATEGORY_MAX_CHARS: usize = 100;
pub const DESCRIPTION_MAX_CHARS: usize = 255;
pub const AMOUNT_MAX_DIGITS: u32 = 10;
pub const AMOUNT_DECIMAL_PLACES: u32 = 2;

/// Input shapes built from a raw JSON body. `today` bounds the expense date.
pub trait Validate: Sized {
    fn validate(body: &Map<String, Value>, today: NaiveDate) -> Result<Self, ValidationErrors>;

    fn from_json(value: Value, today: NaiveDate) -> Result<Self, ValidationErrors> {
        match value {
            Value::Object(map) => Self::validate(&map, today),
            _ => Err(ValidationErrors::single("body", "must be a JSON object")),
        }
    }
}

impl Validate for ExpenseCreate {
    fn validate(body: &Map<String, Value>, today: NaiveDate) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        let amount = required(body, "amount", &mut errors).and_then(|v| check(parse_amount(v), "amount", &mut errors));
        let category = required(body, "category", &mut errors).and_then(|v| check(parse_category(v), "category", &mut errors));
        let description = optional(body, "description").and_then(|v| check(parse_description(v), "description", &mut errors));
        let date = required(body, "date", &mut errors).and_then(|v| check(parse_date(v, today), "date", &mut errors));

        match (amount, category, date) {
            (Some(amount), Some(category), Some(date)) if errors.is_empty() => Ok(ExpenseCreate {
                amount,
                category,
                description,
                date,
            }),
            _ => Err(errors),
        }
    }
}

impl Validate for ExpenseUpdate {
    fn validate(body: &Map<String, Value>, today: NaiveDate) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        let update = ExpenseUpdate {
            amount: optional(body, "amount").and_then(|v| check(parse_amount(v), "amount", &mut errors)),
            category: optional(body, "category").and_then(|v| check(parse_category(v), "category", &mut errors)),
            description: optional(body, "description").and_then(|v| check(parse_description(v), "description", &mut errors)),
            date: optional(body, "date").and_then(|v| check(parse_date(v, today), "date", &mut errors)),
        };
        if errors.is_empty() {
            Ok(update)
        } else {
            Err(errors)
        }
    }
}

/// Present and non-null, else records "field required".
fn required<'a>(body: &'a Map<String, Value>, field: &str, errors: &mut ValidationErrors) -> Option<&'a Value> {
    let value = optional(body, field);
    if value.is_none() {
        errors.push(field, "field required");
    }
    value
}

/// Null counts as absent.
fn optional<'a>(body: &'a Map<String, Value>, field: &str) -> Option<&'a Value> {
    body.get(field).filter(|v| !v.is_null())
}

fn check<T>(result: Result<T, String>, field: &str, errors: &mut ValidationErrors) -> Option<T> {
    match result {
        Ok(v) => Some(v),
        Err(message) => {
            errors.push(field, message);
            None
        }
    }
}

fn parse_amount(v: &Value) -> Result<Decimal, String> {
    let amount = match v {
        Value::Number(n) => {
            let s = n.to_string();
            Decimal::from_str(&s)
                .or_else(|_| Decimal::from_scientific(&s))
                .map_err(|_| "must be a valid decimal number".to_string())?
        }
        Value::String(s) => Decimal::from_str(s.trim()).map_err(|_| "must be a valid decimal number".to_string())?,
        _ => return Err("must be a decimal number".into()),
    };
    if amount <= Decimal::ZERO {
        return Err("must be greater than 0".into());
    }
    if amount.normalize().scale() > AMOUNT_DECIMAL_PLACES {
        return Err(format!("must have at most {} decimal places", AMOUNT_DECIMAL_PLACES));
    }
    let integer_limit = Decimal::from(10_i64.pow(AMOUNT_MAX_DIGITS - AMOUNT_DECIMAL_PLACES));
    if amount.trunc() >= integer_limit {
        return Err(format!("must have at most {} digits in total", AMOUNT_MAX_DIGITS));
    }
    Ok(amount)
}

fn parse_category(v: &Value) -> Result<String, String> {
    let s = v.as_str().ok_or_else(|| "must be a string".to_string())?;
    let len = s.chars().count();
    if len == 0 {
        return Err("must not be empty".into());
    }
    if len > CATEGORY_MAX_CHARS {
        return Err(format!("must be at most {} characters", CATEGORY_MAX_CHARS));
    }
    Ok(s.to_string())
}

fn parse_description(v: &Value) -> Result<String, String> {
    let s = v.as_str().ok_or_else(|| "must be a string".to_string())?;
    if s.chars().count() > DESCRIPTION_MAX_CHARS {
        return Err(format!("must be at most {} characters", DESCRIPTION_MAX_CHARS));
    }
    Ok(s.to_string())
}

fn parse_date(v: &Value, today: NaiveDate) -> Result<NaiveDate, String> {
    let s = v.as_str().ok_or_else(|| "must be a date string (YYYY-MM-DD)".to_string())?;
    if !is_iso_date_shape(s) {
        return Err("must be a valid date (YYYY-MM-DD)".into());
    }
    let date = NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| "must be a valid date (YYYY-MM-DD)".to_string())?;
    if date > today {
        return Err("must not be in the future".into());
    }
    Ok(date)
}

/// Exactly `YYYY-MM-DD`: zero-padded, no sign, no surrounding text.
fn is_iso_date_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}
