//! Parameterized statements for the expenses table.

use crate::sql::params::{Assignment, FieldValue};
use sqlx::{Postgres, QueryBuilder};

pub const EXPENSES_TABLE: &str = "expenses";

/// Column list shared by every statement that returns rows.
pub const EXPENSE_COLUMNS: &str = "id, amount, category, description, date, created_at, updated_at";

/// Both timestamps come from one `clock_timestamp()` so they are equal at insert.
pub const INSERT_SQL: &str = "INSERT INTO expenses (amount, category, description, date, created_at, updated_at) \
     SELECT $1, $2, $3, $4, now_ts.ts, now_ts.ts FROM (SELECT clock_timestamp() AS ts) AS now_ts \
     RETURNING id, amount, category, description, date, created_at, updated_at";

pub const SELECT_BY_ID_SQL: &str =
    "SELECT id, amount, category, description, date, created_at, updated_at FROM expenses WHERE id = $1";

pub const SELECT_ALL_SQL: &str =
    "SELECT id, amount, category, description, date, created_at, updated_at FROM expenses ORDER BY date DESC, id DESC";

pub const DELETE_SQL: &str = "DELETE FROM expenses WHERE id = $1";

/// UPDATE by id: SET only the given assignments, always touching `updated_at`.
pub fn update_expense(id: i64, assignments: Vec<Assignment>) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new("UPDATE ");
    qb.push(EXPENSES_TABLE);
    qb.push(" SET ");
    {
        let mut sets = qb.separated(", ");
        for a in assignments {
            sets.push(a.column);
            sets.push_unseparated(" = ");
            match a.value {
                FieldValue::Decimal(v) => sets.push_bind_unseparated(v),
                FieldValue::Text(v) => sets.push_bind_unseparated(v),
                FieldValue::Date(v) => sets.push_bind_unseparated(v),
            };
        }
        sets.push("updated_at = clock_timestamp()");
    }
    qb.push(" WHERE id = ");
    qb.push_bind(id);
    qb.push(" RETURNING ");
    qb.push(EXPENSE_COLUMNS);
    qb
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseUpdate;
    use crate::sql::assignments;
    use rust_decimal::Decimal;

    #[test]
    fn empty_update_only_touches_timestamp() {
        let qb = update_expense(3, Vec::new());
        assert_eq!(
            qb.sql(),
            "UPDATE expenses SET updated_at = clock_timestamp() WHERE id = $1 \
             RETURNING id, amount, category, description, date, created_at, updated_at"
        );
    }

    #[test]
    fn single_field_update() {
        let update = ExpenseUpdate {
            category: Some("Food".into()),
            ..Default::default()
        };
        let qb = update_expense(1, assignments(&update));
        assert_eq!(
            qb.sql(),
            "UPDATE expenses SET category = $1, updated_at = clock_timestamp() WHERE id = $2 \
             RETURNING id, amount, category, description, date, created_at, updated_at"
        );
    }

    #[test]
    fn every_field_gets_its_own_placeholder() {
        let update = ExpenseUpdate {
            amount: Some(Decimal::new(1500, 2)),
            category: Some("Food".into()),
            description: Some("dinner".into()),
            date: chrono::NaiveDate::from_ymd_opt(2024, 1, 15),
        };
        let qb = update_expense(9, assignments(&update));
        assert!(qb
            .sql()
            .starts_with("UPDATE expenses SET amount = $1, category = $2, description = $3, date = $4, updated_at = clock_timestamp() WHERE id = $5"));
    }
}
