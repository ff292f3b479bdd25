//! Schema definition for the expenses table. Idempotent; applied once at pool init.

use sqlx::PgPool;

/// Serializes concurrent schema application from several processes.
const SCHEMA_LOCK_KEY: i64 = 0x6578_7065_6e73_6573;

pub const SCHEMA_STATEMENTS: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS expenses (
        id BIGSERIAL PRIMARY KEY,
        amount NUMERIC(10, 2) NOT NULL CHECK (amount > 0),
        category VARCHAR(100) NOT NULL,
        description VARCHAR(255),
        date DATE NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT clock_timestamp(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT clock_timestamp(),
        CHECK (updated_at >= created_at)
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_expenses_date ON expenses (date)",
    "CREATE INDEX IF NOT EXISTS idx_expenses_category ON expenses (category)",
];

/// Create the expenses table and its indexes if missing. All statements commit together.
pub async fn apply_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;
    sqlx::query("SELECT pg_advisory_xact_lock($1)")
        .bind(SCHEMA_LOCK_KEY)
        .execute(&mut *tx)
        .await?;
    for statement in SCHEMA_STATEMENTS {
        sqlx::query(statement).execute(&mut *tx).await?;
    }
    tx.commit().await?;
    tracing::info!("expenses schema applied");
    Ok(())
}
