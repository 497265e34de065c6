use sqlx::SqlitePool;

const SQL_CREATE_ACTIVITIES: &str = r#"
CREATE TABLE IF NOT EXISTS activities (
  name TEXT PRIMARY KEY,
  description TEXT,
  schedule TEXT,
  max_participants INTEGER,
  participants TEXT NOT NULL DEFAULT '[]'
)
"#;

/// Idempotent schema bootstrap; runs on every process start.
pub async fn init_db(pool: &SqlitePool) -> sqlx::Result<()> {
    sqlx::query(SQL_CREATE_ACTIVITIES).execute(pool).await?;
    Ok(())
}
