use sqlx::SqlitePool;

use crate::models::activities::encode_participants;
use crate::models::{Activity, ActivityRow};

const SQL_FIND_BY_NAME: &str = r#"
SELECT
  name,
  description,
  schedule,
  max_participants,
  participants
FROM activities
WHERE name = ?
"#;

const SQL_LIST_ALL: &str = r#"
SELECT
  name,
  description,
  schedule,
  max_participants,
  participants
FROM activities
ORDER BY rowid
"#;

const SQL_INSERT_ACTIVITY: &str = r#"
INSERT INTO activities (
  name,
  description,
  schedule,
  max_participants,
  participants
) VALUES (?, ?, ?, ?, ?)
"#;

const SQL_UPDATE_PARTICIPANTS: &str = r#"
UPDATE activities
SET participants = ?
WHERE name = ?
"#;

pub struct NewActivity<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub schedule: &'a str,
    pub max_participants: i64,
    pub participants: &'a [&'a str],
}

pub async fn find_by_name(pool: &SqlitePool, name: &str) -> sqlx::Result<Option<Activity>> {
    let row = sqlx::query_as::<_, ActivityRow>(SQL_FIND_BY_NAME)
        .bind(name)
        .fetch_optional(pool)
        .await?;
    Ok(row.map(Activity::from))
}

pub async fn list_all(pool: &SqlitePool) -> sqlx::Result<Vec<Activity>> {
    let rows = sqlx::query_as::<_, ActivityRow>(SQL_LIST_ALL)
        .fetch_all(pool)
        .await?;
    Ok(rows.into_iter().map(Activity::from).collect())
}

pub async fn insert(pool: &SqlitePool, activity: NewActivity<'_>) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_INSERT_ACTIVITY)
        .bind(activity.name)
        .bind(activity.description)
        .bind(activity.schedule)
        .bind(activity.max_participants)
        .bind(encode_participants(activity.participants))
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}

pub async fn update_participants(
    pool: &SqlitePool,
    name: &str,
    participants: &[String],
) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_UPDATE_PARTICIPANTS)
        .bind(encode_participants(participants))
        .bind(name)
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}
