use serde::Serialize;
use sqlx::SqlitePool;
use std::collections::BTreeMap;

use crate::database::activity_repo;

#[derive(Debug, Serialize)]
pub struct ActivityView {
    pub description: String,
    pub schedule: String,
    pub max_participants: i64,
    pub participants: Vec<String>,
}

/// Catalog for `GET /activities`: activity name mapped to its details.
/// An empty table yields an empty map.
pub async fn load_catalog(pool: &SqlitePool) -> sqlx::Result<BTreeMap<String, ActivityView>> {
    let activities = activity_repo::list_all(pool).await?;

    let mut catalog = BTreeMap::new();
    for activity in activities {
        let view = ActivityView {
            description: activity.description.unwrap_or_default(),
            schedule: activity.schedule.unwrap_or_default(),
            max_participants: activity.max_participants.unwrap_or(0),
            participants: activity.participants,
        };
        catalog.insert(activity.name, view);
    }
    Ok(catalog)
}
