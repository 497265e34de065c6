use serde::Serialize;

/// Raw `activities` row as stored. The roster is kept as a JSON-encoded text
/// column; nothing outside the storage layer should touch the encoded form.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ActivityRow {
    pub name: String,
    pub description: Option<String>,
    pub schedule: Option<String>,
    pub max_participants: Option<i64>,
    pub participants: Option<String>,
}

/// Decoded activity with the roster as a plain list of email addresses.
#[derive(Debug, Clone)]
pub struct Activity {
    pub name: String,
    pub description: Option<String>,
    pub schedule: Option<String>,
    pub max_participants: Option<i64>,
    pub participants: Vec<String>,
}

impl From<ActivityRow> for Activity {
    fn from(row: ActivityRow) -> Self {
        Activity {
            name: row.name,
            description: row.description,
            schedule: row.schedule,
            max_participants: row.max_participants,
            participants: decode_participants(row.participants.as_deref()),
        }
    }
}

/// A missing or unreadable roster column decodes to an empty list, never an
/// error.
pub fn decode_participants(json: Option<&str>) -> Vec<String> {
    let Some(raw) = json else {
        return Vec::new();
    };
    serde_json::from_str::<Vec<String>>(raw).unwrap_or_default()
}

pub fn encode_participants<S: Serialize>(participants: &[S]) -> String {
    serde_json::to_string(participants).unwrap_or_else(|_| "[]".to_string())
}
