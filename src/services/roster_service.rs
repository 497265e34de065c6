use sqlx::SqlitePool;
use thiserror::Error;

use crate::database::activity_repo;

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("Activity not found")]
    ActivityNotFound,
    #[error("Student is already signed up")]
    AlreadySignedUp,
    #[error("Student is not signed up for this activity")]
    NotSignedUp,
    #[error(transparent)]
    Db(#[from] sqlx::Error),
}

/// Append `email` to the activity's roster. Emails are taken as-is; capacity
/// is advisory and not checked here.
pub async fn signup(
    pool: &SqlitePool,
    activity_name: &str,
    email: &str,
) -> Result<(), RosterError> {
    let Some(activity) = activity_repo::find_by_name(pool, activity_name).await? else {
        return Err(RosterError::ActivityNotFound);
    };

    let mut participants = activity.participants;
    if participants.iter().any(|p| p == email) {
        return Err(RosterError::AlreadySignedUp);
    }

    participants.push(email.to_string());
    activity_repo::update_participants(pool, activity_name, &participants).await?;
    Ok(())
}

/// Remove the first matching roster entry for `email`.
pub async fn unregister(
    pool: &SqlitePool,
    activity_name: &str,
    email: &str,
) -> Result<(), RosterError> {
    let Some(activity) = activity_repo::find_by_name(pool, activity_name).await? else {
        return Err(RosterError::ActivityNotFound);
    };

    let mut participants = activity.participants;
    let Some(pos) = participants.iter().position(|p| p == email) else {
        return Err(RosterError::NotSignedUp);
    };

    participants.remove(pos);
    activity_repo::update_participants(pool, activity_name, &participants).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::activity_repo::NewActivity;
    use crate::database::schema;

    async fn make_pool() -> SqlitePool {
        let pool = SqlitePool::connect(":memory:").await.unwrap();
        schema::init_db(&pool).await.unwrap();
        activity_repo::insert(
            &pool,
            NewActivity {
                name: "Chess Club",
                description: "Learn strategies and compete in chess tournaments",
                schedule: "Fridays, 3:30 PM - 5:00 PM",
                max_participants: 12,
                participants: &["michael@mergington.edu", "daniel@mergington.edu"],
            },
        )
        .await
        .unwrap();
        pool
    }

    #[tokio::test]
    async fn signup_appends_at_the_end() {
        let pool = make_pool().await;
        signup(&pool, "Chess Club", "zoe@mergington.edu")
            .await
            .unwrap();

        let chess = activity_repo::find_by_name(&pool, "Chess Club")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(
            chess.participants,
            vec![
                "michael@mergington.edu",
                "daniel@mergington.edu",
                "zoe@mergington.edu"
            ]
        );
    }

    #[tokio::test]
    async fn duplicate_signup_is_rejected_and_changes_nothing() {
        let pool = make_pool().await;
        let err = signup(&pool, "Chess Club", "michael@mergington.edu")
            .await
            .unwrap_err();
        assert!(matches!(err, RosterError::AlreadySignedUp));

        let chess = activity_repo::find_by_name(&pool, "Chess Club")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(chess.participants.len(), 2);
    }

    #[tokio::test]
    async fn signup_unknown_activity_is_not_found() {
        let pool = make_pool().await;
        let err = signup(&pool, "Knitting Circle", "zoe@mergington.edu")
            .await
            .unwrap_err();
        assert!(matches!(err, RosterError::ActivityNotFound));
    }

    #[tokio::test]
    async fn unregister_removes_exactly_one_entry() {
        let pool = make_pool().await;
        unregister(&pool, "Chess Club", "michael@mergington.edu")
            .await
            .unwrap();

        let chess = activity_repo::find_by_name(&pool, "Chess Club")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(chess.participants, vec!["daniel@mergington.edu"]);

        let err = unregister(&pool, "Chess Club", "michael@mergington.edu")
            .await
            .unwrap_err();
        assert!(matches!(err, RosterError::NotSignedUp));
    }

    #[tokio::test]
    async fn unregister_unknown_activity_is_not_found() {
        let pool = make_pool().await;
        let err = unregister(&pool, "Knitting Circle", "zoe@mergington.edu")
            .await
            .unwrap_err();
        assert!(matches!(err, RosterError::ActivityNotFound));
    }
}
