use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use sqlx::SqlitePool;
use tracing::warn;

use crate::services::activities_service;
use crate::services::roster_service::{self, RosterError};

pub async fn list_activities_handler(State(pool): State<SqlitePool>) -> impl IntoResponse {
    match activities_service::load_catalog(&pool).await {
        Ok(catalog) => Json(catalog).into_response(),
        Err(e) => {
            warn!("Listing activities failed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RosterQuery {
    pub email: String,
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<RosterQuery>,
    State(pool): State<SqlitePool>,
) -> impl IntoResponse {
    match roster_service::signup(&pool, &activity_name, &query.email).await {
        Ok(()) => Json(json!({
            "message": format!("Signed up {} for {}", query.email, activity_name)
        }))
        .into_response(),
        Err(e) => roster_error_response(e),
    }
}

pub async fn unregister_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<RosterQuery>,
    State(pool): State<SqlitePool>,
) -> impl IntoResponse {
    match roster_service::unregister(&pool, &activity_name, &query.email).await {
        Ok(()) => Json(json!({
            "message": format!("Unregistered {} from {}", query.email, activity_name)
        }))
        .into_response(),
        Err(e) => roster_error_response(e),
    }
}

fn roster_error_response(err: RosterError) -> Response {
    let status = match &err {
        RosterError::ActivityNotFound => StatusCode::NOT_FOUND,
        RosterError::AlreadySignedUp | RosterError::NotSignedUp => StatusCode::BAD_REQUEST,
        RosterError::Db(e) => {
            warn!("Roster update failed: {}", e);
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };
    (status, Json(json!({ "detail": err.to_string() }))).into_response()
}
