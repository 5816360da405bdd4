use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
    response::Redirect,
};

use mergington::data::{Catalog, EmailQuery, MessageResponse};
use mergington::log;

use crate::error::ApiError;
use crate::services::ActivityService;

/// Handler for the site root, which sends browsers to the landing page
pub async fn root() -> Redirect {
    Redirect::temporary("/static/index.html")
}

/// Handler to list every activity
pub async fn list(State(state): State<Arc<crate::AppState>>) -> Result<Json<Catalog>, ApiError> {
    let catalog = state.activities.list().await?;
    Ok(Json(catalog))
}

/// Handler to sign a student up for an activity
pub async fn signup(
    State(state): State<Arc<crate::AppState>>,
    Path(activity_name): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Query(query) = query?;
    match state.activities.signup(&activity_name, &query.email).await {
        Ok(email) => {
            log::info!("Signed up {} for {}", email, activity_name);
            Ok(Json(MessageResponse::signed_up(&email, &activity_name)))
        }
        Err(err) => {
            log::debug!(
                "Rejected signup of {:?} for {:?}: {}",
                query.email,
                activity_name,
                err
            );
            Err(err.into())
        }
    }
}

/// Handler to remove a student from an activity
pub async fn unregister(
    State(state): State<Arc<crate::AppState>>,
    Path(activity_name): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Query(query) = query?;
    match state
        .activities
        .unregister(&activity_name, &query.email)
        .await
    {
        Ok(()) => {
            log::info!("Unregistered {} from {}", query.email, activity_name);
            Ok(Json(MessageResponse::unregistered(
                &query.email,
                &activity_name,
            )))
        }
        Err(err) => {
            log::debug!(
                "Rejected unregister of {:?} from {:?}: {}",
                query.email,
                activity_name,
                err
            );
            Err(err.into())
        }
    }
}
