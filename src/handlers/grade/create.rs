use crate::{
    error::Result,
    extractors::{Json, UserID},
    handlers::leaderboard::recompute_and_publish,
    utils::record_grade,
    StateTrait,
};
use axum::{extract::State, http::StatusCode};
use sea_orm::TransactionTrait;
use serde::Deserialize;
use uuid::Uuid;

#[derive(Deserialize)]
pub struct Request {
    pub submission_id: Uuid,
    pub score: f64,
    pub feedback: Option<String>,
}

/// Scores are taken as-is here, judges may award above the exercise maximum.
pub async fn create_grade<S: StateTrait>(
    State(state): State<S>,
    user_id: UserID,
    Json(request): Json<Request>,
) -> Result<StatusCode> {
    let txn = state.db().begin().await?;

    let hackathon_id = record_grade(
        &txn,
        &request.submission_id,
        &user_id,
        request.score,
        request.feedback,
    )
    .await?;

    txn.commit().await?;

    recompute_and_publish(&state, &hackathon_id).await?;

    Ok(StatusCode::CREATED)
}
