use crate::{
    error::{self, Result},
    StateTrait,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use entity::hackathons;
use sea_orm::EntityTrait;
use uuid::Uuid;

/// Deleting a hackathon cascades to its teams, exercises, submissions,
/// grades and leaderboard rows through the foreign keys.
pub async fn delete_hackathon<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode> {
    let result = hackathons::Entity::delete_by_id(id).exec(state.db()).await?;

    if result.rows_affected == 0 {
        return Err(error::HACKATHON_NOT_FOUND);
    }

    Ok(StatusCode::NO_CONTENT)
}
