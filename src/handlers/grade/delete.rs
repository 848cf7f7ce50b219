use crate::{
    error::{self, Result},
    StateTrait,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use entity::grades;
use sea_orm::EntityTrait;
use uuid::Uuid;

/// Deleting a grade leaves the team exercise marked graded; the next
/// leaderboard read picks up the change.
pub async fn delete_grade<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode> {
    let result = grades::Entity::delete_by_id(id).exec(state.db()).await?;

    if result.rows_affected == 0 {
        return Err(error::GRADE_NOT_FOUND);
    }

    Ok(StatusCode::NO_CONTENT)
}
