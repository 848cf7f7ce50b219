use crate::{
    error::{self, Result},
    StateTrait,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use entity::exercises;
use sea_orm::EntityTrait;
use uuid::Uuid;

pub async fn delete_exercise<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode> {
    let result = exercises::Entity::delete_by_id(id).exec(state.db()).await?;

    if result.rows_affected == 0 {
        return Err(error::EXERCISE_NOT_FOUND);
    }

    Ok(StatusCode::NO_CONTENT)
}
