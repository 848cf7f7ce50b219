use crate::{
    error::{self, Result},
    extractors::{Json, UserID},
    StateTrait,
};
use axum::extract::{Path, State};
use chrono::{DateTime, Utc};
use entity::exercises;
use sea_orm::EntityTrait;
use serde::Serialize;
use uuid::Uuid;

#[serde_with::skip_serializing_none]
#[derive(Debug, Serialize)]
pub struct Response {
    #[serde(flatten)]
    pub exercise: exercises::Model,
    pub end_time: Option<DateTime<Utc>>,
}

pub async fn get_exercise<S: StateTrait>(
    State(state): State<S>,
    _user_id: UserID,
    Path(id): Path<Uuid>,
) -> Result<Json<Response>> {
    let exercise = exercises::Entity::find_by_id(id)
        .one(state.db())
        .await?
        .ok_or(error::EXERCISE_NOT_FOUND)?;

    let end_time = exercise.end_time();

    Ok(Json(Response { exercise, end_time }))
}
