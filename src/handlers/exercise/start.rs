use crate::{
    error::{self, Result},
    extractors::{Json, UserID},
    StateTrait,
};
use axum::extract::{Path, State};
use chrono::Utc;
use entity::team_exercises::{self, Status};
use sea_orm::{ActiveModelTrait, EntityTrait, IntoActiveModel, Set};
use uuid::Uuid;

pub async fn start_team_exercise<S: StateTrait>(
    State(state): State<S>,
    _user_id: UserID,
    Path(id): Path<Uuid>,
) -> Result<Json<team_exercises::Model>> {
    let team_exercise = team_exercises::Entity::find_by_id(id)
        .one(state.db())
        .await?
        .ok_or(error::TEAM_EXERCISE_NOT_FOUND)?;

    let mut active_model = team_exercise.into_active_model();
    active_model.status = Set(Status::InProgress);
    active_model.started_at = Set(Some(Utc::now()));

    let team_exercise = active_model.update(state.db()).await?;

    Ok(Json(team_exercise))
}
