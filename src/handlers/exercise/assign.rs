use crate::{
    error::{self, DatabaseError, Result},
    extractors::Json,
    StateTrait,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use chrono::Utc;
use entity::{
    exercises,
    team_exercises::{self, constraints::*, Status},
    teams,
};
use sea_orm::{EntityTrait, Set};
use serde::Deserialize;
use uuid::Uuid;

#[derive(Deserialize)]
pub struct Request {
    pub team_id: Uuid,
}

pub async fn assign_exercise<S: StateTrait>(
    State(state): State<S>,
    Path(exercise_id): Path<Uuid>,
    Json(request): Json<Request>,
) -> Result<(StatusCode, Json<team_exercises::Model>)> {
    exercises::Entity::find_by_id(exercise_id)
        .one(state.db())
        .await?
        .ok_or(error::EXERCISE_NOT_FOUND)?;

    teams::Entity::find_by_id(request.team_id)
        .one(state.db())
        .await?
        .ok_or(error::TEAM_NOT_FOUND)?;

    let team_exercise = team_exercises::ActiveModel {
        id: Set(Uuid::new_v4()),
        team_id: Set(request.team_id),
        exercise_id: Set(exercise_id),
        status: Set(Status::Pending),
        assigned_at: Set(Utc::now()),
        started_at: Set(None),
    };

    let result = team_exercises::Entity::insert(team_exercise)
        .exec_with_returning(state.db())
        .await;

    let team_exercise = match result {
        Err(err) if err.unique_violation(UC_TEAM_EXERCISES_TEAM_ID_EXERCISE_ID) => {
            return Err(error::ALREADY_ASSIGNED)
        }
        r => r?,
    };

    Ok((StatusCode::CREATED, Json(team_exercise)))
}
