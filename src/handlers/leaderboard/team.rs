use crate::{
    error::{self, Result},
    extractors::{Json, UserID},
    utils::{exercise_breakdown, recompute_leaderboard, ExerciseScore},
    StateTrait,
};
use axum::extract::{Path, State};
use entity::{leaderboard, teams};
use sea_orm::EntityTrait;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct Response {
    #[serde(flatten)]
    pub entry: leaderboard::Model,
    pub exercises: Vec<ExerciseScore>,
}

pub async fn get_team_rank<S: StateTrait>(
    State(state): State<S>,
    _user_id: UserID,
    Path(team_id): Path<Uuid>,
) -> Result<Json<Response>> {
    let team = teams::Entity::find_by_id(team_id)
        .one(state.db())
        .await?
        .ok_or(error::TEAM_NOT_FOUND)?;

    recompute_leaderboard(state.db(), &team.hackathon_id).await?;

    let entry = leaderboard::Entity::find_by_id((team.hackathon_id, team.id))
        .one(state.db())
        .await?
        .ok_or(error::TEAM_NOT_FOUND)?;

    let exercises = exercise_breakdown(state.db(), &team.hackathon_id, &team.id).await?;

    Ok(Json(Response { entry, exercises }))
}
