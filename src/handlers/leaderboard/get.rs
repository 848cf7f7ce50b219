use crate::{
    error::{self, Result},
    extractors::{Json, UserID},
    utils::{exercise_breakdown, recompute_leaderboard, ExerciseScore},
    StateTrait,
};
use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use entity::{hackathons, leaderboard};
use sea_orm::EntityTrait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Deserialize)]
pub struct Params {
    pub hackathon_id: Uuid,
    #[serde(default)]
    pub detailed: bool,
    #[serde(default)]
    pub podium: bool,
}

#[derive(Debug, Serialize)]
pub struct DetailedEntry {
    #[serde(flatten)]
    pub entry: leaderboard::Model,
    pub exercises: Vec<ExerciseScore>,
}

/// Every read recomputes the standings first, so the response is always
/// current even after failed pushes.
pub async fn get_leaderboard<S: StateTrait>(
    State(state): State<S>,
    _user_id: UserID,
    Query(params): Query<Params>,
) -> Result<Response> {
    hackathons::Entity::find_by_id(params.hackathon_id)
        .one(state.db())
        .await?
        .ok_or(error::HACKATHON_NOT_FOUND)?;

    let mut entries = recompute_leaderboard(state.db(), &params.hackathon_id).await?;

    if params.podium {
        entries.truncate(3);
    }

    if !params.detailed {
        return Ok(Json(entries).into_response());
    }

    let mut detailed = Vec::with_capacity(entries.len());

    for entry in entries {
        let exercises =
            exercise_breakdown(state.db(), &params.hackathon_id, &entry.team_id).await?;

        detailed.push(DetailedEntry { entry, exercises });
    }

    Ok(Json(detailed).into_response())
}
