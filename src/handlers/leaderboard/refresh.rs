use crate::{
    error::{self, Result},
    extractors::{Json, UserID},
    StateTrait,
};
use axum::extract::State;
use entity::{hackathons, leaderboard};
use sea_orm::EntityTrait;
use serde::Deserialize;
use uuid::Uuid;

#[derive(Deserialize)]
pub struct Request {
    pub hackathon_id: Uuid,
}

pub async fn refresh_leaderboard<S: StateTrait>(
    State(state): State<S>,
    _user_id: UserID,
    Json(request): Json<Request>,
) -> Result<Json<Vec<leaderboard::Model>>> {
    hackathons::Entity::find_by_id(request.hackathon_id)
        .one(state.db())
        .await?
        .ok_or(error::HACKATHON_NOT_FOUND)?;

    let entries = super::recompute_and_publish(&state, &request.hackathon_id).await?;

    Ok(Json(entries))
}
