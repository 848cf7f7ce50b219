use crate::{
    error::{self, Result},
    extractors::{Json, UserID},
    StateTrait,
};
use axum::extract::{Path, State};
use entity::{hackathons, teams};
use sea_orm::{EntityTrait, QueryOrder};
use uuid::Uuid;

pub async fn list_teams<S: StateTrait>(
    State(state): State<S>,
    _user_id: UserID,
    Path(hackathon_id): Path<Uuid>,
) -> Result<Json<Vec<teams::Model>>> {
    hackathons::Entity::find_by_id(hackathon_id)
        .one(state.db())
        .await?
        .ok_or(error::HACKATHON_NOT_FOUND)?;

    let teams = teams::Entity::find_by_hackathon(&hackathon_id)
        .order_by_asc(teams::Column::CreatedAt)
        .all(state.db())
        .await?;

    Ok(Json(teams))
}
