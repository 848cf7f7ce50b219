use crate::{
    error::{self, Result},
    extractors::{Json, UserID},
    StateTrait,
};
use axum::extract::{Path, State};
use entity::hackathons;
use sea_orm::EntityTrait;
use uuid::Uuid;

pub async fn get_hackathon<S: StateTrait>(
    State(state): State<S>,
    _user_id: UserID,
    Path(id): Path<Uuid>,
) -> Result<Json<hackathons::Model>> {
    let hackathon = hackathons::Entity::find_by_id(id)
        .one(state.db())
        .await?
        .ok_or(error::HACKATHON_NOT_FOUND)?;

    Ok(Json(hackathon))
}
