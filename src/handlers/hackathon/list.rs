use crate::{
    error::Result,
    extractors::{Json, UserID},
    StateTrait,
};
use axum::extract::State;
use entity::hackathons;
use sea_orm::{EntityTrait, QueryOrder};

pub async fn list_hackathons<S: StateTrait>(
    State(state): State<S>,
    _user_id: UserID,
) -> Result<Json<Vec<hackathons::Model>>> {
    let hackathons = hackathons::Entity::find()
        .order_by_asc(hackathons::Column::CreatedAt)
        .all(state.db())
        .await?;

    Ok(Json(hackathons))
}
