use crate::{
    error::{self, Result},
    extractors::{Json, UserID},
    StateTrait,
};
use axum::extract::{Path, State};
use entity::{team_members, teams, users};
use sea_orm::{EntityTrait, QueryOrder, QuerySelect};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct Member {
    pub id: Uuid,
    pub username: String,
    pub full_name: String,
}

pub async fn list_members<S: StateTrait>(
    State(state): State<S>,
    _user_id: UserID,
    Path(team_id): Path<Uuid>,
) -> Result<Json<Vec<Member>>> {
    teams::Entity::find_by_id(team_id)
        .one(state.db())
        .await?
        .ok_or(error::TEAM_NOT_FOUND)?;

    let members: Vec<(Uuid, String, String)> = users::Entity::find_in_team(&team_id)
        .select_only()
        .column(users::Column::Id)
        .column(users::Column::Username)
        .column(users::Column::FullName)
        .order_by_asc(team_members::Column::JoinedAt)
        .into_tuple()
        .all(state.db())
        .await?;

    let members = members
        .into_iter()
        .map(|(id, username, full_name)| Member {
            id,
            username,
            full_name,
        })
        .collect();

    Ok(Json(members))
}
