use crate::{
    error::{self, Result},
    extractors::UserID,
    handlers::socket::Event,
    utils::topics,
    StateTrait,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use chrono::Utc;
use entity::{team_members, teams};
use sea_orm::{EntityTrait, Set, TransactionTrait};
use uuid::Uuid;

pub async fn join_team<S: StateTrait>(
    State(state): State<S>,
    user_id: UserID,
    Path(team_id): Path<Uuid>,
) -> Result<StatusCode> {
    let txn = state.db().begin().await?;

    let team = teams::Entity::find_by_id(team_id)
        .one(&txn)
        .await?
        .ok_or(error::TEAM_NOT_FOUND)?;

    if super::create::is_member_in_hackathon(&txn, &user_id, &team.hackathon_id).await? {
        return Err(error::ALREADY_IN_TEAM);
    }

    let member = team_members::ActiveModel {
        team_id: Set(team.id),
        user_id: Set(*user_id),
        joined_at: Set(Utc::now()),
    };

    team_members::Entity::insert(member)
        .exec_without_returning(&txn)
        .await?;

    state
        .nats()
        .publish(
            topics::team_info(&team.id),
            serde_json::to_vec(&Event::JoinTeam { user: *user_id })
                .unwrap()
                .into(),
        )
        .await?;

    txn.commit().await?;

    Ok(StatusCode::OK)
}
