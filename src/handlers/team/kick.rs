use crate::{
    error::{self, Result},
    extractors::UserID,
    handlers::socket::Event,
    jwt::Claims,
    utils::topics,
    StateTrait,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension,
};
use entity::{team_members, teams, users::Role};
use sea_orm::{EntityTrait, TransactionTrait};
use uuid::Uuid;

/// Members can remove themselves, admins can remove anyone.
pub async fn remove_member<S: StateTrait>(
    State(state): State<S>,
    user_id: UserID,
    Extension(claims): Extension<Claims>,
    Path((team_id, member_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode> {
    if member_id != *user_id && claims.role != Role::Admin {
        return Err(error::NOT_ENOUGH_PERMISSIONS);
    }

    let txn = state.db().begin().await?;

    teams::Entity::find_by_id(team_id)
        .one(&txn)
        .await?
        .ok_or(error::TEAM_NOT_FOUND)?;

    let result = team_members::Entity::delete_by_id((team_id, member_id))
        .exec(&txn)
        .await?;

    if result.rows_affected == 0 {
        return Err(error::NO_SUCH_MEMBER);
    }

    state
        .nats()
        .publish(
            topics::team_info(&team_id),
            serde_json::to_vec(&Event::LeaveTeam { user: member_id })
                .unwrap()
                .into(),
        )
        .await?;

    txn.commit().await?;

    Ok(StatusCode::OK)
}
