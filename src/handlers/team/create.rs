use crate::{
    error::{self, DatabaseError, Result},
    extractors::{Json, UserID, ValidatedJson},
    StateTrait,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use chrono::Utc;
use entity::{
    hackathons, team_members,
    teams::{self, constraints::*},
};
use sea_orm::{
    ColumnTrait, EntityTrait, JoinType, QueryFilter, QuerySelect, RelationTrait, Set,
    TransactionTrait,
};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct Request {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
}

/// The creator becomes the team's first member.
pub async fn create_team<S: StateTrait>(
    State(state): State<S>,
    user_id: UserID,
    Path(hackathon_id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<(StatusCode, Json<teams::Model>)> {
    let txn = state.db().begin().await?;

    hackathons::Entity::find_by_id(hackathon_id)
        .one(&txn)
        .await?
        .ok_or(error::HACKATHON_NOT_FOUND)?;

    if is_member_in_hackathon(&txn, &user_id, &hackathon_id).await? {
        return Err(error::ALREADY_IN_TEAM);
    }

    let team = teams::ActiveModel {
        id: Set(Uuid::new_v4()),
        hackathon_id: Set(hackathon_id),
        name: Set(request.name),
        created_at: Set(Utc::now()),
    };

    let result = teams::Entity::insert(team).exec_with_returning(&txn).await;

    let team = match result {
        Err(err) if err.unique_violation(UC_TEAMS_HACKATHON_ID_NAME) => {
            return Err(error::DUPLICATE_TEAM_NAME)
        }
        r => r?,
    };

    let member = team_members::ActiveModel {
        team_id: Set(team.id),
        user_id: Set(*user_id),
        joined_at: Set(Utc::now()),
    };

    team_members::Entity::insert(member)
        .exec_without_returning(&txn)
        .await?;

    txn.commit().await?;

    Ok((StatusCode::CREATED, Json(team)))
}

/// One team per user per hackathon, checked in the handlers because the
/// schema alone cannot express it.
pub(super) async fn is_member_in_hackathon<C>(
    db: &C,
    user_id: &Uuid,
    hackathon_id: &Uuid,
) -> Result<bool>
where
    C: sea_orm::ConnectionTrait,
{
    let existing = team_members::Entity::find()
        .join(JoinType::InnerJoin, team_members::Relation::Team.def())
        .filter(team_members::Column::UserId.eq(*user_id))
        .filter(teams::Column::HackathonId.eq(*hackathon_id))
        .one(db)
        .await?;

    Ok(existing.is_some())
}
