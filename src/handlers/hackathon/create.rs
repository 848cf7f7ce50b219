use crate::{
    error::Result,
    extractors::{Json, UserID, ValidatedJson},
    StateTrait,
};
use axum::{extract::State, http::StatusCode};
use chrono::{DateTime, Utc};
use entity::hackathons::{self, Status};
use sea_orm::{EntityTrait, Set};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct Request {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub description: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
}

pub async fn create_hackathon<S: StateTrait>(
    State(state): State<S>,
    user_id: UserID,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<(StatusCode, Json<hackathons::Model>)> {
    let hackathon = hackathons::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(request.name),
        description: Set(request.description),
        start_time: Set(request.start_time),
        end_time: Set(request.end_time),
        status: Set(Status::Draft),
        created_by: Set(*user_id),
        created_at: Set(Utc::now()),
    };

    let result = hackathons::Entity::insert(hackathon)
        .exec_with_returning(state.db())
        .await?;

    Ok((StatusCode::CREATED, Json(result)))
}
