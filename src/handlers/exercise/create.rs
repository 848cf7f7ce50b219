use crate::{
    error::{self, Result},
    extractors::{Json, ValidatedJson},
    StateTrait,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use entity::{
    exercises::{self, Kind, Status},
    hackathons,
};
use sea_orm::{EntityTrait, Set};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct Request {
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    pub description: Option<String>,
    pub instructions: Option<String>,
    pub rubric: Option<String>,
    pub kind: Kind,
    #[validate(range(exclusive_min = 0.0))]
    pub max_score: f64,
    #[validate(range(min = 1))]
    pub time_limit_minutes: Option<i32>,
    pub start_time: Option<DateTime<Utc>>,
}

pub async fn create_exercise<S: StateTrait>(
    State(state): State<S>,
    Path(hackathon_id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<(StatusCode, Json<exercises::Model>)> {
    hackathons::Entity::find_by_id(hackathon_id)
        .one(state.db())
        .await?
        .ok_or(error::HACKATHON_NOT_FOUND)?;

    let exercise = exercises::ActiveModel {
        id: Set(Uuid::new_v4()),
        hackathon_id: Set(hackathon_id),
        title: Set(request.title),
        description: Set(request.description),
        instructions: Set(request.instructions),
        rubric: Set(request.rubric),
        kind: Set(request.kind),
        max_score: Set(request.max_score),
        time_limit_minutes: Set(request.time_limit_minutes),
        start_time: Set(request.start_time),
        status: Set(Status::Draft),
        created_at: Set(Utc::now()),
    };

    let result = exercises::Entity::insert(exercise)
        .exec_with_returning(state.db())
        .await?;

    Ok((StatusCode::CREATED, Json(result)))
}
