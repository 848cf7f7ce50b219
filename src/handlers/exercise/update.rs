use crate::{
    error::{self, Result},
    extractors::Json,
    utils::set_option,
    StateTrait,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use entity::exercises::{self, Kind, Status};
use sea_orm::{DbErr, EntityTrait, Set};
use serde::Deserialize;
use uuid::Uuid;

#[derive(Deserialize)]
pub struct Request {
    title: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    description: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    instructions: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    rubric: Option<Option<String>>,
    kind: Option<Kind>,
    max_score: Option<f64>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    time_limit_minutes: Option<Option<i32>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    start_time: Option<Option<DateTime<Utc>>>,
    status: Option<Status>,
}

impl Request {
    fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.instructions.is_none()
            && self.rubric.is_none()
            && self.kind.is_none()
            && self.max_score.is_none()
            && self.time_limit_minutes.is_none()
            && self.start_time.is_none()
            && self.status.is_none()
    }
}

pub async fn update_exercise<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<Uuid>,
    Json(request): Json<Request>,
) -> Result<StatusCode> {
    // The ORM generates an invalid statement for an all-NotSet model
    if request.is_empty() {
        return Ok(StatusCode::NO_CONTENT);
    }

    let active_model = exercises::ActiveModel {
        id: Set(id),
        title: set_option(request.title),
        description: set_option(request.description),
        instructions: set_option(request.instructions),
        rubric: set_option(request.rubric),
        kind: set_option(request.kind),
        max_score: set_option(request.max_score),
        time_limit_minutes: set_option(request.time_limit_minutes),
        start_time: set_option(request.start_time),
        status: set_option(request.status),
        ..Default::default()
    };

    let result = exercises::Entity::update(active_model).exec(state.db()).await;

    match result {
        Err(DbErr::RecordNotFound(_)) => return Err(error::EXERCISE_NOT_FOUND),
        r => r?,
    };

    Ok(StatusCode::NO_CONTENT)
}
