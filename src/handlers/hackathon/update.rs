use crate::{
    error::{self, Result},
    extractors::Json,
    handlers::socket::Event,
    utils::{set_option, topics},
    StateTrait,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use entity::hackathons::{self, Status};
use sea_orm::{DbErr, EntityTrait, Set};
use serde::Deserialize;
use uuid::Uuid;

#[derive(Deserialize)]
pub struct Request {
    name: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    description: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    start_time: Option<Option<DateTime<Utc>>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    end_time: Option<Option<DateTime<Utc>>>,
    status: Option<Status>,
}

pub async fn update_hackathon<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<Uuid>,
    Json(request): Json<Request>,
) -> Result<StatusCode> {
    // The ORM generates an invalid statement for an all-NotSet model
    if request.name.is_none()
        && request.description.is_none()
        && request.start_time.is_none()
        && request.end_time.is_none()
        && request.status.is_none()
    {
        return Ok(StatusCode::NO_CONTENT);
    }

    let active_model = hackathons::ActiveModel {
        id: Set(id),
        name: set_option(request.name),
        description: set_option(request.description),
        start_time: set_option(request.start_time),
        end_time: set_option(request.end_time),
        status: set_option(request.status),
        ..Default::default()
    };

    let result = hackathons::Entity::update(active_model).exec(state.db()).await;

    let hackathon = match result {
        Err(DbErr::RecordNotFound(_)) => return Err(error::HACKATHON_NOT_FOUND),
        r => r?,
    };

    state
        .nats()
        .publish(
            topics::hackathon_info(&hackathon.id),
            serde_json::to_vec(&Event::HackathonInfo {
                id: hackathon.id,
                name: hackathon.name,
                status: hackathon.status,
            })
            .unwrap()
            .into(),
        )
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
