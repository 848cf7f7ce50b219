use crate::{
    error::{self, Result},
    extractors::{Json, UserID},
    StateTrait,
};
use axum::extract::{Path, State};
use entity::submissions;
use sea_orm::EntityTrait;
use serde::Serialize;
use uuid::Uuid;

#[serde_with::skip_serializing_none]
#[derive(Debug, Serialize)]
pub struct Response {
    #[serde(flatten)]
    pub submission: submissions::Model,
    pub url: Option<String>,
}

/// File-backed submissions get a fresh short-lived retrieval URL on every
/// read.
pub async fn get_submission<S: StateTrait>(
    State(state): State<S>,
    _user_id: UserID,
    Path(id): Path<Uuid>,
) -> Result<Json<Response>> {
    let submission = submissions::Entity::find_by_id(id)
        .one(state.db())
        .await?
        .ok_or(error::SUBMISSION_NOT_FOUND)?;

    let url = match &submission.file_path {
        Some(key) => Some(state.storage().retrieval_url(key, None).await?),
        None => None,
    };

    Ok(Json(Response { submission, url }))
}
