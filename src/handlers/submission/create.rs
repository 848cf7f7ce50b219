use crate::{
    error::{self, Result},
    extractors::{Json, UserID},
    utils::submission_key,
    StateTrait,
};
use axum::{
    extract::{FromRequest, Multipart, Request, State},
    http::{header::CONTENT_TYPE, StatusCode},
};
use chrono::Utc;
use entity::{
    submissions::{self, Kind},
    team_exercises::{self, Status},
};
use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, IntoActiveModel, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Deserialize)]
pub struct JsonRequest {
    pub team_exercise_id: Uuid,
    pub kind: Kind,
    pub content: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Serialize)]
pub struct Response {
    pub id: Uuid,
    pub url: Option<String>,
}

/// File submissions arrive as multipart, every other kind as JSON. The
/// declared kind decides which payload is accepted.
pub async fn create_submission<S: StateTrait>(
    State(state): State<S>,
    user_id: UserID,
    request: Request,
) -> Result<(StatusCode, Json<Response>)> {
    let content_type = request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    if content_type.starts_with(mime::MULTIPART_FORM_DATA.as_ref()) {
        let multipart = Multipart::from_request(request, &state)
            .await
            .map_err(|_| error::MULTIPART_ERROR)?;

        create_file_submission(state, user_id, multipart).await
    } else {
        let Json(json) = Json::<JsonRequest>::from_request(request, &state).await?;

        create_inline_submission(state, user_id, json).await
    }
}

async fn create_inline_submission<S: StateTrait>(
    state: S,
    user_id: UserID,
    request: JsonRequest,
) -> Result<(StatusCode, Json<Response>)> {
    if request.kind == Kind::File {
        return Err(error::UNSUPPORTED_SUBMISSION_KIND);
    }

    let content = match request.content {
        Some(content) if !content.is_empty() => content,
        _ => return Err(error::MISSING_SUBMISSION_CONTENT),
    };

    let id = insert_submission(
        state.db(),
        &request.team_exercise_id,
        &user_id,
        request.kind,
        Some(content),
        None,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(Response { id, url: None })))
}

async fn create_file_submission<S: StateTrait>(
    state: S,
    user_id: UserID,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<Response>)> {
    let mut team_exercise_id = None;
    let mut file = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| error::MULTIPART_ERROR)?
    {
        match field.name() {
            Some("team_exercise_id") => {
                let text = field.text().await.map_err(|_| error::MULTIPART_ERROR)?;
                let id = Uuid::parse_str(&text).map_err(|_| error::MULTIPART_ERROR)?;
                team_exercise_id = Some(id);
            }
            Some("file") => {
                let filename = field
                    .file_name()
                    .map(|name| name.to_owned())
                    .ok_or(error::MISSING_FILE)?;
                let data = field.bytes().await.map_err(|_| error::MULTIPART_ERROR)?;
                file = Some((filename, data));
            }
            _ => {}
        }
    }

    let team_exercise_id = team_exercise_id.ok_or(error::MULTIPART_ERROR)?;
    let (filename, data) = file.ok_or(error::MISSING_FILE)?;

    let key = submission_key(&filename);
    let url = state.storage().put(&key, &data).await?;

    let id = insert_submission(
        state.db(),
        &team_exercise_id,
        &user_id,
        Kind::File,
        None,
        Some(key),
    )
    .await?;

    Ok((StatusCode::CREATED, Json(Response { id, url: Some(url) })))
}

async fn insert_submission<C>(
    db: &C,
    team_exercise_id: &Uuid,
    submitted_by: &Uuid,
    kind: Kind,
    content: Option<String>,
    file_path: Option<String>,
) -> Result<Uuid>
where
    C: ConnectionTrait,
{
    let team_exercise = team_exercises::Entity::find_by_id(*team_exercise_id)
        .one(db)
        .await?
        .ok_or(error::TEAM_EXERCISE_NOT_FOUND)?;

    let submission = submissions::ActiveModel {
        id: Set(Uuid::new_v4()),
        team_exercise_id: Set(team_exercise.id),
        submitted_by: Set(*submitted_by),
        kind: Set(kind),
        content: Set(content),
        file_path: Set(file_path),
        submitted_at: Set(Utc::now()),
    };

    let submission = submissions::Entity::insert(submission)
        .exec_with_returning(db)
        .await?;

    let mut team_exercise = team_exercise.into_active_model();
    team_exercise.status = Set(Status::Submitted);
    team_exercise.update(db).await?;

    Ok(submission.id)
}
