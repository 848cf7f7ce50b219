use crate::{
    ai::{AiGrade, GradingCriteria},
    error::{self, Result},
    extractors::{Json, UserID},
    handlers::leaderboard::recompute_and_publish,
    utils::{extension_hint, record_grade},
    StateTrait,
};
use axum::extract::State;
use entity::{exercises, submissions, team_exercises};
use sea_orm::{EntityTrait, TransactionTrait};
use serde::Deserialize;
use uuid::Uuid;

#[derive(Deserialize)]
pub struct Request {
    pub submission_id: Uuid,
}

pub async fn ai_grade<S: StateTrait>(
    State(state): State<S>,
    user_id: UserID,
    Json(request): Json<Request>,
) -> Result<Json<AiGrade>> {
    let grade = grade_submission(&state, &user_id, &request.submission_id).await?;

    Ok(Json(grade))
}

/// Grade one submission with the model and record the result under the
/// calling judge, then refresh and publish the standings.
pub(super) async fn grade_submission<S: StateTrait>(
    state: &S,
    grader_id: &Uuid,
    submission_id: &Uuid,
) -> Result<AiGrade> {
    let submission = submissions::Entity::find_by_id(*submission_id)
        .one(state.db())
        .await?
        .ok_or(error::SUBMISSION_NOT_FOUND)?;

    let team_exercise = team_exercises::Entity::find_by_id(submission.team_exercise_id)
        .one(state.db())
        .await?
        .ok_or(error::TEAM_EXERCISE_NOT_FOUND)?;

    let exercise = exercises::Entity::find_by_id(team_exercise.exercise_id)
        .one(state.db())
        .await?
        .ok_or(error::EXERCISE_NOT_FOUND)?;

    let (content, extension) = match (&submission.content, &submission.file_path) {
        (Some(content), _) => (content.clone(), None),
        (None, Some(key)) => {
            let data = state.storage().get(key).await?;

            (
                String::from_utf8_lossy(&data).into_owned(),
                extension_hint(key).map(str::to_owned),
            )
        }
        (None, None) => return Err(error::MISSING_SUBMISSION_CONTENT),
    };

    let criteria = GradingCriteria {
        title: &exercise.title,
        description: exercise.description.as_deref(),
        rubric: exercise.rubric.as_deref(),
        kind: exercise.kind,
        max_score: exercise.max_score,
    };

    let grade = state
        .ai()
        .grade(&content, extension.as_deref(), &criteria)
        .await?;

    let txn = state.db().begin().await?;

    let hackathon_id = record_grade(
        &txn,
        &submission.id,
        grader_id,
        grade.score,
        Some(grade.feedback.clone()),
    )
    .await?;

    txn.commit().await?;

    recompute_and_publish(state, &hackathon_id).await?;

    Ok(grade)
}
