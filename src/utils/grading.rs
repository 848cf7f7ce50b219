use crate::error::{self, Result};
use chrono::Utc;
use entity::{grades, submissions, team_exercises, teams};
use sea_orm::{
    sea_query::OnConflict, ActiveModelTrait, ConnectionTrait, EntityTrait, IntoActiveModel, Set,
};
use uuid::Uuid;

/// Upsert a grade on (submission, grader) and mark the owning team exercise
/// graded. Returns the hackathon the submission belongs to so the caller can
/// refresh and publish its leaderboard.
pub async fn record_grade<C>(
    db: &C,
    submission_id: &Uuid,
    graded_by: &Uuid,
    score: f64,
    feedback: Option<String>,
) -> Result<Uuid>
where
    C: ConnectionTrait,
{
    let Some(submission) = submissions::Entity::find_by_id(*submission_id).one(db).await? else {
        return Err(error::SUBMISSION_NOT_FOUND);
    };

    let grade = grades::ActiveModel {
        id: Set(Uuid::new_v4()),
        submission_id: Set(submission.id),
        graded_by: Set(*graded_by),
        score: Set(score),
        feedback: Set(feedback),
        graded_at: Set(Utc::now()),
    };

    grades::Entity::insert(grade)
        .on_conflict(
            OnConflict::columns([grades::Column::SubmissionId, grades::Column::GradedBy])
                .update_columns([
                    grades::Column::Score,
                    grades::Column::Feedback,
                    grades::Column::GradedAt,
                ])
                .to_owned(),
        )
        .exec(db)
        .await?;

    let Some(team_exercise) = team_exercises::Entity::find_by_id(submission.team_exercise_id)
        .one(db)
        .await?
    else {
        return Err(error::TEAM_EXERCISE_NOT_FOUND);
    };

    let team_id = team_exercise.team_id;

    let mut team_exercise = team_exercise.into_active_model();
    team_exercise.status = Set(team_exercises::Status::Graded);
    team_exercise.update(db).await?;

    let Some(team) = teams::Entity::find_by_id(team_id).one(db).await? else {
        return Err(error::TEAM_NOT_FOUND);
    };

    Ok(team.hackathon_id)
}
