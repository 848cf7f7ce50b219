use crate::{
    ai,
    error::Result,
    extractors::{Json, UserID},
    StateTrait,
};
use axum::extract::State;
use serde::{Deserialize, Serialize};
use tokio::time;
use uuid::Uuid;

#[derive(Deserialize)]
pub struct Request {
    pub submission_ids: Vec<Uuid>,
}

#[derive(Serialize)]
pub struct Response {
    pub succeeded: u32,
    pub failed: u32,
}

/// Grades submissions one at a time with a fixed pause between provider
/// calls. A failing item is counted and skipped, the run always reaches the
/// end of the list.
pub async fn ai_batch_grade<S: StateTrait>(
    State(state): State<S>,
    user_id: UserID,
    Json(request): Json<Request>,
) -> Result<Json<Response>> {
    let mut succeeded = 0;
    let mut failed = 0;

    for (index, submission_id) in request.submission_ids.iter().enumerate() {
        if index > 0 {
            time::sleep(ai::BATCH_DELAY).await;
        }

        match super::grade::grade_submission(&state, &user_id, submission_id).await {
            Ok(_) => succeeded += 1,
            Err(err) => {
                warn!(
                    "batch grading failed for submission {}: {}",
                    submission_id,
                    err.message()
                );
                failed += 1;
            }
        }
    }

    Ok(Json(Response { succeeded, failed }))
}
