mod create;
mod get;

use crate::state::StateTrait;
use axum::{
    routing::{get, post},
    Router,
};

/// Routes for submissions
///
/// POST /submission  (JSON for text/url/github, multipart for file)
/// GET  /submission/:id
pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .route("/", post(create::create_submission::<S>))
        .route("/:id", get(get::get_submission::<S>))
}
