mod batch;
mod grade;

use crate::{middlewares::RoleLayer, state::StateTrait};
use axum::{handler::Handler, routing::post, Router};
use entity::users::Role;

/// Routes for AI-assisted grading
///
/// # Judge and admin actions
/// POST /ai-grading/grade
/// POST /ai-grading/batch-grade
pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .route(
            "/grade",
            post(grade::ai_grade::<S>.layer(RoleLayer::new(&[Role::Admin, Role::Judge]))),
        )
        .route(
            "/batch-grade",
            post(batch::ai_batch_grade::<S>.layer(RoleLayer::new(&[Role::Admin, Role::Judge]))),
        )
}
