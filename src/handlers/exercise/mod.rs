mod assign;
mod create;
mod delete;
mod get;
mod list;
mod start;
mod update;

pub(super) use create::create_exercise;
pub(super) use list::list_exercises;

use crate::{middlewares::RoleLayer, state::StateTrait};
use axum::{
    handler::Handler,
    routing::{delete, get, patch, post},
    Router,
};
use entity::users::Role;

/// Routes for exercise management, creation and listing live under the
/// owning hackathon
///
/// GET  /exercise/:id
///
/// # Admin actions
/// PATCH  /exercise/:id
/// DELETE /exercise/:id
/// POST   /exercise/:id/assign
pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .route("/:id", get(get::get_exercise::<S>))
        .route(
            "/:id",
            patch(update::update_exercise::<S>.layer(RoleLayer::new(&[Role::Admin]))),
        )
        .route(
            "/:id",
            delete(delete::delete_exercise::<S>.layer(RoleLayer::new(&[Role::Admin]))),
        )
        .route(
            "/:id/assign",
            post(assign::assign_exercise::<S>.layer(RoleLayer::new(&[Role::Admin]))),
        )
}

/// POST /team-exercise/:id/start
pub fn team_exercise_routes<S: StateTrait>() -> Router<S> {
    Router::new().route("/:id/start", post(start::start_team_exercise::<S>))
}
