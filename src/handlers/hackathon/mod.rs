mod create;
mod delete;
mod get;
mod list;
mod update;

use super::{exercise, team};
use crate::{middlewares::RoleLayer, state::StateTrait};
use axum::{
    handler::Handler,
    routing::{delete, get, patch, post},
    Router,
};
use entity::users::Role;

/// Routes for hackathon management
///
/// GET   /hackathon
/// GET   /hackathon/:id
/// POST  /hackathon/:id/team
/// GET   /hackathon/:id/team
/// GET   /hackathon/:id/exercise
///
/// # Admin actions
/// POST   /hackathon
/// PATCH  /hackathon/:id
/// DELETE /hackathon/:id
/// POST   /hackathon/:id/exercise
pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .route(
            "/",
            post(create::create_hackathon::<S>.layer(RoleLayer::new(&[Role::Admin]))),
        )
        .route("/", get(list::list_hackathons::<S>))
        .route("/:id", get(get::get_hackathon::<S>))
        .route(
            "/:id",
            patch(update::update_hackathon::<S>.layer(RoleLayer::new(&[Role::Admin]))),
        )
        .route(
            "/:id",
            delete(delete::delete_hackathon::<S>.layer(RoleLayer::new(&[Role::Admin]))),
        )
        .route("/:id/team", post(team::create_team::<S>))
        .route("/:id/team", get(team::list_teams::<S>))
        .route(
            "/:id/exercise",
            post(exercise::create_exercise::<S>.layer(RoleLayer::new(&[Role::Admin]))),
        )
        .route("/:id/exercise", get(exercise::list_exercises::<S>))
}
