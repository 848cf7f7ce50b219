mod create;
mod delete;

use crate::{middlewares::RoleLayer, state::StateTrait};
use axum::{
    handler::Handler,
    routing::{delete, post},
    Router,
};
use entity::users::Role;

/// Routes for manual grading
///
/// # Judge and admin actions
/// POST   /grade
/// DELETE /grade/:id
pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .route(
            "/",
            post(create::create_grade::<S>.layer(RoleLayer::new(&[Role::Admin, Role::Judge]))),
        )
        .route(
            "/:id",
            delete(delete::delete_grade::<S>.layer(RoleLayer::new(&[Role::Admin, Role::Judge]))),
        )
}
