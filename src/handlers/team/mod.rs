mod create;
mod join;
mod kick;
mod list;
mod members;

pub(super) use create::create_team;
pub(super) use list::list_teams;

use crate::state::StateTrait;
use axum::{
    routing::{delete, get, post},
    Router,
};

/// Routes for team management, the creation and listing endpoints live under
/// the owning hackathon
///
/// POST   /team/:id/member
/// DELETE /team/:id/member/:user_id
/// GET    /team/:id/member
pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .route("/:id/member", post(join::join_team::<S>))
        .route("/:id/member/:user_id", delete(kick::remove_member::<S>))
        .route("/:id/member", get(members::list_members::<S>))
}
