mod login;
mod register;

use crate::state::StateTrait;
use axum::{routing::post, Router};

/// Routes for account management
///
/// POST /auth/register
/// POST /auth/login
pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .route("/register", post(register::register::<S>))
        .route("/login", post(login::login::<S>))
}
