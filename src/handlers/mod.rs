mod ai_grading;
mod auth;
mod exercise;
mod grade;
mod hackathon;
mod leaderboard;
pub mod socket;
mod submission;
mod team;

use crate::state::StateTrait;
use axum::{extract::State, http::StatusCode, routing::get, Router};
use sea_orm::ConnectionTrait;
use tower_http::services::ServeDir;

pub fn routes<S: StateTrait>(state: S) -> Router<S> {
    let uploads = ServeDir::new(state.storage().local_root());

    Router::new()
        .nest(
            "/v1",
            Router::new()
                .nest("/auth", auth::routes::<S>())
                .nest("/hackathon", hackathon::routes::<S>())
                .nest("/team", team::routes::<S>())
                .nest("/exercise", exercise::routes::<S>())
                .nest("/team-exercise", exercise::team_exercise_routes::<S>())
                .nest("/submission", submission::routes::<S>())
                .nest("/grade", grade::routes::<S>())
                .nest("/ai-grading", ai_grading::routes::<S>())
                .nest("/leaderboard", leaderboard::routes::<S>())
                .route("/ws", get(socket::ws_handler::<S>)),
        )
        .route("/livez", get(liveness::<S>))
        .route("/readyz", get(|| async {}))
        .nest_service("/uploads", uploads)
}

async fn liveness<S: StateTrait>(State(state): State<S>) -> StatusCode {
    if state.db().execute_unprepared("select 1").await.is_err() {
        return StatusCode::INTERNAL_SERVER_ERROR;
    }

    if state.nats().connection_state() != async_nats::connection::State::Connected {
        return StatusCode::INTERNAL_SERVER_ERROR;
    }

    StatusCode::OK
}
