mod get;
mod refresh;
mod team;

use crate::{
    error::Result,
    handlers::socket::Event,
    state::StateTrait,
    utils::{recompute_leaderboard, topics},
};
use axum::{
    routing::{get, post},
    Router,
};
use entity::leaderboard;
use uuid::Uuid;

/// Routes for the leaderboard
///
/// GET  /leaderboard?hackathon_id=&detailed=&podium=
/// POST /leaderboard/refresh
/// GET  /leaderboard/team/:id
pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .route("/", get(get::get_leaderboard::<S>))
        .route("/refresh", post(refresh::refresh_leaderboard::<S>))
        .route("/team/:id", get(team::get_team_rank::<S>))
}

/// Recompute the hackathon's leaderboard and push the fresh standings to its
/// live topic.
pub(super) async fn recompute_and_publish<S: StateTrait>(
    state: &S,
    hackathon_id: &Uuid,
) -> Result<Vec<leaderboard::Model>> {
    let entries = recompute_leaderboard(state.db(), hackathon_id).await?;

    state
        .nats()
        .publish(
            topics::hackathon_leaderboard(hackathon_id),
            serde_json::to_vec(&Event::Leaderboard {
                entries: entries.clone(),
            })
            .unwrap()
            .into(),
        )
        .await?;

    Ok(entries)
}
