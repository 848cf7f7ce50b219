#[macro_use]
extern crate tracing;

mod ai;
pub mod error;
mod extractors;
mod handlers;
mod jwt;
mod middlewares;
mod state;
mod storage;
mod utils;

use crate::{middlewares::middlewares, utils::SignalHandler};
pub use ai::AiClient;
pub use jwt::{Claims, Jwt};
pub use state::*;
pub use storage::Storage;
use tokio::net::TcpListener;
pub use utils::panic;

pub async fn run<S: StateTrait>(listener: TcpListener, state: S) -> anyhow::Result<()> {
    info!("listening on {}", listener.local_addr()?);

    let routes = handlers::routes::<S>(state.clone());
    let app = middlewares(state, routes);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(SignalHandler::new())
        .await?;

    Ok(())
}
