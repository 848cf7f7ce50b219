use crate::{
    error::{self, Result},
    jwt::Claims,
    utils::{recompute_leaderboard, topics},
    StateTrait,
};
use axum::{
    extract::{
        ws::{close_code, CloseFrame, Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::IntoResponse,
};
use bytes::Buf;
use entity::{hackathons, leaderboard};
use futures::StreamExt;
use sea_orm::EntityTrait;
use serde::{Deserialize, Serialize};
use std::{borrow::Cow, time::Duration};
use tokio::time;
use tracing::Instrument;
use uuid::Uuid;

#[derive(Debug, Serialize)]
#[serde(tag = "event", content = "data", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Event {
    Leaderboard {
        entries: Vec<leaderboard::Model>,
    },
    JoinTeam {
        user: Uuid,
    },
    LeaveTeam {
        user: Uuid,
    },
    HackathonInfo {
        id: Uuid,
        name: String,
        status: hackathons::Status,
    },
}

#[derive(Debug, Deserialize)]
struct AuthRequest {
    token: String,
    hackathon: Uuid,
}

pub async fn ws_handler<S: StateTrait>(
    State(state): State<S>,
    ws: WebSocketUpgrade,
) -> impl IntoResponse {
    ws.on_upgrade(|mut socket: WebSocket| async move {
        if let Err(err) = socket_handler(state, &mut socket).await {
            let error_bytes = err.to_bytes();
            let error_text = std::str::from_utf8(error_bytes.chunk()).unwrap();

            // it's okay to ignore the error here
            let _ = socket
                .send(Message::Close(Some(CloseFrame {
                    code: close_code::ERROR,
                    reason: Cow::Owned(error_text.to_owned()),
                })))
                .await;
            warn!("socket ended with error: {:?}", err);
        }
    })
}

async fn socket_handler<S: StateTrait>(state: S, socket: &mut WebSocket) -> Result<()> {
    let (hackathon_id, claims) = socket_auth(&state, socket).await?;
    let claims_span = info_span!("claims", user_id = claims.sub.to_string());

    async move {
        let mut subscriber = state
            .nats()
            .subscribe(topics::hackathon_leaderboard(&hackathon_id))
            .await
            .map_err(|err| {
                error!("failed to subscribe to the leaderboard topic: {:?}", err);
                error::NATS_ERROR
            })?;

        let entries = recompute_leaderboard(state.db(), &hackathon_id).await?;

        socket
            .send(Message::Text(
                serde_json::to_string(&Event::Leaderboard { entries }).unwrap(),
            ))
            .await
            .map_err(|err| {
                error!("websocket error: {:?}", err);
                error::WEBSOCKET_ERROR
            })?;

        loop {
            tokio::select! {
                message = subscriber.next() => {
                    let Some(message) = message else {
                        error!("leaderboard subscription closed unexpectedly");
                        break Err(error::INTERNAL)
                    };

                    let payload = String::from_utf8_lossy(&message.payload).into_owned();

                    if let Err(err) = socket.send(Message::Text(payload)).await {
                        error!("websocket error: {:?}", err);
                        break Err(error::WEBSOCKET_ERROR)
                    }
                }
                message = socket.next() => {
                    match message {
                        Some(Ok(Message::Close(_))) | None => break Ok(()),
                        Some(Ok(_)) => {
                            warn!("got message on websocket");
                            continue
                        }
                        Some(Err(err)) => {
                            error!("websocket error: {:?}", err);
                            break Err(error::WEBSOCKET_ERROR)
                        },
                    };
                }
            }
        }
    }
    .instrument(claims_span)
    .await
}

/// The first client message must arrive within a second and carry the token
/// and the hackathon to follow.
async fn socket_auth<S: StateTrait>(state: &S, socket: &mut WebSocket) -> Result<(Uuid, Claims)> {
    let message = tokio::select! {
        message = socket.next() => {
            match message {
                None => {
                    error!("websocket stream closed unexpectedly");
                    // The error doesn't matter because the socket is already closed
                    return Err(error::INTERNAL);
                },
                Some(Ok(message)) => message,
                Some(Err(err)) => {
                    error!("websocket error: {:?}", err);
                    return Err(error::WEBSOCKET_ERROR)
                },
            }
        },
        _ = time::sleep(Duration::from_secs(1)) => {
            return Err(error::WEBSOCKET_AUTH_TIMEOUT);
        },
    };

    let text = match message {
        Message::Text(text) => text,
        _ => return Err(error::WEBSOCKET_WRONG_MESSAGE_TYPE),
    };

    let request: AuthRequest = serde_json::from_str(&text)?;
    let claims = state.jwt().get_claims(&request.token)?;

    let hackathon = hackathons::Entity::find_by_id(request.hackathon)
        .one(state.db())
        .await?
        .ok_or(error::HACKATHON_NOT_FOUND)?;

    Ok((hackathon.id, claims))
}
