pub mod macros;
pub mod prelude;
mod db;
mod request;
mod response;
pub mod setup;
pub mod user;

use serde_json::Value;
use tokio_tungstenite::tungstenite::Message;
use uuid::Uuid;

#[allow(unused)]
#[track_caller]
pub fn get_socket_message(
    message: Option<Result<Message, tokio_tungstenite::tungstenite::Error>>,
) -> Value {
    tracing::debug!("socket message: {message:?}");
    match message {
        Some(Ok(Message::Text(text))) => serde_json::from_str(&text).expect("message is not json"),
        other => panic!("expected a text message, got: {other:?}"),
    }
}

#[allow(unused)]
pub fn uuid() -> String {
    Uuid::new_v4()
        .as_simple()
        .encode_lower(&mut Uuid::encode_buffer())
        .to_owned()
}
