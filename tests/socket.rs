mod utils;

use tokio_tungstenite::tungstenite::Message;
use utils::{get_socket_message, prelude::*};
use uuid::Uuid;

#[tokio::test]
#[serial]
async fn auth_timeout() {
    let app = App::new().await;

    let mut socket = app.socket("/v1/ws").start().await;

    assert_close_frame_error!(socket.next().await, error::WEBSOCKET_AUTH_TIMEOUT);
}

#[tokio::test]
#[serial]
async fn wrong_message_type() {
    let app = App::new().await;

    let mut socket = app.socket("/v1/ws").start().await;

    socket
        .send(Message::Binary(Vec::from("asd".as_bytes())))
        .await
        .unwrap();

    assert_close_frame_error!(socket.next().await, error::WEBSOCKET_WRONG_MESSAGE_TYPE);
}

#[tokio::test]
#[serial]
async fn invalid_token() {
    let app = App::new().await;
    let admin = app.register_admin().await;
    let hackathon_id = app.create_hackathon(&admin).await;

    let mut socket = app.socket("/v1/ws").start().await;

    socket
        .send(Message::Text(
            json!({
                "token": "some random invalid token",
                "hackathon": hackathon_id,
            })
            .to_string(),
        ))
        .await
        .unwrap();

    assert_close_frame_error!(socket.next().await, error::COULD_NOT_GET_CLAIMS);
}

#[tokio::test]
#[serial]
async fn hackathon_not_found() {
    let app = App::new().await;
    let user = app.register_user().await;

    let mut socket = app.socket("/v1/ws").start().await;

    socket
        .send(Message::Text(
            json!({
                "token": user.access_token,
                "hackathon": Uuid::new_v4(),
            })
            .to_string(),
        ))
        .await
        .unwrap();

    assert_close_frame_error!(socket.next().await, error::HACKATHON_NOT_FOUND);
}

#[tokio::test]
#[serial]
async fn first_event_is_the_leaderboard() {
    let app = App::new().await;
    let admin = app.register_admin().await;
    let owner = app.register_user().await;
    let hackathon_id = app.create_hackathon(&admin).await;
    let team_id = app.create_team(&hackathon_id, &owner).await;

    let mut socket = app.socket("/v1/ws").start().await;

    socket
        .send(Message::Text(
            json!({
                "token": owner.access_token,
                "hackathon": hackathon_id,
            })
            .to_string(),
        ))
        .await
        .unwrap();

    let message = get_socket_message(socket.next().await);

    assert_event_type!(message, "LEADERBOARD");
    assert_eq!(message["data"]["entries"][0]["team_id"], team_id.to_string());
    assert_eq!(message["data"]["entries"][0]["total_score"], 0.0);
}

#[tokio::test]
#[serial]
async fn grading_pushes_fresh_standings() {
    let app = App::new().await;
    let admin = app.register_admin().await;
    let judge = app.register_judge().await;
    let owner = app.register_user().await;
    let hackathon_id = app.create_hackathon(&admin).await;
    let team_id = app.create_team(&hackathon_id, &owner).await;
    let exercise_id = app.create_exercise(&admin, &hackathon_id, 100.0).await;
    let team_exercise_id = app.assign_exercise(&admin, &exercise_id, &team_id).await;
    let submission_id = app.submit_text(&owner, &team_exercise_id, "answer").await;

    let mut socket = app.socket("/v1/ws").start().await;

    socket
        .send(Message::Text(
            json!({
                "token": owner.access_token,
                "hackathon": hackathon_id,
            })
            .to_string(),
        ))
        .await
        .unwrap();

    let message = get_socket_message(socket.next().await);
    assert_event_type!(message, "LEADERBOARD");

    app.create_grade(&judge, &submission_id, 85.0).await;

    let message = get_socket_message(socket.next().await);

    assert_event_type!(message, "LEADERBOARD");
    assert_eq!(message["data"]["entries"][0]["team_id"], team_id.to_string());
    assert_eq!(message["data"]["entries"][0]["total_score"], 85.0);
}
