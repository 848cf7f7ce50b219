use super::{
    db,
    request::{RequestBuilder, SocketRequestBuilder},
    user::User,
};
use entity::users::{self, Role};
use http::StatusCode;
use reqwest::Client;
use sea_orm::{ActiveModelTrait, DbConn, EntityTrait, IntoActiveModel, Set};
use serde_json::{json, Value};
use std::{env, net::SocketAddr};
use tokio::net::TcpListener;
use uuid::Uuid;

fn default_env(key: &str, value: &str) {
    if env::var(key).is_err() {
        env::set_var(key, value);
    }
}

pub struct App {
    addr: SocketAddr,
    client: Client,
    db: DbConn,
    _upload_dir: tempfile::TempDir,
}

impl App {
    pub async fn new() -> Self {
        dotenvy::dotenv().ok();

        default_env("JWT_SECRET", "not-so-secret");
        default_env("NATS_URL", "nats://127.0.0.1:4222");
        default_env("S3_DISABLED", "true");

        let upload_dir = tempfile::tempdir().expect("failed to create upload dir");
        env::set_var("LOCAL_STORAGE_DIR", upload_dir.path());

        let db = db::setup().await;

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let state = hackathon_backend::State::with_database(db.clone()).await;

        tokio::spawn(async move {
            hackathon_backend::run(listener, state).await.unwrap();
        });

        App {
            addr,
            client: Client::new(),
            db,
            _upload_dir: upload_dir,
        }
    }

    pub fn db(&self) -> &DbConn {
        &self.db
    }

    fn get_url(&self, url: &str) -> String {
        format!("http://{}{}", self.addr, url)
    }

    #[allow(unused)]
    pub fn get(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(self.client.get(self.get_url(url)))
    }

    pub fn post(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(self.client.post(self.get_url(url)))
    }

    #[allow(unused)]
    pub fn patch(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(self.client.patch(self.get_url(url)))
    }

    #[allow(unused)]
    pub fn delete(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(self.client.delete(self.get_url(url)))
    }

    #[allow(unused)]
    pub fn socket(&self, url: &str) -> SocketRequestBuilder {
        let uri = format!("ws://{}{}", self.addr, url);

        SocketRequestBuilder::new(
            http::request::Builder::new()
                .method("GET")
                .header(http::header::HOST, self.addr.to_string())
                .header(http::header::CONNECTION, "Upgrade")
                .header(http::header::UPGRADE, "websocket")
                .header(http::header::SEC_WEBSOCKET_VERSION, "13")
                .header(
                    http::header::SEC_WEBSOCKET_KEY,
                    tokio_tungstenite::tungstenite::handshake::client::generate_key(),
                )
                .uri(uri),
        )
    }
}

impl App {
    #[allow(unused)]
    pub async fn register_user(&self) -> User {
        self.register_user_with_role(Role::Participant).await
    }

    #[allow(unused)]
    pub async fn register_admin(&self) -> User {
        self.register_user_with_role(Role::Admin).await
    }

    #[allow(unused)]
    pub async fn register_judge(&self) -> User {
        self.register_user_with_role(Role::Judge).await
    }

    /// Registration always creates a participant, so elevated roles are
    /// written straight to the database before logging in. The login token
    /// carries the role claim.
    pub async fn register_user_with_role(&self, role: Role) -> User {
        let username = super::uuid();
        let password = "correct-horse-battery".to_owned();

        let res = self
            .post("/v1/auth/register")
            .json(&json!({
                "username": username,
                "password": password,
                "full_name": "Test User",
            }))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::CREATED);

        if role != Role::Participant {
            let user = users::Entity::find_by_username(&username)
                .one(&self.db)
                .await
                .unwrap()
                .expect("registered user is missing");

            let mut user = user.into_active_model();
            user.role = Set(role);
            user.update(&self.db).await.unwrap();
        }

        let res = self
            .post("/v1/auth/login")
            .json(&json!({
                "username": username,
                "password": password,
            }))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::OK);

        let body: Value = res.json().await;

        User {
            id: Uuid::parse_str(body["user_id"].as_str().unwrap()).unwrap(),
            username,
            password,
            access_token: body["token"].as_str().unwrap().to_owned(),
        }
    }

    #[allow(unused)]
    pub async fn create_hackathon(&self, admin: &User) -> Uuid {
        let res = self
            .post("/v1/hackathon")
            .user(admin)
            .json(&json!({
                "name": format!("Hackathon {}", super::uuid()),
            }))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::CREATED);

        let body: Value = res.json().await;
        Uuid::parse_str(body["id"].as_str().unwrap()).unwrap()
    }

    #[allow(unused)]
    pub async fn create_team(&self, hackathon_id: &Uuid, owner: &User) -> Uuid {
        let res = self
            .post(&format!("/v1/hackathon/{hackathon_id}/team"))
            .user(owner)
            .json(&json!({
                "name": format!("Team {}", super::uuid()),
            }))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::CREATED);

        let body: Value = res.json().await;
        Uuid::parse_str(body["id"].as_str().unwrap()).unwrap()
    }

    #[allow(unused)]
    pub async fn create_exercise(&self, admin: &User, hackathon_id: &Uuid, max_score: f64) -> Uuid {
        let res = self
            .post(&format!("/v1/hackathon/{hackathon_id}/exercise"))
            .user(admin)
            .json(&json!({
                "title": format!("Exercise {}", super::uuid()),
                "kind": "coding",
                "max_score": max_score,
            }))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::CREATED);

        let body: Value = res.json().await;
        Uuid::parse_str(body["id"].as_str().unwrap()).unwrap()
    }

    #[allow(unused)]
    pub async fn assign_exercise(&self, admin: &User, exercise_id: &Uuid, team_id: &Uuid) -> Uuid {
        let res = self
            .post(&format!("/v1/exercise/{exercise_id}/assign"))
            .user(admin)
            .json(&json!({
                "team_id": team_id,
            }))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::CREATED);

        let body: Value = res.json().await;
        Uuid::parse_str(body["id"].as_str().unwrap()).unwrap()
    }

    #[allow(unused)]
    pub async fn submit_text(&self, user: &User, team_exercise_id: &Uuid, content: &str) -> Uuid {
        let res = self
            .post("/v1/submission")
            .user(user)
            .json(&json!({
                "team_exercise_id": team_exercise_id,
                "kind": "text",
                "content": content,
            }))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::CREATED);

        let body: Value = res.json().await;
        Uuid::parse_str(body["id"].as_str().unwrap()).unwrap()
    }

    #[allow(unused)]
    pub async fn create_grade(&self, judge: &User, submission_id: &Uuid, score: f64) {
        let res = self
            .post("/v1/grade")
            .user(judge)
            .json(&json!({
                "submission_id": submission_id,
                "score": score,
            }))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::CREATED);
    }
}
