use crate::{ai::AiClient, jwt::Jwt, storage::Storage};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DbConn, TransactionTrait};
use std::{env, sync::Arc};
use tracing::log::LevelFilter;

pub trait StateTrait: Send + Sync + Clone + 'static {
    type Db: ConnectionTrait + TransactionTrait + Clone;

    fn db(&self) -> &Self::Db;
    fn nats(&self) -> &async_nats::Client;
    fn jwt(&self) -> &Jwt;
    fn storage(&self) -> &Storage;
    fn ai(&self) -> &AiClient;
}

pub struct State {
    database: DbConn,
    nats: async_nats::Client,
    jwt: Jwt,
    storage: Storage,
    ai: AiClient,
}

impl State {
    pub async fn new() -> Arc<Self> {
        Self::with_database(Self::connect_database().await).await
    }

    pub async fn with_database(conn: DbConn) -> Arc<Self> {
        Arc::new(Self {
            database: conn,
            nats: Self::connect_nats().await,
            jwt: Jwt::from_env(),
            storage: Storage::from_env().await,
            ai: AiClient::from_env(),
        })
    }

    async fn connect_nats() -> async_nats::Client {
        info!("Trying to connect to NATS");

        let url = env::var("NATS_URL").expect("NATS_URL is not set");
        let client = async_nats::connect(url)
            .await
            .expect("failed to connect to NATS");

        info!("Connected to NATS");

        client
    }

    async fn connect_database() -> DbConn {
        info!("Trying to connect to database");

        let url = env::var("DATABASE_URL").expect("DATABASE_URL is not set");
        let mut opts = ConnectOptions::new(url);
        opts.sqlx_logging_level(LevelFilter::Debug);

        let db = Database::connect(opts)
            .await
            .expect("failed to connect to database");

        info!("Connected to database");

        db
    }
}

impl StateTrait for Arc<State> {
    type Db = DbConn;

    fn db(&self) -> &Self::Db {
        &self.database
    }

    fn nats(&self) -> &async_nats::Client {
        &self.nats
    }

    fn jwt(&self) -> &Jwt {
        &self.jwt
    }

    fn storage(&self) -> &Storage {
        &self.storage
    }

    fn ai(&self) -> &AiClient {
        &self.ai
    }
}
