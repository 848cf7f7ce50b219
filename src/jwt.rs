use crate::error::{self, Result};
use chrono::{Duration, Utc};
use entity::users::Role;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::env;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub role: Role,
    pub exp: i64,
}

pub struct Jwt {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl Jwt {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    pub fn from_env() -> Self {
        let secret = env::var("JWT_SECRET").expect("JWT_SECRET is not set");
        Self::new(&secret)
    }

    pub fn encode(&self, user_id: &Uuid, role: Role) -> Result<String> {
        let claims = Claims {
            sub: *user_id,
            role,
            exp: (Utc::now() + Duration::hours(24)).timestamp(),
        };

        jsonwebtoken::encode(&Header::default(), &claims, &self.encoding).map_err(|err| {
            error!("failed to encode claims: {:?}", err);
            error::INTERNAL
        })
    }

    pub fn get_claims(&self, token: &str) -> Result<Claims> {
        jsonwebtoken::decode(token, &self.decoding, &Validation::default())
            .map(|data| data.claims)
            .map_err(|_| error::COULD_NOT_GET_CLAIMS)
    }
}
