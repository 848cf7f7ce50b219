use crate::{
    error::{self, DatabaseError, Result},
    extractors::ValidatedJson,
    utils::hash_password,
    StateTrait,
};
use axum::{extract::State, http::StatusCode};
use chrono::Utc;
use entity::users::{self, constraints::*, Role};
use sea_orm::{EntityTrait, Set};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct Request {
    #[validate(length(min = 3, max = 64))]
    pub username: String,
    #[validate(length(min = 8))]
    pub password: String,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub full_name: String,
}

pub async fn register<S: StateTrait>(
    State(state): State<S>,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<StatusCode> {
    let user = users::ActiveModel {
        id: Set(Uuid::new_v4()),
        username: Set(request.username),
        password_hash: Set(hash_password(&request.password)?),
        email: Set(request.email),
        full_name: Set(request.full_name),
        role: Set(Role::Participant),
        created_at: Set(Utc::now()),
    };

    let result = users::Entity::insert(user)
        .exec_without_returning(state.db())
        .await;

    match result {
        Err(err) if err.unique_violation(UC_USERS_USERNAME) => return Err(error::USERNAME_TAKEN),
        r => r?,
    };

    Ok(StatusCode::CREATED)
}
