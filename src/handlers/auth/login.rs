use crate::{
    error::{self, Result},
    extractors::Json,
    utils::verify_password,
    StateTrait,
};
use axum::extract::State;
use entity::users::{self, Role};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Deserialize)]
pub struct Request {
    pub username: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct Response {
    pub token: String,
    pub user_id: Uuid,
    pub role: Role,
}

pub async fn login<S: StateTrait>(
    State(state): State<S>,
    Json(request): Json<Request>,
) -> Result<Json<Response>> {
    let user = users::Entity::find_by_username(&request.username)
        .one(state.db())
        .await?
        .ok_or(error::WRONG_CREDENTIALS)?;

    if !verify_password(&request.password, &user.password_hash) {
        return Err(error::WRONG_CREDENTIALS);
    }

    let token = state.jwt().encode(&user.id, user.role)?;

    Ok(Json(Response {
        token,
        user_id: user.id,
        role: user.role,
    }))
}
