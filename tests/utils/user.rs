use uuid::Uuid;

pub trait UserLike {
    fn access_token(&self) -> &str;
    fn id(&self) -> Uuid;
}

#[allow(unused)]
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub password: String,
    pub access_token: String,
}

impl UserLike for User {
    fn access_token(&self) -> &str {
        &self.access_token
    }

    fn id(&self) -> Uuid {
        self.id
    }
}
