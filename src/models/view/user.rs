use serde::{Deserialize, Serialize};

use crate::entities::local_user_entity::LocalUser;

/// What auth responses expose about a user; the password hash never
/// leaves the entity layer.
#[derive(Debug, Serialize, Deserialize)]
pub struct UserView {
    pub id: String,
    pub email: String,
    pub username: String,
}

impl From<LocalUser> for UserView {
    fn from(user: LocalUser) -> Self {
        UserView {
            id: user.id.map(|id| id.to_raw()).unwrap_or_default(),
            email: user.email,
            username: user.username,
        }
    }
}
