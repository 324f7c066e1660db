use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::auth::repo::User;

/// Request body for both auth actions. Every field defaults to an empty
/// string so presence checks live in one place, in the handler.
#[derive(Debug, Default, Deserialize)]
pub struct AuthRequest {
    #[serde(default)]
    pub action: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub username: String,
}

/// Response returned after register or login.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub success: bool,
    pub user: PublicUser,
}

/// Public part of the user returned to the client.
#[derive(Debug, Serialize)]
pub struct PublicUser {
    pub id: i64,
    pub email: String,
    pub username: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<User> for PublicUser {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            email: u.email,
            username: u.username,
            created_at: u.created_at,
        }
    }
}
