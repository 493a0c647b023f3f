use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use super::avatar::gravatar_url;

/// A registered user.
///
/// The password hash never leaves the process: it is skipped on
/// serialization and defaulted on deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub avatar_url: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl Account {
    pub fn new(name: String, email: String, password_hash: String) -> Self {
        let avatar_url = gravatar_url(&email);
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            password_hash,
            avatar_url,
            created_at: OffsetDateTime::now_utc(),
        }
    }
}
