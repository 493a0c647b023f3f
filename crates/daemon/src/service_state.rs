use common::prelude::AuthTokens;
use url::Url;

use crate::database::{Database, DatabaseSetupError};
use crate::service_config::Config;

/// Main service state, shared by every request handler
#[derive(Clone)]
pub struct State {
    database: Database,
    auth: AuthTokens,
}

impl State {
    pub async fn from_config(config: &Config) -> Result<Self, StateSetupError> {
        // 1. Setup database
        let sqlite_database_url = match config.sqlite_path {
            Some(ref path) => Url::parse(&format!("sqlite://{}", path.display()))
                .map_err(|_| StateSetupError::InvalidDatabaseUrl),
            // otherwise just set up an in-memory database
            None => Url::parse("sqlite::memory:").map_err(|_| StateSetupError::InvalidDatabaseUrl),
        }?;
        tracing::info!("Database URL: {:?}", sqlite_database_url);
        let database = Database::connect(&sqlite_database_url).await?;

        // 2. Setup token keys
        if config.token_secret.is_empty() {
            return Err(StateSetupError::MissingTokenSecret);
        }
        let auth = AuthTokens::new(
            config.token_secret.as_bytes(),
            time::Duration::seconds(config.token_ttl_secs),
        );

        Ok(Self { database, auth })
    }

    /// Build state directly from parts, used by tests
    pub fn new(database: Database, auth: AuthTokens) -> Self {
        Self { database, auth }
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn auth(&self) -> &AuthTokens {
        &self.auth
    }
}

impl AsRef<Database> for State {
    fn as_ref(&self) -> &Database {
        self.database()
    }
}

impl AsRef<AuthTokens> for State {
    fn as_ref(&self) -> &AuthTokens {
        self.auth()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StateSetupError {
    #[error("Database setup error")]
    DatabaseSetupError(#[from] DatabaseSetupError),
    #[error("Invalid database URL")]
    InvalidDatabaseUrl,
    #[error("Token secret must not be empty")]
    MissingTokenSecret,
}
