use clap::Args;
use rand::RngCore;

use devcircle_daemon::{spawn_service, ServiceConfig};

/// Default token lifetime in seconds (100 hours)
const DEFAULT_TOKEN_TTL_SECS: i64 = 360_000;

#[derive(Args, Debug, Clone)]
pub struct Serve {
    /// API server port
    #[arg(long, default_value_t = 5000)]
    pub port: u16,

    /// Path to the sqlite database (in-memory if not set)
    #[arg(long)]
    pub sqlite_path: Option<std::path::PathBuf>,

    /// Token signing secret (falls back to DEVCIRCLE_TOKEN_SECRET, then a
    /// random per-process secret)
    #[arg(long)]
    pub token_secret: Option<String>,

    /// Token lifetime in seconds
    #[arg(long, default_value_t = DEFAULT_TOKEN_TTL_SECS)]
    pub token_ttl_secs: i64,

    /// Directory for log files (logs to stdout only if not set)
    #[arg(long)]
    pub log_dir: Option<std::path::PathBuf>,
}

fn resolve_token_secret(explicit: Option<&str>) -> String {
    if let Some(secret) = explicit {
        return secret.to_string();
    }
    if let Ok(secret) = std::env::var("DEVCIRCLE_TOKEN_SECRET") {
        if !secret.is_empty() {
            return secret;
        }
    }

    // tokens minted here die with the process
    eprintln!("Warning: no token secret configured, generating a random one");
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

#[async_trait::async_trait]
impl crate::cli::op::Op for Serve {
    // spawn_service exits the process itself on startup failure
    type Error = std::convert::Infallible;
    type Output = String;

    async fn execute(
        &self,
        _ctx: &crate::cli::op::OpContext,
    ) -> Result<Self::Output, Self::Error> {
        let config = ServiceConfig {
            api_port: self.port,
            token_secret: resolve_token_secret(self.token_secret.as_deref()),
            token_ttl_secs: self.token_ttl_secs,
            sqlite_path: self.sqlite_path.clone(),
            log_level: tracing::Level::INFO,
            log_dir: self.log_dir.clone(),
        };

        spawn_service(&config).await;
        Ok("daemon ended".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_secret_wins() {
        assert_eq!(resolve_token_secret(Some("from-flag")), "from-flag");
    }

    #[test]
    fn generated_secret_is_32_hex_bytes() {
        std::env::remove_var("DEVCIRCLE_TOKEN_SECRET");
        let secret = resolve_token_secret(None);
        assert_eq!(secret.len(), 64);
        assert!(secret.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
