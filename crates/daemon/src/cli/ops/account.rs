use clap::{Args, Subcommand};

use devcircle_daemon::http_server::api::client::ApiError;
use devcircle_daemon::http_server::api::v0::accounts::register::RegisterRequest;
use devcircle_daemon::http_server::api::v0::sessions::create::LoginRequest;

/// Drive account registration and login against a running daemon,
/// printing the minted token.
#[derive(Args, Debug, Clone)]
pub struct Account {
    #[command(subcommand)]
    pub command: AccountCommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum AccountCommand {
    /// Register a new account
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Log in with an existing account
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),
}

#[async_trait::async_trait]
impl crate::cli::op::Op for Account {
    type Error = AccountError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let mut client = ctx.client.clone();

        let token = match &self.command {
            AccountCommand::Register {
                name,
                email,
                password,
            } => {
                let response = client
                    .call(RegisterRequest {
                        name: name.clone(),
                        email: email.clone(),
                        password: password.clone(),
                    })
                    .await?;
                response.token
            }
            AccountCommand::Login { email, password } => {
                let response = client
                    .call(LoginRequest {
                        email: email.clone(),
                        password: password.clone(),
                    })
                    .await?;
                response.token
            }
        };

        Ok(format!("token: {}", token))
    }
}
