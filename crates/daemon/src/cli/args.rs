pub use clap::Parser;

use url::Url;

#[derive(Parser, Debug)]
#[command(name = "devcircle")]
#[command(about = "DevCircle API daemon and client")]
pub struct Args {
    /// Remote API base URL
    #[arg(long, global = true, default_value = "http://localhost:5000")]
    pub remote: Url,

    #[command(subcommand)]
    pub command: crate::Command,
}
