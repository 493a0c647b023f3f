use std::path::PathBuf;

#[derive(Debug)]
pub struct Config {
    // http server configuration
    /// Port for the API HTTP server.
    pub api_port: u16,

    // auth configuration
    /// Secret used to sign and verify bearer tokens. Every instance that
    /// should accept each other's tokens must share this value.
    pub token_secret: String,
    /// Token lifetime in seconds.
    pub token_ttl_secs: i64,

    // data store configuration
    /// a path to a sqlite database, if not set then an
    ///  in-memory database will be used
    pub sqlite_path: Option<PathBuf>,

    // logging
    pub log_level: tracing::Level,
    /// Directory for log files (optional, logs to stdout only if not set)
    pub log_dir: Option<PathBuf>,
}
