mod account;
mod health;
mod serve;
mod version;

pub use account::Account;
pub use health::Health;
pub use serve::Serve;
pub use version::Version;
