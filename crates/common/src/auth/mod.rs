mod password;
mod token;

pub use password::{hash_password, verify_password, PasswordError};
pub use token::{AuthTokens, TokenError};
