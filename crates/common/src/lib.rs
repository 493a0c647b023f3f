/**
 * Credential primitives.
 *  - Signed bearer tokens (mint + verify)
 *  - Salted password hashing
 */
pub mod auth;
/**
 * Domain model for the service.
 * Aggregates (Account, Profile, Post) and the
 *  sub-records embedded inside them, along with
 *  every nested-collection mutation rule.
 */
pub mod model;
/**
 * Helper for setting build version information
 *  at compile time.
 */
pub mod version;

pub mod prelude {
    pub use crate::auth::{AuthTokens, TokenError};
    pub use crate::model::{Account, Comment, Education, EntryList, Experience, Post, Profile};
    pub use crate::version::build_info;
}
