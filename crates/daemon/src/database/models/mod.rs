mod account;
mod post;
mod profile;

pub use account::AccountRecord;
pub use post::PostRecord;
pub use profile::ProfileRecord;

use uuid::Uuid;

use crate::database::Database;

/// Remove an account and everything it owns. Posts go first, then the
/// profile, then the account row itself, so a crash mid-way never leaves
/// orphaned content pointing at a live account.
pub async fn delete_account_cascade(account_id: Uuid, db: &Database) -> Result<bool, sqlx::Error> {
    PostRecord::delete_by_account(account_id, db).await?;
    ProfileRecord::delete_by_account(account_id, db).await?;
    AccountRecord::delete(account_id, db).await
}
