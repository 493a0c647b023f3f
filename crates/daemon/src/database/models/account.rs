use common::prelude::Account;
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::database::types::DUuid;
use crate::database::Database;

/// Account row as stored, hydrated back into the domain type on read
#[derive(Debug, Clone, FromRow)]
pub struct AccountRecord {
    pub id: DUuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub avatar_url: String,
    pub created_at: OffsetDateTime,
}

impl From<AccountRecord> for Account {
    fn from(row: AccountRecord) -> Self {
        Account {
            id: row.id.into(),
            name: row.name,
            email: row.email,
            password_hash: row.password_hash,
            avatar_url: row.avatar_url,
            created_at: row.created_at,
        }
    }
}

impl AccountRecord {
    /// Insert a new account. The UNIQUE constraint on email surfaces as a
    /// unique violation when two registrations race.
    pub async fn create(account: &Account, db: &Database) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO accounts (id, name, email, password_hash, avatar_url, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(DUuid::from(account.id))
        .bind(&account.name)
        .bind(&account.email)
        .bind(&account.password_hash)
        .bind(&account.avatar_url)
        .bind(account.created_at)
        .execute(&**db)
        .await?;

        Ok(())
    }

    /// Get an account by ID
    pub async fn get(account_id: Uuid, db: &Database) -> Result<Option<Account>, sqlx::Error> {
        let account_id = DUuid::from(account_id);
        let row = sqlx::query_as::<_, AccountRecord>(
            r#"
            SELECT id, name, email, password_hash, avatar_url, created_at
            FROM accounts
            WHERE id = ?1
            "#,
        )
        .bind(account_id)
        .fetch_optional(&**db)
        .await?;

        Ok(row.map(Account::from))
    }

    /// Get an account by email, used by login
    pub async fn get_by_email(email: &str, db: &Database) -> Result<Option<Account>, sqlx::Error> {
        let row = sqlx::query_as::<_, AccountRecord>(
            r#"
            SELECT id, name, email, password_hash, avatar_url, created_at
            FROM accounts
            WHERE email = ?1
            "#,
        )
        .bind(email)
        .fetch_optional(&**db)
        .await?;

        Ok(row.map(Account::from))
    }

    /// Delete an account row
    pub async fn delete(account_id: Uuid, db: &Database) -> Result<bool, sqlx::Error> {
        let account_id = DUuid::from(account_id);
        let result = sqlx::query("DELETE FROM accounts WHERE id = ?1")
            .bind(account_id)
            .execute(&**db)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
