use common::prelude::{Education, Experience, Profile};
use common::model::{ProfileFields, SocialLinks};
use common::prelude::EntryList;
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::database::types::{DJson, DUuid};
use crate::database::Database;

/// Profile row as stored. Skills, social links and the two history
/// collections live in JSON columns.
#[derive(Debug, Clone, FromRow)]
pub struct ProfileRecord {
    pub id: DUuid,
    pub account_id: DUuid,
    pub status: String,
    pub skills: DJson<Vec<String>>,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub github_username: Option<String>,
    pub social: DJson<SocialLinks>,
    pub experience: DJson<EntryList<Experience>>,
    pub education: DJson<EntryList<Education>>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl From<ProfileRecord> for Profile {
    fn from(row: ProfileRecord) -> Self {
        Profile {
            id: row.id.into(),
            account_id: row.account_id.into(),
            status: row.status,
            skills: row.skills.into_inner(),
            company: row.company,
            website: row.website,
            location: row.location,
            bio: row.bio,
            github_username: row.github_username,
            social: row.social.into_inner(),
            experience: row.experience.into_inner(),
            education: row.education.into_inner(),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

const PROFILE_COLUMNS: &str = r#"
    id, account_id, status, skills, company, website, location, bio,
    github_username, social, experience, education, created_at, updated_at
"#;

impl ProfileRecord {
    /// Create or replace the scalar fields of the account's profile. The
    /// experience and education collections are preserved on conflict.
    pub async fn upsert(
        account_id: Uuid,
        fields: ProfileFields,
        db: &Database,
    ) -> Result<Profile, sqlx::Error> {
        let fresh = Profile::new(account_id, fields);

        sqlx::query(
            r#"
            INSERT INTO profiles (
                id, account_id, status, skills, company, website, location,
                bio, github_username, social, experience, education,
                created_at, updated_at
            )
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)
            ON CONFLICT (account_id) DO UPDATE SET
                status = excluded.status,
                skills = excluded.skills,
                company = excluded.company,
                website = excluded.website,
                location = excluded.location,
                bio = excluded.bio,
                github_username = excluded.github_username,
                social = excluded.social,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(DUuid::from(fresh.id))
        .bind(DUuid::from(fresh.account_id))
        .bind(&fresh.status)
        .bind(DJson::from(fresh.skills.clone()))
        .bind(&fresh.company)
        .bind(&fresh.website)
        .bind(&fresh.location)
        .bind(&fresh.bio)
        .bind(&fresh.github_username)
        .bind(DJson::from(fresh.social.clone()))
        .bind(DJson::from(fresh.experience.clone()))
        .bind(DJson::from(fresh.education.clone()))
        .bind(fresh.created_at)
        .bind(fresh.updated_at)
        .execute(&**db)
        .await?;

        Self::get_by_account(account_id, db)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    /// Persist in-memory mutations of an existing profile, collections
    /// included.
    pub async fn save(profile: &Profile, db: &Database) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            UPDATE profiles
            SET status = ?1, skills = ?2, company = ?3, website = ?4,
                location = ?5, bio = ?6, github_username = ?7, social = ?8,
                experience = ?9, education = ?10, updated_at = ?11
            WHERE id = ?12
            "#,
        )
        .bind(&profile.status)
        .bind(DJson::from(profile.skills.clone()))
        .bind(&profile.company)
        .bind(&profile.website)
        .bind(&profile.location)
        .bind(&profile.bio)
        .bind(&profile.github_username)
        .bind(DJson::from(profile.social.clone()))
        .bind(DJson::from(profile.experience.clone()))
        .bind(DJson::from(profile.education.clone()))
        .bind(profile.updated_at)
        .bind(DUuid::from(profile.id))
        .execute(&**db)
        .await?;

        Ok(())
    }

    /// Get the profile belonging to an account
    pub async fn get_by_account(
        account_id: Uuid,
        db: &Database,
    ) -> Result<Option<Profile>, sqlx::Error> {
        let account_id = DUuid::from(account_id);
        let row = sqlx::query_as::<_, ProfileRecord>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM profiles WHERE account_id = ?1"
        ))
        .bind(account_id)
        .fetch_optional(&**db)
        .await?;

        Ok(row.map(Profile::from))
    }

    /// List all profiles, newest first
    pub async fn list(db: &Database) -> Result<Vec<Profile>, sqlx::Error> {
        let rows = sqlx::query_as::<_, ProfileRecord>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM profiles ORDER BY created_at DESC"
        ))
        .fetch_all(&**db)
        .await?;

        Ok(rows.into_iter().map(Profile::from).collect())
    }

    /// Delete the profile belonging to an account
    pub async fn delete_by_account(account_id: Uuid, db: &Database) -> Result<bool, sqlx::Error> {
        let account_id = DUuid::from(account_id);
        let result = sqlx::query("DELETE FROM profiles WHERE account_id = ?1")
            .bind(account_id)
            .execute(&**db)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
