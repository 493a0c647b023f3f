use common::prelude::{Comment, EntryList, Post};
use common::model::Like;
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::database::types::{DJson, DUuid};
use crate::database::Database;

/// Post row as stored. Likes and comments are embedded JSON collections,
/// so every post mutation is a single-row write.
#[derive(Debug, Clone, FromRow)]
pub struct PostRecord {
    pub id: DUuid,
    pub account_id: DUuid,
    pub body: String,
    pub author_name: String,
    pub author_avatar: String,
    pub likes: DJson<EntryList<Like>>,
    pub comments: DJson<EntryList<Comment>>,
    pub created_at: OffsetDateTime,
}

impl From<PostRecord> for Post {
    fn from(row: PostRecord) -> Self {
        Post {
            id: row.id.into(),
            account_id: row.account_id.into(),
            body: row.body,
            author_name: row.author_name,
            author_avatar: row.author_avatar,
            likes: row.likes.into_inner(),
            comments: row.comments.into_inner(),
            created_at: row.created_at,
        }
    }
}

const POST_COLUMNS: &str = r#"
    id, account_id, body, author_name, author_avatar, likes, comments, created_at
"#;

impl PostRecord {
    /// Insert a new post
    pub async fn create(post: &Post, db: &Database) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO posts (
                id, account_id, body, author_name, author_avatar,
                likes, comments, created_at
            )
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            "#,
        )
        .bind(DUuid::from(post.id))
        .bind(DUuid::from(post.account_id))
        .bind(&post.body)
        .bind(&post.author_name)
        .bind(&post.author_avatar)
        .bind(DJson::from(post.likes.clone()))
        .bind(DJson::from(post.comments.clone()))
        .bind(post.created_at)
        .execute(&**db)
        .await?;

        Ok(())
    }

    /// Persist in-memory mutations of the likes and comments collections
    pub async fn save(post: &Post, db: &Database) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE posts SET likes = ?1, comments = ?2 WHERE id = ?3")
            .bind(DJson::from(post.likes.clone()))
            .bind(DJson::from(post.comments.clone()))
            .bind(DUuid::from(post.id))
            .execute(&**db)
            .await?;

        Ok(())
    }

    /// Get a post by ID
    pub async fn get(post_id: Uuid, db: &Database) -> Result<Option<Post>, sqlx::Error> {
        let post_id = DUuid::from(post_id);
        let row = sqlx::query_as::<_, PostRecord>(&format!(
            "SELECT {POST_COLUMNS} FROM posts WHERE id = ?1"
        ))
        .bind(post_id)
        .fetch_optional(&**db)
        .await?;

        Ok(row.map(Post::from))
    }

    /// List all posts, newest first
    pub async fn list(db: &Database) -> Result<Vec<Post>, sqlx::Error> {
        let rows = sqlx::query_as::<_, PostRecord>(&format!(
            "SELECT {POST_COLUMNS} FROM posts ORDER BY created_at DESC"
        ))
        .fetch_all(&**db)
        .await?;

        Ok(rows.into_iter().map(Post::from).collect())
    }

    /// Delete a post
    pub async fn delete(post_id: Uuid, db: &Database) -> Result<bool, sqlx::Error> {
        let post_id = DUuid::from(post_id);
        let result = sqlx::query("DELETE FROM posts WHERE id = ?1")
            .bind(post_id)
            .execute(&**db)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete every post owned by an account
    pub async fn delete_by_account(account_id: Uuid, db: &Database) -> Result<u64, sqlx::Error> {
        let account_id = DUuid::from(account_id);
        let result = sqlx::query("DELETE FROM posts WHERE account_id = ?1")
            .bind(account_id)
            .execute(&**db)
            .await?;

        Ok(result.rows_affected())
    }
}
