use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use super::account::Account;
use super::entries::{EntryList, Keyed};

/// A like entry. At most one per account per post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Like {
    pub account_id: Uuid,
}

/// A comment embedded in a post, newest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub account_id: Uuid,
    pub body: String,
    pub author_name: String,
    pub author_avatar: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl Keyed for Comment {
    fn entry_id(&self) -> Uuid {
        self.id
    }
}

/// A post with its embedded likes and comments.
///
/// Author name and avatar are captured at creation time and never re-synced
/// if the account changes later.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub account_id: Uuid,
    pub body: String,
    pub author_name: String,
    pub author_avatar: String,
    #[serde(default)]
    pub likes: EntryList<Like>,
    #[serde(default)]
    pub comments: EntryList<Comment>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl Post {
    pub fn new(author: &Account, body: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            account_id: author.id,
            body,
            author_name: author.name.clone(),
            author_avatar: author.avatar_url.clone(),
            likes: EntryList::new(),
            comments: EntryList::new(),
            created_at: OffsetDateTime::now_utc(),
        }
    }

    pub fn is_owned_by(&self, account_id: Uuid) -> bool {
        self.account_id == account_id
    }

    /// Record a like. Liking a post twice is a rejected operation, not a
    /// silent no-op.
    pub fn add_like(&mut self, account_id: Uuid) -> Result<(), LikeError> {
        if self.likes.iter().any(|l| l.account_id == account_id) {
            return Err(LikeError::AlreadyLiked);
        }
        self.likes.prepend(Like { account_id });
        Ok(())
    }

    /// Remove a like. Unliking without an existing like is rejected.
    pub fn remove_like(&mut self, account_id: Uuid) -> Result<(), LikeError> {
        self.likes
            .remove_where(|l| l.account_id == account_id)
            .map(|_| ())
            .ok_or(LikeError::NotLiked)
    }

    pub fn add_comment(&mut self, author: &Account, body: String) -> Uuid {
        let comment = Comment {
            id: Uuid::new_v4(),
            account_id: author.id,
            body,
            author_name: author.name.clone(),
            author_avatar: author.avatar_url.clone(),
            created_at: OffsetDateTime::now_utc(),
        };
        let id = comment.id;
        self.comments.prepend(comment);
        id
    }

    /// Remove a comment. Only the owner of the *post* may do this, whether
    /// or not they authored the comment.
    pub fn remove_comment(
        &mut self,
        requester: Uuid,
        comment_id: Uuid,
    ) -> Result<Comment, CommentError> {
        if !self.is_owned_by(requester) {
            return Err(CommentError::NotOwner);
        }
        self.comments
            .remove_by_id(comment_id)
            .ok_or(CommentError::NotFound)
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum LikeError {
    #[error("post already liked by this account")]
    AlreadyLiked,
    #[error("post not liked by this account")]
    NotLiked,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum CommentError {
    #[error("only the post owner may remove comments")]
    NotOwner,
    #[error("comment not found")]
    NotFound,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(name: &str, email: &str) -> Account {
        Account::new(name.to_string(), email.to_string(), "hash".to_string())
    }

    #[test]
    fn like_twice_is_rejected_with_one_entry() {
        let author = account("A", "a@x.com");
        let mut post = Post::new(&author, "hello".to_string());

        post.add_like(author.id).unwrap();
        assert_eq!(post.add_like(author.id), Err(LikeError::AlreadyLiked));
        assert_eq!(post.likes.len(), 1);
    }

    #[test]
    fn unlike_without_like_is_rejected() {
        let author = account("A", "a@x.com");
        let mut post = Post::new(&author, "hello".to_string());

        assert_eq!(post.remove_like(author.id), Err(LikeError::NotLiked));
    }

    #[test]
    fn unlike_removes_exactly_one_and_leaves_others() {
        let author = account("A", "a@x.com");
        let other = account("B", "b@x.com");
        let mut post = Post::new(&author, "hello".to_string());

        post.add_like(author.id).unwrap();
        post.add_like(other.id).unwrap();

        post.remove_like(author.id).unwrap();
        assert_eq!(post.likes.len(), 1);
        assert_eq!(post.likes.iter().next().unwrap().account_id, other.id);
    }

    #[test]
    fn comments_are_prepended() {
        let author = account("A", "a@x.com");
        let mut post = Post::new(&author, "hello".to_string());

        post.add_comment(&author, "first".to_string());
        post.add_comment(&author, "second".to_string());

        let bodies: Vec<_> = post.comments.iter().map(|c| c.body.as_str()).collect();
        assert_eq!(bodies, vec!["second", "first"]);
    }

    #[test]
    fn only_post_owner_removes_comments() {
        let owner = account("A", "a@x.com");
        let commenter = account("B", "b@x.com");
        let mut post = Post::new(&owner, "hello".to_string());

        // the commenter authored it, but does not own the post
        let comment_id = post.add_comment(&commenter, "mine".to_string());
        assert_eq!(
            post.remove_comment(commenter.id, comment_id),
            Err(CommentError::NotOwner)
        );

        post.remove_comment(owner.id, comment_id).unwrap();
        assert!(post.comments.is_empty());
    }

    #[test]
    fn removing_unknown_comment_is_not_found() {
        let owner = account("A", "a@x.com");
        let mut post = Post::new(&owner, "hello".to_string());

        assert_eq!(
            post.remove_comment(owner.id, Uuid::new_v4()),
            Err(CommentError::NotFound)
        );
    }

    #[test]
    fn new_post_captures_author_snapshot() {
        let author = account("A", "a@x.com");
        let post = Post::new(&author, "hello".to_string());

        assert!(post.is_owned_by(author.id));
        assert_eq!(post.author_name, "A");
        assert_eq!(post.author_avatar, author.avatar_url);
        assert!(post.likes.is_empty());
        assert!(post.comments.is_empty());
    }
}
