use sha2::{Digest, Sha256};

/// Derive a deterministic gravatar URL from an email address.
///
/// Captured once at registration and denormalized onto posts and comments;
/// it is never re-synced if the account later changes.
pub fn gravatar_url(email: &str) -> String {
    let normalized = email.trim().to_lowercase();
    let digest = hex::encode(Sha256::digest(normalized.as_bytes()));
    format!("https://www.gravatar.com/avatar/{digest}?s=200&r=pg&d=mm")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_case_and_whitespace() {
        assert_eq!(gravatar_url("  A@X.COM "), gravatar_url("a@x.com"));
    }

    #[test]
    fn different_emails_differ() {
        assert_ne!(gravatar_url("a@x.com"), gravatar_url("b@x.com"));
    }
}
