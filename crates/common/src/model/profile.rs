use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use super::entries::{EntryList, Keyed};

/// Sparse mapping of social platform to URL.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
}

/// A work-history entry. Lives only inside its parent profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub from: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<NaiveDate>,
    #[serde(default)]
    pub current: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Keyed for Experience {
    fn entry_id(&self) -> Uuid {
        self.id
    }
}

/// Input for a new experience entry; the server generates the identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewExperience {
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub location: Option<String>,
    pub from: NaiveDate,
    #[serde(default)]
    pub to: Option<NaiveDate>,
    #[serde(default)]
    pub current: bool,
    #[serde(default)]
    pub description: Option<String>,
}

/// A schooling entry. Lives only inside its parent profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub id: Uuid,
    pub school: String,
    pub degree: String,
    pub field_of_study: String,
    pub from: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<NaiveDate>,
    #[serde(default)]
    pub current: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Keyed for Education {
    fn entry_id(&self) -> Uuid {
        self.id
    }
}

/// Input for a new education entry; the server generates the identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewEducation {
    pub school: String,
    pub degree: String,
    pub field_of_study: String,
    pub from: NaiveDate,
    #[serde(default)]
    pub to: Option<NaiveDate>,
    #[serde(default)]
    pub current: bool,
    #[serde(default)]
    pub description: Option<String>,
}

/// The scalar fields of a profile, as supplied by the upsert operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileFields {
    pub status: String,
    pub skills: Vec<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub github_username: Option<String>,
    #[serde(default)]
    pub social: SocialLinks,
}

/// A developer profile. Exactly one per account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    pub account_id: Uuid,
    pub status: String,
    pub skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_username: Option<String>,
    #[serde(default)]
    pub social: SocialLinks,
    #[serde(default)]
    pub experience: EntryList<Experience>,
    #[serde(default)]
    pub education: EntryList<Education>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl Profile {
    pub fn new(account_id: Uuid, fields: ProfileFields) -> Self {
        let now = OffsetDateTime::now_utc();
        Self {
            id: Uuid::new_v4(),
            account_id,
            status: fields.status,
            skills: fields.skills,
            company: fields.company,
            website: fields.website,
            location: fields.location,
            bio: fields.bio,
            github_username: fields.github_username,
            social: fields.social,
            experience: EntryList::new(),
            education: EntryList::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the scalar fields in place, leaving the nested collections
    /// untouched. The second half of the upsert operation.
    pub fn apply(&mut self, fields: ProfileFields) {
        self.status = fields.status;
        self.skills = fields.skills;
        self.company = fields.company;
        self.website = fields.website;
        self.location = fields.location;
        self.bio = fields.bio;
        self.github_username = fields.github_username;
        self.social = fields.social;
        self.updated_at = OffsetDateTime::now_utc();
    }

    pub fn add_experience(&mut self, new: NewExperience) -> Uuid {
        let entry = Experience {
            id: Uuid::new_v4(),
            title: new.title,
            company: new.company,
            location: new.location,
            from: new.from,
            to: new.to,
            current: new.current,
            description: new.description,
        };
        let id = entry.id;
        self.experience.prepend(entry);
        self.updated_at = OffsetDateTime::now_utc();
        id
    }

    pub fn remove_experience(&mut self, entry_id: Uuid) -> Result<Experience, EntryNotFound> {
        let removed = self
            .experience
            .remove_by_id(entry_id)
            .ok_or(EntryNotFound)?;
        self.updated_at = OffsetDateTime::now_utc();
        Ok(removed)
    }

    pub fn add_education(&mut self, new: NewEducation) -> Uuid {
        let entry = Education {
            id: Uuid::new_v4(),
            school: new.school,
            degree: new.degree,
            field_of_study: new.field_of_study,
            from: new.from,
            to: new.to,
            current: new.current,
            description: new.description,
        };
        let id = entry.id;
        self.education.prepend(entry);
        self.updated_at = OffsetDateTime::now_utc();
        id
    }

    pub fn remove_education(&mut self, entry_id: Uuid) -> Result<Education, EntryNotFound> {
        let removed = self.education.remove_by_id(entry_id).ok_or(EntryNotFound)?;
        self.updated_at = OffsetDateTime::now_utc();
        Ok(removed)
    }
}

/// The named sub-record does not exist in its collection.
#[derive(Debug, thiserror::Error)]
#[error("entry not found")]
pub struct EntryNotFound;

/// Split a comma-separated skills input into trimmed, non-empty entries,
/// preserving order.
pub fn parse_skills(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields() -> ProfileFields {
        ProfileFields {
            status: "Developer".to_string(),
            skills: vec!["Rust".to_string()],
            ..Default::default()
        }
    }

    fn experience(title: &str) -> NewExperience {
        NewExperience {
            title: title.to_string(),
            company: "Acme".to_string(),
            location: None,
            from: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            to: None,
            current: true,
            description: None,
        }
    }

    #[test]
    fn parse_skills_trims_and_drops_empties() {
        assert_eq!(
            parse_skills(" Rust, HTML ,,CSS , "),
            vec!["Rust", "HTML", "CSS"]
        );
        assert!(parse_skills("  ,  ").is_empty());
    }

    #[test]
    fn experience_is_prepended() {
        let mut profile = Profile::new(Uuid::new_v4(), fields());
        profile.add_experience(experience("E1"));
        profile.add_experience(experience("E2"));

        let titles: Vec<_> = profile.experience.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["E2", "E1"]);
    }

    #[test]
    fn remove_unknown_experience_is_not_found_and_leaves_collection() {
        let mut profile = Profile::new(Uuid::new_v4(), fields());
        profile.add_experience(experience("E1"));

        assert!(profile.remove_experience(Uuid::new_v4()).is_err());
        assert_eq!(profile.experience.len(), 1);
    }

    #[test]
    fn apply_replaces_scalars_but_keeps_collections() {
        let mut profile = Profile::new(Uuid::new_v4(), fields());
        profile.add_experience(experience("E1"));

        let mut updated = fields();
        updated.status = "Senior Developer".to_string();
        updated.company = Some("Acme".to_string());
        profile.apply(updated);

        assert_eq!(profile.status, "Senior Developer");
        assert_eq!(profile.company.as_deref(), Some("Acme"));
        assert_eq!(profile.experience.len(), 1);
    }
}
