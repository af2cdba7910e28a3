use std::fmt;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

use super::dto::ProfileSubmission;

/// 32 lowercase hex characters, a v4 UUID without hyphens.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct ProfileId(String);

impl ProfileId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Profile record in the database.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: ProfileId,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
    pub deleted_at: Option<OffsetDateTime>, // soft delete marker, never set here
    pub created_by: String,
    pub updated_by: Option<String>,
    pub deleted_by: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub profile_image: String,
    pub birth_date: String,
    pub occupation: String,
    pub sex: String,
}

impl Profile {
    /// Builds a fresh, active record with a newly generated id.
    pub fn from_submission(submission: &ProfileSubmission, actor: &str) -> Self {
        let now = OffsetDateTime::now_utc();
        Self {
            id: ProfileId::generate(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
            created_by: actor.to_string(),
            updated_by: None,
            deleted_by: None,
            first_name: submission.first_name.clone(),
            last_name: submission.last_name.clone(),
            email: submission.email.clone(),
            phone: submission.phone.clone(),
            profile_image: submission.profile_image.clone(),
            birth_date: submission.birth_date.clone(),
            occupation: submission.occupation.clone(),
            sex: submission.sex.clone(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.deleted_at.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_32_hex_chars() {
        let id = ProfileId::generate();
        assert_eq!(id.as_str().len(), 32);
        assert!(id.as_str().chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(id, ProfileId::generate());
    }

    #[test]
    fn from_submission_sets_audit_fields() {
        let submission = ProfileSubmission {
            first_name: "A".into(),
            occupation: "Tester".into(),
            ..Default::default()
        };
        let profile = Profile::from_submission(&submission, "actor-1");
        assert_eq!(profile.created_by, "actor-1");
        assert_eq!(profile.created_at, profile.updated_at);
        assert!(profile.updated_by.is_none());
        assert!(profile.deleted_by.is_none());
        assert!(profile.is_active());
        assert_eq!(profile.first_name, "A");
        assert_eq!(profile.occupation, "Tester");
    }
}
