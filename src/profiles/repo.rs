use anyhow::Context;
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use super::{
    dto::ProfileSubmission,
    errors::StorageError,
    repo_types::{Profile, ProfileId},
};

/// Persistence boundary for profiles. Implementations must be safe to share
/// across concurrent requests.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Inserts a fully built record. An existing id is a conflict, never an overwrite.
    async fn insert(&self, profile: &Profile) -> Result<(), StorageError>;

    /// Loads a record by id, ignoring soft-deleted rows.
    async fn find_active(&self, id: &ProfileId) -> Result<Option<Profile>, StorageError>;

    /// Assigns a fresh id and audit fields to `submission` and commits it.
    async fn create(
        &self,
        submission: &ProfileSubmission,
        actor: &str,
    ) -> Result<ProfileId, StorageError> {
        let profile = Profile::from_submission(submission, actor);
        self.insert(&profile).await?;
        Ok(profile.id)
    }
}

#[derive(Clone)]
pub struct PgProfileStore {
    db: PgPool,
}

impl PgProfileStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProfileStore for PgProfileStore {
    async fn insert(&self, profile: &Profile) -> Result<(), StorageError> {
        let result = sqlx::query(
            r#"
            INSERT INTO profiles (
                id, created_at, updated_at, deleted_at,
                created_by, updated_by, deleted_by,
                first_name, last_name, email, phone,
                profile_image, birth_date, occupation, sex
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            "#,
        )
        .bind(&profile.id)
        .bind(profile.created_at)
        .bind(profile.updated_at)
        .bind(profile.deleted_at)
        .bind(&profile.created_by)
        .bind(&profile.updated_by)
        .bind(&profile.deleted_by)
        .bind(&profile.first_name)
        .bind(&profile.last_name)
        .bind(&profile.email)
        .bind(&profile.phone)
        .bind(&profile.profile_image)
        .bind(&profile.birth_date)
        .bind(&profile.occupation)
        .bind(&profile.sex)
        .execute(&self.db)
        .await;

        match result {
            Ok(_) => {
                debug!(profile_id = %profile.id, "profile row inserted");
                Ok(())
            }
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(StorageError::Conflict(profile.id.clone()))
            }
            Err(e) => Err(anyhow::Error::new(e).context("insert profile").into()),
        }
    }

    async fn find_active(&self, id: &ProfileId) -> Result<Option<Profile>, StorageError> {
        let profile = sqlx::query_as::<_, Profile>(
            r#"
            SELECT id, created_at, updated_at, deleted_at,
                   created_by, updated_by, deleted_by,
                   first_name, last_name, email, phone,
                   profile_image, birth_date, occupation, sex
              FROM profiles
             WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .context("find profile by id")?;
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::SYSTEM_ACTOR_ID, db, profiles::services::sample_submission};

    // Needs a reachable Postgres: DATABASE_URL=... cargo test -- --ignored
    #[tokio::test]
    #[ignore]
    async fn create_and_read_back_against_postgres() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL");
        let pool = db::connect(&url, 2).await.expect("connect");
        db::migrate(&pool).await.expect("migrate");
        let store = PgProfileStore::new(pool);

        let submission = sample_submission();
        let id = store.create(&submission, SYSTEM_ACTOR_ID).await.expect("create");
        let stored = store.find_active(&id).await.expect("find").expect("row");
        assert_eq!(stored.email, submission.email);
        assert_eq!(stored.created_by, SYSTEM_ACTOR_ID);

        let err = store.insert(&stored).await.unwrap_err();
        assert!(matches!(err, StorageError::Conflict(_)));
    }
}
