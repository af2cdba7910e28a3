use std::collections::{hash_map::Entry, HashMap};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{
    errors::StorageError,
    repo::ProfileStore,
    repo_types::{Profile, ProfileId},
};

/// Process-local store for tests and `STORAGE=memory` runs. Nothing survives a restart.
#[derive(Default)]
pub struct MemoryProfileStore {
    rows: RwLock<HashMap<ProfileId, Profile>>,
}

impl MemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProfileStore for MemoryProfileStore {
    async fn insert(&self, profile: &Profile) -> Result<(), StorageError> {
        let mut rows = self.rows.write().await;
        match rows.entry(profile.id.clone()) {
            Entry::Occupied(_) => Err(StorageError::Conflict(profile.id.clone())),
            Entry::Vacant(slot) => {
                slot.insert(profile.clone());
                Ok(())
            }
        }
    }

    async fn find_active(&self, id: &ProfileId) -> Result<Option<Profile>, StorageError> {
        let rows = self.rows.read().await;
        Ok(rows.get(id).filter(|p| p.is_active()).cloned())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use time::OffsetDateTime;

    use super::*;
    use crate::{config::SYSTEM_ACTOR_ID, profiles::services::sample_submission};

    #[tokio::test]
    async fn create_then_read_back() {
        let store = MemoryProfileStore::new();
        let submission = sample_submission();

        let id = store.create(&submission, SYSTEM_ACTOR_ID).await.unwrap();
        assert_eq!(id.as_str().len(), 32);

        let stored = store.find_active(&id).await.unwrap().expect("profile stored");
        assert_eq!(stored.id, id);
        assert_eq!(stored.first_name, submission.first_name);
        assert_eq!(stored.last_name, submission.last_name);
        assert_eq!(stored.email, submission.email);
        assert_eq!(stored.phone, submission.phone);
        assert_eq!(stored.profile_image, submission.profile_image);
        assert_eq!(stored.birth_date, submission.birth_date);
        assert_eq!(stored.occupation, submission.occupation);
        assert_eq!(stored.sex, submission.sex);
        assert_eq!(stored.created_by, SYSTEM_ACTOR_ID);
        assert!(stored.created_at <= stored.updated_at);
        assert!(stored.deleted_at.is_none());
    }

    #[tokio::test]
    async fn distinct_creates_get_distinct_ids() {
        let store = MemoryProfileStore::new();
        let first = sample_submission();
        let mut second = sample_submission();
        second.first_name = "C".into();

        let a = store.create(&first, SYSTEM_ACTOR_ID).await.unwrap();
        let b = store.create(&second, SYSTEM_ACTOR_ID).await.unwrap();
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn duplicate_id_is_a_conflict_not_an_overwrite() {
        let store = MemoryProfileStore::new();
        let original = Profile::from_submission(&sample_submission(), SYSTEM_ACTOR_ID);
        store.insert(&original).await.unwrap();

        let mut clash = original.clone();
        clash.first_name = "Overwritten".into();
        let err = store.insert(&clash).await.unwrap_err();
        assert!(matches!(err, StorageError::Conflict(ref id) if *id == original.id));

        let kept = store.find_active(&original.id).await.unwrap().unwrap();
        assert_eq!(kept.first_name, original.first_name);
    }

    #[tokio::test]
    async fn soft_deleted_rows_are_hidden() {
        let store = MemoryProfileStore::new();
        let mut profile = Profile::from_submission(&sample_submission(), SYSTEM_ACTOR_ID);
        profile.deleted_at = Some(OffsetDateTime::now_utc());
        store.insert(&profile).await.unwrap();

        assert!(store.find_active(&profile.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn concurrent_creates_do_not_collide() {
        let store = Arc::new(MemoryProfileStore::new());
        let mut tasks = Vec::new();
        for _ in 0..32 {
            let store = Arc::clone(&store);
            tasks.push(tokio::spawn(async move {
                store.create(&sample_submission(), SYSTEM_ACTOR_ID).await
            }));
        }

        let mut ids = std::collections::HashSet::new();
        for task in tasks {
            ids.insert(task.await.unwrap().unwrap());
        }
        assert_eq!(ids.len(), 32);
    }
}
