use crate::config::{AppConfig, StorageBackend};
use crate::db;
use crate::profiles::{MemoryProfileStore, PgProfileStore, ProfileStore};
use anyhow::Context;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub profiles: Arc<dyn ProfileStore>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);

        let profiles = match config.storage {
            StorageBackend::Postgres => {
                let url = config
                    .database_url
                    .as_deref()
                    .context("DATABASE_URL is not set")?;
                let pool = db::connect(url, config.db_max_connections).await?;
                db::migrate(&pool).await?;
                Arc::new(PgProfileStore::new(pool)) as Arc<dyn ProfileStore>
            }
            StorageBackend::Memory => {
                tracing::warn!("using in-memory profile storage; data is lost on restart");
                Arc::new(MemoryProfileStore::new()) as Arc<dyn ProfileStore>
            }
        };

        Ok(Self::from_parts(config, profiles))
    }

    pub fn from_parts(config: Arc<AppConfig>, profiles: Arc<dyn ProfileStore>) -> Self {
        Self { config, profiles }
    }

    #[cfg(test)]
    pub fn fake() -> Self {
        Self::fake_with_store(Arc::new(MemoryProfileStore::new()))
    }

    #[cfg(test)]
    pub fn fake_with_store(profiles: Arc<dyn ProfileStore>) -> Self {
        let config = Arc::new(AppConfig {
            database_url: None,
            storage: StorageBackend::Memory,
            db_max_connections: 1,
            host: "127.0.0.1".into(),
            port: 0,
            system_actor: crate::config::SYSTEM_ACTOR_ID.into(),
        });
        Self::from_parts(config, profiles)
    }
}
