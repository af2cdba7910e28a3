use serde::Deserialize;

/// Principal recorded as `created_by` while there is no real authentication.
pub const SYSTEM_ACTOR_ID: &str = "00000000000000000000000000000001";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Postgres,
    Memory,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: Option<String>,
    pub storage: StorageBackend,
    pub db_max_connections: u32,
    pub host: String,
    pub port: u16,
    pub system_actor: String,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let storage = match lookup("STORAGE").as_deref() {
            None | Some("postgres") => StorageBackend::Postgres,
            Some("memory") => StorageBackend::Memory,
            Some(other) => anyhow::bail!("unknown STORAGE backend: {other}"),
        };

        let database_url = lookup("DATABASE_URL");
        if storage == StorageBackend::Postgres && database_url.is_none() {
            anyhow::bail!("DATABASE_URL must be set for the postgres backend");
        }

        let system_actor = lookup("SYSTEM_ACTOR_ID").unwrap_or_else(|| SYSTEM_ACTOR_ID.into());
        anyhow::ensure!(
            !system_actor.is_empty() && system_actor.len() <= 32,
            "SYSTEM_ACTOR_ID must be 1..=32 characters"
        );

        Ok(Self {
            database_url,
            storage,
            db_max_connections: lookup("DB_MAX_CONNECTIONS")
                .and_then(|v| v.parse::<u32>().ok())
                .unwrap_or(10),
            host: lookup("APP_HOST").unwrap_or_else(|| "0.0.0.0".into()),
            port: lookup("APP_PORT")
                .and_then(|v| v.parse::<u16>().ok())
                .unwrap_or(8081),
            system_actor,
        })
    }
}
