use anyhow::{Context, Result, bail};
use storage::object_store::DEFAULT_BUCKET;

const DEFAULT_UPLOAD_LIMIT_BYTES: usize = 10 * 1024 * 1024;

/// Which repository backs the gym endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GymStoreKind {
    Memory,
    Postgres,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: Option<String>,
    pub supabase_url: Option<String>,
    pub supabase_key: Option<String>,
    pub storage_bucket: String,
    pub gym_store: GymStoreKind,
    pub upload_limit_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let gym_store = match var("GYM_STORE").as_deref() {
            None | Some("memory") => GymStoreKind::Memory,
            Some("postgres") => GymStoreKind::Postgres,
            Some(other) => bail!("GYM_STORE must be 'memory' or 'postgres', got '{other}'"),
        };

        Ok(Self {
            host: var("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: match var("PORT") {
                Some(port) => port.parse().context("PORT must be a number")?,
                None => 3000,
            },
            database_url: var("DATABASE_URL"),
            supabase_url: var("SUPABASE_URL"),
            supabase_key: var("SUPABASE_KEY"),
            storage_bucket: var("STORAGE_BUCKET").unwrap_or_else(|| DEFAULT_BUCKET.to_string()),
            gym_store,
            upload_limit_bytes: match var("UPLOAD_LIMIT_BYTES") {
                Some(limit) => limit
                    .parse()
                    .context("UPLOAD_LIMIT_BYTES must be a number of bytes")?,
                None => DEFAULT_UPLOAD_LIMIT_BYTES,
            },
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
