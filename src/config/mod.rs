use std::env;
use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

const DEFAULT_BASE_URL: &str = "https://api.cardanoscan.io/api/v1/pool";
const DEFAULT_POOL_ID: &str = "d50b69e0ea9704d0130c6384fe0a509521833b2e472fc177258e5b1d";
const DEFAULT_DIST_DIR: &str = "cashsite/dist";

const INDEX_FILE: &str = "index.html";
const SIDECAR_FILE: &str = "data.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("API_KEY must be set")]
    MissingApiKey,

    #[error("{key} is invalid: {reason}")]
    Invalid { key: &'static str, reason: String },
}

#[derive(Clone)]
pub struct AppConfig {
    pub api_key: String,
    pub base_url: String,
    pub pool_id: String,
    /// Directory of the built front-end, holding `index.html` and `data.json`.
    pub dist_dir: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup (e.g. a map in tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("API_KEY")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let base_url = lookup("CARDANOSCAN_BASE_URL")
            .unwrap_or_else(|| DEFAULT_BASE_URL.into())
            .trim()
            .trim_end_matches('/')
            .to_string();
        if base_url.is_empty() {
            return Err(ConfigError::Invalid {
                key: "CARDANOSCAN_BASE_URL",
                reason: "must not be empty".into(),
            });
        }

        let pool_id = lookup("POOL_ID")
            .unwrap_or_else(|| DEFAULT_POOL_ID.into())
            .trim()
            .to_string();
        if pool_id.is_empty() {
            return Err(ConfigError::Invalid {
                key: "POOL_ID",
                reason: "must not be empty".into(),
            });
        }

        let dist_dir = lookup("SITE_DIST_DIR")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DIST_DIR));

        Ok(Self {
            api_key,
            base_url,
            pool_id,
            dist_dir,
        })
    }

    pub fn html_path(&self) -> PathBuf {
        self.dist_dir.join(INDEX_FILE)
    }

    pub fn json_path(&self) -> PathBuf {
        self.dist_dir.join(SIDECAR_FILE)
    }
}

// Keep the key out of logs and panic messages.
impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &mask_secret(&self.api_key))
            .field("base_url", &self.base_url)
            .field("pool_id", &self.pool_id)
            .field("dist_dir", &self.dist_dir)
            .finish()
    }
}

fn mask_secret(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    let last_four: String = chars[chars.len().saturating_sub(4)..].iter().collect();
    format!("****{last_four}")
}
