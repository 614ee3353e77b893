mod types;

pub use types::*;

use crate::Result;
use std::env;
use tracing::debug;

/// Environment variable holding the OpenAI credential.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());

    let mut config = match tokio::fs::read_to_string(&config_path).await {
        Ok(raw) => {
            debug!("Loading configuration from: {}", config_path);
            serde_yaml::from_str(&raw)?
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("No configuration file at {}, using defaults", config_path);
            Config::default()
        }
        Err(e) => return Err(e.into()),
    };

    // The credential never lives in the file; an empty value counts as unset.
    config.llm.api_key = env::var(API_KEY_ENV).ok().filter(|key| !key.is_empty());

    Ok(config)
}
