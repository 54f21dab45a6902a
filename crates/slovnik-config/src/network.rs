use std::env;

use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    "https://slovnik.seznam.cz".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("slovnik/{}", env!("CARGO_PKG_VERSION"))
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct NetworkConfig {
    /// Dictionary site root, without a trailing slash
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl NetworkConfig {
    pub fn new() -> Self {
        let base_url = env::var("SLOVNIK_BASE_URL").unwrap_or_else(|_| default_base_url());

        let timeout_seconds = env::var("SLOVNIK_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_timeout_seconds);

        Self {
            base_url,
            timeout_seconds,
            user_agent: default_user_agent(),
        }
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout_seconds(),
            user_agent: default_user_agent(),
        }
    }
}
