// console/src/config.rs
use std::env;
use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_yaml2 as serde_yaml;

use gateway::RequestContext;

pub const DEFAULT_CONFIG_PATH: &str = "clinic_config.yaml";

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    pub base_url: String,
    pub csrf_token: String,
    pub timeout_secs: u64,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        ConsoleConfig {
            base_url: "http://localhost:8000/api".to_string(),
            csrf_token: String::new(),
            timeout_secs: 15,
        }
    }
}

impl ConsoleConfig {
    pub fn request_context(&self) -> RequestContext {
        RequestContext::new(self.base_url.clone(), self.csrf_token.clone())
            .with_timeout(Duration::from_secs(self.timeout_secs))
    }
}

/// Loads the YAML config: explicit path if given, `clinic_config.yaml` if it
/// exists, built-in defaults otherwise. `CLINIC_BASE_URL` and
/// `CLINIC_CSRF_TOKEN` override whatever the file said.
pub fn load_config(path: Option<&Path>) -> Result<ConsoleConfig> {
    let mut config = match path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            serde_yaml::from_str(&raw)
                .with_context(|| format!("failed to parse config {}", path.display()))?
        }
        None => {
            if Path::new(DEFAULT_CONFIG_PATH).exists() {
                let raw = fs::read_to_string(DEFAULT_CONFIG_PATH)
                    .with_context(|| format!("failed to read config {DEFAULT_CONFIG_PATH}"))?;
                serde_yaml::from_str(&raw)
                    .with_context(|| format!("failed to parse config {DEFAULT_CONFIG_PATH}"))?
            } else {
                ConsoleConfig::default()
            }
        }
    };

    if let Ok(base_url) = env::var("CLINIC_BASE_URL") {
        config.base_url = base_url;
    }
    if let Ok(token) = env::var("CLINIC_CSRF_TOKEN") {
        config.csrf_token = token;
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_yaml_falls_back_to_defaults() {
        let config: ConsoleConfig =
            serde_yaml::from_str("base_url: http://clinic.example/api\n").unwrap();
        assert_eq!(config.base_url, "http://clinic.example/api");
        assert_eq!(config.timeout_secs, 15);
        assert!(config.csrf_token.is_empty());
    }
}
