mod api_key;
mod types;

pub use api_key::*;
pub use types::*;

use crate::Result;
use std::env;
use tracing::debug;

pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Loads the configuration named by `CONFIG_PATH`, falling back to
/// `config.yaml` and then to built-in defaults when that file is absent.
pub async fn load() -> Result<Config> {
    if let Ok(path) = env::var("CONFIG_PATH") {
        return load_from(&path).await;
    }

    if tokio::fs::try_exists(DEFAULT_CONFIG_PATH).await? {
        load_from(DEFAULT_CONFIG_PATH).await
    } else {
        debug!("No configuration file found, using defaults");
        Ok(Config::default())
    }
}

pub async fn load_from(config_path: &str) -> Result<Config> {
    debug!("Loading configuration from: {}", config_path);

    let config_str = tokio::fs::read_to_string(config_path).await?;
    let config: Config = serde_yaml::from_str(&config_str)?;
    config.validate()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    async fn write_config(dir: &TempDir, content: &str) -> String {
        let path = dir.path().join("config.yaml");
        tokio::fs::write(&path, content).await.unwrap();
        path.to_string_lossy().to_string()
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.llm.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.llm.model, "gpt-4o");
        assert_eq!(
            config.llm.system_prompt,
            "You are the One Mambo Beach concierge AI."
        );
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.logs.level, "info");
    }

    #[tokio::test]
    async fn test_load_partial_file() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"
server:
  port: 9000
llm:
  base_url: "http://localhost:4010/v1"
"#,
        )
        .await;

        let config = load_from(&path).await.unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.llm.base_url, "http://localhost:4010/v1");
        assert_eq!(config.llm.model, DEFAULT_MODEL);
    }

    #[tokio::test]
    async fn test_load_rejects_empty_model() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "llm:\n  model: \"\"\n").await;

        let err = load_from(&path).await.unwrap_err();
        assert!(err.to_string().contains("llm.model"));
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.yaml");

        let result = load_from(&path.to_string_lossy()).await;
        assert!(matches!(result, Err(crate::Error::Io(_))));
    }

    #[tokio::test]
    async fn test_load_invalid_yaml() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "server: [not, a, map").await;

        let result = load_from(&path).await;
        assert!(matches!(result, Err(crate::Error::Yaml(_))));
    }
}
