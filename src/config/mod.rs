// src/config/mod.rs
mod models;

pub use models::*;

use crate::error::ConfigError;
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "conf.yaml";

/// Load configuration from a file (JSON by `.json` extension, YAML otherwise)
pub async fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    let config = parse_config(path, &contents)?;
    config.validate()?;
    Ok(config)
}

fn parse_config(path: &Path, contents: &str) -> Result<Config, ConfigError> {
    if path.extension().and_then(|s| s.to_str()) == Some("json") {
        serde_json::from_str(contents).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    } else {
        serde_yaml::from_str(contents).map_err(|source| ConfigError::Yaml {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = r#"
Servers:
  - URL: https://example.com/
    Label: example
  - URL: https://internal.example.net/status
    Label: internal
ua: uptime-bot/1.0
pushover:
  app_token: apptoken
  recipient_token: recipienttoken
"#;

    fn write_config(suffix: &str, contents: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_load_yaml_keeps_server_order() {
        let file = write_config(".yaml", SAMPLE);
        let config = load_config(file.path()).await.unwrap();

        assert_eq!(config.servers.len(), 2);
        assert_eq!(config.servers[0].label, "example");
        assert_eq!(config.servers[1].url, "https://internal.example.net/status");
        assert_eq!(config.user_agent, "uptime-bot/1.0");
        assert_eq!(config.credential.token, "apptoken");
        assert_eq!(config.credential.recipient_token, "recipienttoken");
    }

    #[tokio::test]
    async fn test_optional_keys_default() {
        let file = write_config(".yaml", SAMPLE);
        let config = load_config(file.path()).await.unwrap();

        assert!(config.insecure_skip_verify);
        assert_eq!(config.status_policy, StatusPolicy::Strict);
        assert_eq!(config.timeout(), None);
        assert_eq!(config.credential.api_url, DEFAULT_PUSHOVER_API_URL);
    }

    #[tokio::test]
    async fn test_lowercase_keys_accepted() {
        let file = write_config(
            ".yml",
            "servers:\n  - url: http://a\n    label: a\nua: x\npushover:\n  app_token: t\n  recipient_token: r\n",
        );
        let config = load_config(file.path()).await.unwrap();
        assert_eq!(config.servers[0].url, "http://a");
    }

    #[tokio::test]
    async fn test_missing_servers_is_empty_run() {
        let file = write_config(
            ".yaml",
            "ua: x\npushover:\n  app_token: t\n  recipient_token: r\n",
        );
        let config = load_config(file.path()).await.unwrap();
        assert!(config.servers.is_empty());
    }

    #[tokio::test]
    async fn test_json_by_extension() {
        let file = write_config(
            ".json",
            r#"{"Servers":[{"URL":"http://a","Label":"a"}],"ua":"x",
               "pushover":{"app_token":"t","recipient_token":"r"},
               "status_policy":"success","timeout_secs":5}"#,
        );
        let config = load_config(file.path()).await.unwrap();
        assert_eq!(config.status_policy, StatusPolicy::Success);
        assert_eq!(config.timeout(), Some(std::time::Duration::from_secs(5)));
    }

    #[tokio::test]
    async fn test_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(dir.path().join("conf.yaml")).await.unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[tokio::test]
    async fn test_missing_required_field_is_parse_error() {
        let file = write_config(".yaml", "Servers: []\nua: x\n");
        let err = load_config(file.path()).await.unwrap_err();
        assert!(matches!(err, ConfigError::Yaml { .. }));
    }

    #[tokio::test]
    async fn test_invalid_syntax_is_parse_error() {
        let file = write_config(".yaml", "Servers: [\n  - URL: :::\n");
        let err = load_config(file.path()).await.unwrap_err();
        assert!(matches!(err, ConfigError::Yaml { .. }));
    }

    #[tokio::test]
    async fn test_empty_token_rejected() {
        let file = write_config(
            ".yaml",
            "ua: x\npushover:\n  app_token: ''\n  recipient_token: r\n",
        );
        let err = load_config(file.path()).await.unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[tokio::test]
    async fn test_zero_timeout_rejected() {
        let file = write_config(
            ".yaml",
            "ua: x\ntimeout_secs: 0\npushover:\n  app_token: t\n  recipient_token: r\n",
        );
        let err = load_config(file.path()).await.unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }
}
