use std::net::SocketAddr;
use std::path::Path;

use anyhow::{Context, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};
use user_settings::UserSettingsConfig;

/// Prefix of environment overrides, e.g. `APP__SERVER__BIND_ADDR`.
pub const ENV_PREFIX: &str = "APP__";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub settings: UserSettingsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8087".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `user_settings=debug,info`.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: LogFormat::Text,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl AppConfig {
    /// Layered load: defaults, then the YAML file (if any), then `APP__*`
    /// environment variables.
    ///
    /// # Errors
    /// Returns an error when a layer cannot be parsed or the merged result
    /// does not match the schema.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .context("failed to load configuration")
    }

    /// CLI flags win over every other layer.
    pub fn apply_cli_overrides(&mut self, port: Option<u16>, verbose: u8) {
        if let Some(port) = port {
            let host = self
                .server
                .bind_addr
                .rsplit_once(':')
                .map_or("127.0.0.1", |(host, _)| host);
            self.server.bind_addr = format!("{host}:{port}");
        }

        let level = match verbose {
            0 => return,
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        self.logging.level = level.to_owned();
    }

    /// # Errors
    /// Returns an error if `server.bind_addr` is not a socket address.
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        let bind_addr = &self.server.bind_addr;
        bind_addr
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid bind address '{bind_addr}': {e}"))
    }

    /// # Errors
    /// Returns an error if the configuration cannot be rendered.
    pub fn to_yaml(&self) -> Result<String> {
        serde_saphyr::to_string(self)
            .map_err(|e| anyhow::anyhow!("failed to render configuration as YAML: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use user_settings::StorageConfig;
    use user_settings::MergePolicy;

    fn write_config(dir: &tempfile::TempDir, yaml: &str) -> std::path::PathBuf {
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, yaml).unwrap();
        path
    }

    #[test]
    fn test_defaults_without_file() {
        let cfg = AppConfig::load_or_default(None).unwrap();

        assert_eq!(cfg.server.bind_addr, "127.0.0.1:8087");
        assert_eq!(cfg.logging.level, "info");
        assert_eq!(cfg.logging.format, LogFormat::Text);
        assert_eq!(cfg.settings.storage, StorageConfig::Memory);
    }

    #[test]
    fn test_yaml_layer_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            &dir,
            r"
server:
  bind_addr: 0.0.0.0:9000
logging:
  format: json
settings:
  merge_policy: deep
  storage:
    kind: file
    path: /var/lib/user-settings/settings.json
",
        );

        let cfg = AppConfig::load_or_default(Some(&path)).unwrap();

        assert_eq!(cfg.server.bind_addr, "0.0.0.0:9000");
        assert_eq!(cfg.logging.level, "info");
        assert_eq!(cfg.logging.format, LogFormat::Json);
        assert_eq!(cfg.settings.merge_policy, MergePolicy::Deep);
        assert_eq!(
            cfg.settings.storage,
            StorageConfig::File {
                path: "/var/lib/user-settings/settings.json".into()
            }
        );
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "database:\n  dsn: sqlite://x\n");

        assert!(AppConfig::load_or_default(Some(&path)).is_err());
    }

    #[test]
    fn test_cli_overrides() {
        let mut cfg = AppConfig::default();

        cfg.apply_cli_overrides(Some(9100), 2);

        assert_eq!(cfg.server.bind_addr, "127.0.0.1:9100");
        assert_eq!(cfg.logging.level, "debug");
        assert_eq!(cfg.bind_addr().unwrap().port(), 9100);
    }

    #[test]
    fn test_no_verbose_flag_keeps_level() {
        let mut cfg = AppConfig::default();
        cfg.logging.level = "warn".to_owned();

        cfg.apply_cli_overrides(None, 0);

        assert_eq!(cfg.logging.level, "warn");
    }

    #[test]
    fn test_invalid_bind_addr() {
        let mut cfg = AppConfig::default();
        cfg.server.bind_addr = "not-an-address".to_owned();

        let err = cfg.bind_addr().unwrap_err();

        assert!(err.to_string().contains("Invalid bind address"));
    }
}
