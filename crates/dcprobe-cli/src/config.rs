//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables (handled by clap `env = …` attributes)
//! 3. Config file (TOML, `--config` path or the default location)
//! 4. Built-in defaults (always present)
//!
//! # Credentials
//!
//! Passwords are deliberately NOT part of the file format: `[connection]`
//! rejects unknown keys, so a `password = …` line fails loading instead of
//! silently teaching users to store secrets on disk.  Passwords come from
//! `--password`, `DCPROBE_PASSWORD`, or the interactive prompt.

use std::fs;
use std::path::PathBuf;

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default connection parameters.
    pub connection: ConnectionDefaults,
    /// Inventory backend settings.
    pub inventory: InventoryConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConnectionDefaults {
    pub host: Option<String>,
    pub username: Option<String>,
    pub path: Option<String>,
    pub force: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryConfig {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "human".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// The `config_file` parameter is the path the user passed via
    /// `--config`; an explicitly named file must exist and parse.  With
    /// `None` the default location is tried, and a missing file simply
    /// yields the built-in defaults.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(explicit) => (explicit.clone(), true),
            None => (Self::config_path(), false),
        };

        if !path.exists() {
            if required {
                anyhow::bail!("config file not found: {}", path.display());
            }
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(&path)
            .with_context(|| format!("cannot read config file {}", path.display()))?;

        toml::from_str(&raw)
            .with_context(|| format!("invalid config file {}", path.display()))
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.dcprobe.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "cosecruz", "dcprobe")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".dcprobe.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults_have_no_host() {
        let cfg = AppConfig::default();
        assert!(cfg.connection.host.is_none());
        assert!(!cfg.connection.force);
    }

    #[test]
    fn load_without_file_returns_defaults() {
        let cfg = AppConfig::load(None).unwrap();
        assert!(cfg.inventory.path.is_none());
        assert_eq!(cfg.output.format, "human");
    }

    #[test]
    fn load_parses_partial_file() {
        let file = write_config(
            r#"
            [connection]
            host = "vcenter.local"
            username = "admin"
            "#,
        );
        let path = file.path().to_path_buf();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.connection.host.as_deref(), Some("vcenter.local"));
        assert_eq!(cfg.connection.username.as_deref(), Some("admin"));
        // Untouched sections keep their defaults.
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let path = PathBuf::from("/definitely/not/here.toml");
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn password_in_config_file_is_rejected() {
        let file = write_config(
            r#"
            [connection]
            host = "vcenter.local"
            password = "nope"
            "#,
        );
        let path = file.path().to_path_buf();

        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn config_path_is_absolute_or_relative() {
        // Just assert it doesn't panic and returns a non-empty path.
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }
}
