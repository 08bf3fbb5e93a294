//! Shared traits.
//!
//! [`ConfigManager`] is the contract the CLI's generic `config` subcommands
//! are written against: any TOML-backed, serde-serializable config type with
//! sensible defaults can implement it.

use std::path::PathBuf;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};
use crate::util::paths::expand_tilde;
use crate::util::resolver::PathResolver;

/// File name used for configuration inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// A TOML configuration type with file resolution and env-var export.
pub trait ConfigManager: Serialize + DeserializeOwned + Default {
    /// Project name, used for the config directory and env-var prefix.
    fn project_name() -> &'static str;

    /// Path resolver for this project.
    fn resolver() -> PathResolver {
        PathResolver::new(Self::project_name())
    }

    /// Default location of the config file.
    fn default_config_path() -> Option<PathBuf> {
        Self::resolver()
            .config_dir()
            .map(|dir| dir.join(CONFIG_FILE_NAME))
    }

    /// Resolve the config file path: an explicit path wins, otherwise the default.
    fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        match explicit {
            Some(path) => Some(expand_tilde(path)),
            None => Self::default_config_path(),
        }
    }

    /// Load configuration.
    ///
    /// A missing file yields defaults; a malformed one is an error.
    /// Environment overrides are applied last.
    fn load(explicit: Option<&str>) -> Result<Self> {
        let mut config = match Self::resolve_config_path(explicit) {
            Some(path) if path.exists() => {
                log::debug!("Loading config from {}", path.display());
                let content =
                    std::fs::read_to_string(&path).map_err(|e| Error::io_with_path(e, &path))?;
                toml::from_str(&content).map_err(|e| {
                    Error::config(format!("Failed to parse {}: {e}", path.display()))
                })?
            }
            Some(path) => {
                log::debug!("No config at {}, using defaults", path.display());
                Self::default()
            }
            None => Self::default(),
        };
        config.apply_env_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Apply overrides from an environment lookup. No-op by default.
    fn apply_env_overrides<F>(&mut self, _lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
    }

    /// Serialize to pretty TOML.
    fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Flatten into `PREFIX_SECTION_KEY=value` pairs.
    fn to_env_vars(&self) -> Result<Vec<(String, String)>> {
        let value = toml::Value::try_from(self).map_err(|e| Error::config(e.to_string()))?;
        let prefix = Self::resolver().env_prefix().to_string();
        let mut vars = Vec::new();
        flatten_env(&prefix, &value, &mut vars);
        Ok(vars)
    }
}

fn flatten_env(prefix: &str, value: &toml::Value, out: &mut Vec<(String, String)>) {
    match value {
        toml::Value::Table(table) => {
            for (key, child) in table {
                let name = format!("{prefix}_{}", key.to_uppercase().replace('-', "_"));
                flatten_env(&name, child, out);
            }
        }
        toml::Value::Array(items) => {
            let joined = items
                .iter()
                .map(scalar_to_string)
                .collect::<Vec<_>>()
                .join(",");
            out.push((prefix.to_string(), joined));
        }
        other => out.push((prefix.to_string(), scalar_to_string(other))),
    }
}

fn scalar_to_string(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
