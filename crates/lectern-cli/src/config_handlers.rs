//! `lectern config` subcommands.
//!
//! Each handler is generic over [`ConfigManager`] and returns the text to
//! print, so the behaviour is testable without capturing stdout. Keys are
//! dotted paths into the TOML tree (`search.min_query_chars`).

use std::path::{Path, PathBuf};

use lectern_core::{ConfigManager, Error, Result};

use crate::cli::ConfigAction;
use crate::config::LecternConfig;

/// Run a config subcommand against [`LecternConfig`] and print its output.
pub fn handle_config_command(config_path: Option<&str>, action: ConfigAction) -> Result<()> {
    let output = match action {
        ConfigAction::Path => config_path_report::<LecternConfig>(config_path)?,
        ConfigAction::Get { key } => config_get::<LecternConfig>(config_path, &key)?,
        ConfigAction::Set { key, value } => {
            let path = config_set::<LecternConfig>(config_path, &key, &value)?;
            format!("Set {key} = {value} in {}", path.display())
        }
        ConfigAction::Init { file, force } => {
            let path = config_init::<LecternConfig>(file.as_deref(), force)?;
            format!("Config file created at {}", path.display())
        }
        ConfigAction::Export { docker_env } => {
            config_export(&LecternConfig::load(config_path)?, docker_env)?
        }
    };
    println!("{output}");
    Ok(())
}

// ============================================================================
// Generic handlers
// ============================================================================

/// The resolved config path, with a hint when the file does not exist yet.
pub fn config_path_report<C: ConfigManager>(config_path: Option<&str>) -> Result<String> {
    let path = C::resolve_config_path(config_path)
        .ok_or_else(|| Error::config("Could not determine config directory for this platform"))?;

    let mut report = path.display().to_string();
    if !path.exists() {
        report.push_str(&format!(
            "\n(file does not exist; run `{} config init` to create it)",
            C::project_name()
        ));
    }
    Ok(report)
}

/// The value at a dotted key, formatted for display.
pub fn config_get<C: ConfigManager>(config_path: Option<&str>, key: &str) -> Result<String> {
    let config = C::load(config_path)?;
    let tree = toml::Value::try_from(&config).map_err(|e| Error::config(e.to_string()))?;
    get_nested_value(&tree, key)
        .map(format_toml_value)
        .ok_or_else(|| Error::config(format!("Key '{key}' not found in configuration")))
}

/// Write a value at a dotted key into the existing config file.
///
/// The updated file must still deserialize as `C`, so a typo such as a string
/// for `search.min_query_chars` is rejected before anything is written.
pub fn config_set<C: ConfigManager>(
    config_path: Option<&str>,
    key: &str,
    value: &str,
) -> Result<PathBuf> {
    let path = C::resolve_config_path(config_path)
        .ok_or_else(|| Error::config("Could not determine config directory"))?;
    if !path.exists() {
        return Err(Error::config(format!(
            "Config file does not exist at {}. Run `{} config init` first.",
            path.display(),
            C::project_name()
        )));
    }

    let mut tree = read_toml(&path)?;
    set_nested_value(&mut tree, key, parse_value(value))?;

    let rendered = toml::to_string_pretty(&tree).map_err(|e| Error::config(e.to_string()))?;
    toml::from_str::<C>(&rendered)
        .map_err(|e| Error::config(format!("Invalid value for '{key}': {e}")))?;

    std::fs::write(&path, rendered).map_err(|e| Error::io_with_path(e, &path))?;
    log::debug!("Updated {key} in {}", path.display());
    Ok(path)
}

/// Write a default config file, returning its path.
pub fn config_init<C: ConfigManager>(file: Option<&str>, force: bool) -> Result<PathBuf> {
    let path = match file {
        Some(p) => PathBuf::from(p),
        None => C::default_config_path()
            .ok_or_else(|| Error::config("Could not determine config directory"))?,
    };

    if path.exists() && !force {
        return Err(Error::config(format!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        )));
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| Error::io_with_path(e, parent))?;
    }
    std::fs::write(&path, C::default().to_toml_string()?)
        .map_err(|e| Error::io_with_path(e, &path))?;
    Ok(path)
}

/// The configuration as `KEY=value` lines (or `--env KEY=value`).
pub fn config_export<C: ConfigManager>(config: &C, docker_env: bool) -> Result<String> {
    let lines: Vec<String> = config
        .to_env_vars()?
        .into_iter()
        .map(|(key, value)| {
            if docker_env {
                format!("--env {key}={value}")
            } else {
                format!("{key}={value}")
            }
        })
        .collect();
    Ok(lines.join("\n"))
}

// ============================================================================
// TOML dotted-key helpers
// ============================================================================

fn read_toml(path: &Path) -> Result<toml::Value> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
    toml::from_str(&content)
        .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))
}

/// Look up a dotted key in a TOML tree.
pub fn get_nested_value<'a>(value: &'a toml::Value, key: &str) -> Option<&'a toml::Value> {
    key.split('.')
        .try_fold(value, |current, part| current.as_table()?.get(part))
}

/// Set a dotted key, creating intermediate tables as needed.
pub fn set_nested_value(root: &mut toml::Value, key: &str, value: toml::Value) -> Result<()> {
    if key.is_empty() || key.split('.').any(str::is_empty) {
        return Err(Error::config(format!("Invalid key '{key}'")));
    }

    let (parents, leaf) = match key.rsplit_once('.') {
        Some((parents, leaf)) => (Some(parents), leaf),
        None => (None, key),
    };

    let mut current = root;
    for part in parents.into_iter().flat_map(|p| p.split('.')) {
        let table = current
            .as_table_mut()
            .ok_or_else(|| Error::config(format!("Cannot navigate into '{part}' in '{key}'")))?;
        current = table
            .entry(part)
            .or_insert(toml::Value::Table(toml::map::Map::new()));
    }

    let table = current
        .as_table_mut()
        .ok_or_else(|| Error::config(format!("Cannot set '{key}' on a non-table value")))?;
    table.insert(leaf.to_string(), value);
    Ok(())
}

/// Parse a command-line value: bool, then integer, then float, then string.
pub fn parse_value(s: &str) -> toml::Value {
    match s {
        "true" => toml::Value::Boolean(true),
        "false" => toml::Value::Boolean(false),
        _ => s
            .parse::<i64>()
            .map(toml::Value::Integer)
            .or_else(|_| s.parse::<f64>().map(toml::Value::Float))
            .unwrap_or_else(|_| toml::Value::String(s.to_string())),
    }
}

/// Render a TOML value for the terminal. Strings print without quotes.
pub fn format_toml_value(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        toml::Value::Array(items) => items
            .iter()
            .map(format_toml_value)
            .collect::<Vec<_>>()
            .join(", "),
        toml::Value::Table(_) => {
            toml::to_string_pretty(value).unwrap_or_else(|_| format!("{value:?}"))
        }
        other => other.to_string(),
    }
}
