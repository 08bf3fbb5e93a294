//! Lectern configuration.
//!
//! Loaded from TOML through [`ConfigManager`]. Every field has a default, so a
//! missing file or a partial one is fine.
//!
//! ```toml
//! project_name = "lectern"
//!
//! [content]
//! root = "~/courses/llm/notebook"
//! catalog = "~/courses/llm/catalog.toml"
//!
//! [search]
//! min_query_chars = 2
//! max_snippets_per_document = 3
//!
//! [logging]
//! level = "warn"
//! ```

use std::path::PathBuf;

use lectern_core::ConfigManager;
use lectern_core::util::paths::{expand_tilde, resolve_against};
use lectern_search::SearchConfig;
use serde::{Deserialize, Serialize};

/// Environment variable overriding `content.root`.
pub const CONTENT_ROOT_ENV: &str = "LECTERN_CONTENT_ROOT";

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LecternConfig {
    /// Project name, used for the config directory and env-var prefix.
    #[serde(default = "default_project_name")]
    pub project_name: String,

    /// Where course content lives.
    #[serde(default)]
    pub content: ContentConfig,

    /// Search behaviour.
    #[serde(default)]
    pub search: SearchConfig,

    /// Log output.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Content location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Directory holding one sub-directory per chapter.
    #[serde(default = "default_content_root")]
    pub root: String,

    /// Optional catalog file. The built-in course outline is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<String>,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_project_name() -> String {
    "lectern".to_string()
}

fn default_content_root() -> String {
    "notebook".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LecternConfig {
    fn default() -> Self {
        Self {
            project_name: default_project_name(),
            content: ContentConfig::default(),
            search: SearchConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            root: default_content_root(),
            catalog: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl LecternConfig {
    /// Content root with `~` expanded.
    ///
    /// A relative root is looked up from the working directory upwards (or
    /// under `LECTERN_ROOT` when set), so `lectern` works from anywhere inside
    /// a course checkout.
    pub fn content_root(&self) -> PathBuf {
        let root = expand_tilde(&self.content.root);
        if root.is_absolute() {
            return root;
        }

        let base = Self::resolver()
            .with_project_markers(&[self.content.root.as_str()])
            .project_root()
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_default();
        resolve_against(&base, &root)
    }

    /// Catalog file with `~` expanded, if configured.
    pub fn catalog_path(&self) -> Option<PathBuf> {
        self.content.catalog.as_deref().map(expand_tilde)
    }
}

impl ConfigManager for LecternConfig {
    fn project_name() -> &'static str {
        "lectern"
    }

    fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(root) = lookup(CONTENT_ROOT_ENV).filter(|r| !r.trim().is_empty()) {
            log::debug!("Content root overridden by {CONTENT_ROOT_ENV}: {root}");
            self.content.root = root;
        }
    }
}
