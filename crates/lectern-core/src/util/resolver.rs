//! Configurable path resolver for project directories.
//!
//! `PathResolver` locates the config directory and the course root using
//! environment variables, directory markers, and fallback paths.
//!
//! # Example
//!
//! ```no_run
//! use lectern_core::util::resolver::PathResolver;
//!
//! let resolver = PathResolver::new("lectern")
//!     .with_project_markers(&["catalog.toml"]);
//!
//! // Checks LECTERN_ROOT, then walks up from the working directory
//! if let Some(root) = resolver.project_root() {
//!     println!("Course root: {:?}", root);
//! }
//! ```

use std::env;
use std::path::PathBuf;

use crate::util::paths::{expand_tilde, find_dir_with_marker};

/// Configurable path resolver for a specific project.
#[derive(Debug, Clone)]
pub struct PathResolver {
    /// Project name (e.g., "lectern")
    project_name: String,
    /// Environment variable prefix (e.g., "LECTERN")
    env_prefix: String,
    /// Marker files to identify the project root (e.g., ["catalog.toml"])
    project_markers: Vec<String>,
    /// Fallback config path (expanded with tilde)
    config_fallback: Option<PathBuf>,
    /// Fallback project root (expanded with tilde)
    project_fallback: Option<PathBuf>,
}

impl PathResolver {
    /// Create a new resolver for the given project name.
    ///
    /// The project name is converted to an environment variable prefix:
    /// - "lectern" → "LECTERN"
    /// - "course-search" → "COURSE_SEARCH"
    pub fn new(project_name: &str) -> Self {
        let env_prefix = project_name.to_uppercase().replace(['-', ' '], "_");

        Self {
            project_name: project_name.to_string(),
            env_prefix,
            project_markers: vec![],
            config_fallback: None,
            project_fallback: None,
        }
    }

    /// Set marker files that identify the project root.
    pub fn with_project_markers(mut self, markers: &[&str]) -> Self {
        self.project_markers = markers.iter().map(|s| (*s).to_string()).collect();
        self
    }

    /// Set a fallback path for the config directory (supports ~ expansion).
    pub fn with_config_fallback(mut self, path: &str) -> Self {
        self.config_fallback = Some(expand_tilde(path));
        self
    }

    /// Set a fallback path for the project root (supports ~ expansion).
    pub fn with_project_fallback(mut self, path: &str) -> Self {
        self.project_fallback = Some(expand_tilde(path));
        self
    }

    /// Get the environment variable name for a given suffix.
    ///
    /// # Example
    /// ```
    /// use lectern_core::util::resolver::PathResolver;
    ///
    /// let resolver = PathResolver::new("lectern");
    /// assert_eq!(resolver.env_var("CONTENT_ROOT"), "LECTERN_CONTENT_ROOT");
    /// ```
    pub fn env_var(&self, suffix: &str) -> String {
        format!("{}_{}", self.env_prefix, suffix)
    }

    /// Resolve the config directory.
    ///
    /// Checks in order:
    /// 1. `{PROJECT}_CONFIG_DIR` environment variable
    /// 2. Fallback path (if configured and existing)
    /// 3. Platform config directory joined with the project name
    ///
    /// Step 3 is returned even if the directory does not exist yet, so that
    /// `config init` has somewhere to write.
    pub fn config_dir(&self) -> Option<PathBuf> {
        if let Ok(path) = env::var(self.env_var("CONFIG_DIR")) {
            return Some(expand_tilde(&path));
        }

        if let Some(fallback) = &self.config_fallback
            && fallback.exists()
        {
            return Some(fallback.clone());
        }

        dirs::config_dir().map(|dir| dir.join(&self.project_name))
    }

    /// Resolve the project root directory.
    ///
    /// Checks in order:
    /// 1. `{PROJECT}_ROOT` environment variable
    /// 2. Walk up from the working directory looking for project markers
    /// 3. Fallback path (if configured)
    pub fn project_root(&self) -> Option<PathBuf> {
        if let Ok(path) = env::var(self.env_var("ROOT")) {
            let path = expand_tilde(&path);
            if path.exists() {
                return Some(path);
            }
        }

        if let Ok(cwd) = env::current_dir() {
            for marker in &self.project_markers {
                if let Some(root) = find_dir_with_marker(&cwd, marker) {
                    return Some(root);
                }
            }
        }

        if let Some(fallback) = &self.project_fallback
            && fallback.exists()
        {
            return Some(fallback.clone());
        }

        None
    }

    /// Get the project name.
    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// Get the environment variable prefix.
    pub fn env_prefix(&self) -> &str {
        &self.env_prefix
    }
}
