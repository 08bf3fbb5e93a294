//! Lectern Core: shared types, traits, errors, and utilities.
//!
//! This crate provides the foundational types used across all Lectern crates.
//! It has no internal Lectern dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`traits`]: The [`ConfigManager`](traits::ConfigManager) contract shared by CLI config types
//! - [`util`]: Path, ID, and directory resolution utilities

pub mod error;
pub mod traits;
pub mod util;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use traits::ConfigManager;

// Convenience re-exports from util
pub use util::ids::{document_id, normalize_id};
pub use util::resolver::PathResolver;
