//! Utility modules for path handling, ID computation, and directory
//! resolution.
//!
//! # Modules
//!
//! - [`ids`]: ID normalization for chapters and documents
//! - [`paths`]: Generic path utilities (tilde expansion, marker search)
//! - [`resolver`]: Configurable project path resolution

pub mod ids;
pub mod paths;
pub mod resolver;
