//! Course catalog and content loading for Lectern.
//!
//! This crate provides the two collaborators the search engine reads from:
//!
//! - [`catalog`]: the ordered chapter → document mapping that defines the corpus
//! - [`loader`]: the [`ContentLoader`] trait that turns a [`DocumentRef`] into text,
//!   with a filesystem implementation ([`FsContentLoader`]) and an in-memory one
//!   ([`MemoryContentLoader`])
//!
//! Document types are classified by [`DocumentKind`]; only Markdown and plain
//! text are searchable.
//!
//! # Example
//!
//! ```rust
//! use lectern_content::{Chapter, DocumentCatalog};
//!
//! let catalog = DocumentCatalog::new(vec![
//!     Chapter::new("C1 Intro", ["1.Overview.md", "2.Setup.ipynb"]),
//! ])
//! .unwrap();
//!
//! let searchable: Vec<_> = catalog.searchable_documents().collect();
//! assert_eq!(searchable.len(), 1);
//! assert_eq!(searchable[0].name, "1.Overview.md");
//! ```

pub mod catalog;
pub mod error;
pub mod kind;
pub mod loader;
pub mod memory;

pub use catalog::{Chapter, DocumentCatalog, DocumentRef};
pub use error::{Error, LoadError, Result};
pub use kind::DocumentKind;
pub use loader::{ContentLoader, FsContentLoader};
pub use memory::MemoryContentLoader;
