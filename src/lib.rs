//! # doxflow
//!
//! An in-memory document catalog with tag-based search and AI-assisted
//! tagging and summarization.
//!
//! ## Architecture
//!
//! - **Catalog** (`catalog`): typed document records, tag normalization,
//!   case-insensitive title/tag search, newest-first in-memory storage
//! - **Assist gateway** (`assist`): summarize and suggest-tags capabilities
//!   over an external language model, with strict schema validation
//! - **Workflows** (`workflow`): explicit Upload and Preview state machines
//!   driven by the presentation layer
//!
//! ## Library usage
//!
//! ```
//! use doxflow::catalog::{DocumentCatalog, DocumentDraft};
//!
//! let mut catalog = DocumentCatalog::with_seed_documents();
//! let doc = catalog.add(DocumentDraft {
//!     title: "Rapport Q3".into(),
//!     content: "Analyse des performances du troisième trimestre.".into(),
//!     tags: vec!["Finance".into()],
//! }).unwrap();
//! assert_eq!(doc.tags, vec!["finance"]);
//! assert_eq!(catalog.list("rapport").len(), 2);
//! ```

pub mod assist;
pub mod catalog;
pub mod error;
pub mod workflow;

pub use error::{DoxflowError, DoxflowResult};
