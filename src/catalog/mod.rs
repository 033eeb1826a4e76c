//! In-memory document catalog with tag-based search.
//!
//! Documents are typed records (title, content, normalized tags) held in a
//! newest-first collection for the lifetime of the process. Search is a
//! case-insensitive substring match over titles and tags; the catalog itself
//! never reorders results.

pub mod error;
pub mod model;
pub mod search;
pub mod seeds;
pub mod store;
pub mod tags;

pub use error::{CatalogError, CatalogResult};
pub use model::{Document, DocumentDraft};
pub use search::{HighlightSpan, highlight, matches};
pub use store::DocumentCatalog;
