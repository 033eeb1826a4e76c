//! Core data types for the document catalog.

use serde::{Deserialize, Serialize};

/// A document stored in the catalog.
///
/// `id` and `upload_date` are assigned by the catalog at creation and never
/// change afterwards. `tags` holds normalized (trimmed, lowercased) labels in
/// insertion order, with no empty or duplicate entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Opaque unique identifier, assigned at creation.
    pub id: String,
    /// Human-readable title.
    pub title: String,
    /// Full text body; the material that gets summarized and tagged.
    pub content: String,
    /// Creation timestamp (seconds since UNIX epoch).
    pub upload_date: u64,
    /// Normalized tags in insertion order.
    pub tags: Vec<String>,
}

/// Input for [`DocumentCatalog::add`](crate::catalog::DocumentCatalog::add):
/// everything the caller supplies, before the catalog assigns identity.
#[derive(Debug, Clone, Default)]
pub struct DocumentDraft {
    pub title: String,
    pub content: String,
    /// Raw tag inputs; normalized and deduplicated at the catalog boundary.
    pub tags: Vec<String>,
}
