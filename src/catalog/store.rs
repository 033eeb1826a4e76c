//! The in-memory document catalog.
//!
//! A `DocumentCatalog` is an explicit object constructed once at process
//! start and passed by reference to whoever needs it. It owns the documents,
//! assigns identity (id + upload timestamp) at the add boundary, and exposes
//! the filtered view. All mutations are synchronous; there is exactly one
//! mutation path per piece of state.

use tracing::debug;

use crate::catalog::error::{CatalogError, CatalogResult};
use crate::catalog::model::{Document, DocumentDraft};
use crate::catalog::{search, seeds, tags};

/// Minimum content length accepted by [`DocumentCatalog::add`], in characters.
pub const MIN_CONTENT_CHARS: usize = 10;

/// Ordered, newest-first collection of documents for the process lifetime.
pub struct DocumentCatalog {
    documents: Vec<Document>,
    next_id: u64,
}

impl DocumentCatalog {
    /// An empty catalog.
    pub fn new() -> Self {
        Self {
            documents: Vec::new(),
            next_id: 1,
        }
    }

    /// A catalog pre-populated with the bundled starter documents.
    pub fn with_seed_documents() -> Self {
        let documents = seeds::seed_documents();
        let next_id = documents
            .iter()
            .filter_map(|d| d.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0)
            + 1;
        Self { documents, next_id }
    }

    /// Validate a draft, assign a fresh id and the current timestamp, and
    /// insert the document at the front (most recent first).
    ///
    /// Tags are normalized and deduplicated here, so the stored record always
    /// satisfies the tag invariants no matter what the caller supplied.
    pub fn add(&mut self, draft: DocumentDraft) -> CatalogResult<&Document> {
        if draft.title.trim().is_empty() {
            return Err(CatalogError::Validation {
                field: "title",
                message: "title must not be empty".into(),
            });
        }
        if draft.content.chars().count() < MIN_CONTENT_CHARS {
            return Err(CatalogError::Validation {
                field: "content",
                message: format!("content must contain at least {MIN_CONTENT_CHARS} characters"),
            });
        }

        let mut normalized = Vec::new();
        for raw in &draft.tags {
            tags::add_tag(&mut normalized, raw);
        }
        if normalized.is_empty() {
            return Err(CatalogError::Validation {
                field: "tags",
                message: "at least one tag is required".into(),
            });
        }

        let id = self.next_id.to_string();
        self.next_id += 1;

        let now = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();

        let document = Document {
            id,
            title: draft.title,
            content: draft.content,
            upload_date: now,
            tags: normalized,
        };
        debug!(id = %document.id, title = %document.title, "document added");
        self.documents.insert(0, document);
        Ok(&self.documents[0])
    }

    /// Replace the stored record with the same id.
    ///
    /// Only the mutable fields (title, content, tags) are taken from the
    /// replacement; the stored `id` and `upload_date` are kept. Unknown ids
    /// are a contract violation and error with [`CatalogError::NotFound`].
    pub fn update(&mut self, replacement: Document) -> CatalogResult<()> {
        let existing = self
            .documents
            .iter_mut()
            .find(|d| d.id == replacement.id)
            .ok_or_else(|| CatalogError::NotFound {
                id: replacement.id.clone(),
            })?;

        existing.title = replacement.title;
        existing.content = replacement.content;
        let mut normalized = Vec::new();
        for raw in &replacement.tags {
            tags::add_tag(&mut normalized, raw);
        }
        existing.tags = normalized;
        debug!(id = %existing.id, "document updated");
        Ok(())
    }

    /// Remove the document with `id`. Deleting an absent id is a no-op,
    /// which keeps client retries idempotent.
    pub fn delete(&mut self, id: &str) {
        let before = self.documents.len();
        self.documents.retain(|d| d.id != id);
        if self.documents.len() < before {
            debug!(id, "document deleted");
        }
    }

    /// Look up a document by id.
    pub fn get(&self, id: &str) -> Option<&Document> {
        self.documents.iter().find(|d| d.id == id)
    }

    /// All documents matching `query`, in catalog order. The empty query
    /// returns everything.
    pub fn list(&self, query: &str) -> Vec<&Document> {
        self.documents
            .iter()
            .filter(|d| search::matches(d, query))
            .collect()
    }

    /// Number of documents in the catalog.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl Default for DocumentCatalog {
    fn default() -> Self {
        Self::new()
    }
}
