//! Diagnostic error types for catalog operations.

use miette::Diagnostic;
use thiserror::Error;

/// Errors from document catalog operations.
#[derive(Debug, Error, Diagnostic)]
pub enum CatalogError {
    #[error("invalid {field}: {message}")]
    #[diagnostic(
        code(doxflow::catalog::validation),
        help("Correct the named field and retry the operation.")
    )]
    Validation {
        /// Which draft field violated its rule.
        field: &'static str,
        message: String,
    },

    #[error("document not found: \"{id}\"")]
    #[diagnostic(
        code(doxflow::catalog::not_found),
        help("No document with this ID exists in the catalog. List documents with `doxflow list`.")
    )]
    NotFound { id: String },
}

/// Convenience alias for catalog operation results.
pub type CatalogResult<T> = std::result::Result<T, CatalogError>;
