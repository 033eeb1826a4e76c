//! Crate-level error aggregation.
//!
//! Each subsystem defines its own error type with miette `#[diagnostic]`
//! derives, providing error codes and help text. This wrapper exists for
//! callers (the CLI, integration glue) that cross subsystem boundaries,
//! preserving the full diagnostic chain through to the user.

use miette::Diagnostic;
use thiserror::Error;

use crate::assist::AssistError;
use crate::assist::client::ModelError;
use crate::catalog::CatalogError;
use crate::workflow::UploadError;

/// Any error the doxflow library can produce.
#[derive(Debug, Error, Diagnostic)]
pub enum DoxflowError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Assist(#[from] AssistError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Upload(#[from] UploadError),
}

/// Convenience alias for crate-level results.
pub type DoxflowResult<T> = std::result::Result<T, DoxflowError>;
