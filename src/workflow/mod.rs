//! User-triggered workflows with explicit state machines.
//!
//! Each workflow models what the presentation layer drives as a finite state
//! machine with well-defined transition triggers, independent of any UI
//! toolkit: Upload (form capture, optional AI tag suggestion, catalog
//! insertion) and Preview (single-document view with on-demand
//! summarization).

pub mod preview;
pub mod upload;

pub use preview::{PreviewState, PreviewWorkflow};
pub use upload::{FieldError, UploadError, UploadState, UploadWorkflow};
