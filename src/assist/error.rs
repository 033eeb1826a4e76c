//! Diagnostic error types for the assist gateway.

use miette::Diagnostic;
use thiserror::Error;

/// Errors from the AI assist capabilities.
///
/// Transport failures and schema-validation failures surface uniformly per
/// capability; callers cannot (and need not) tell them apart.
#[derive(Debug, Error, Diagnostic)]
pub enum AssistError {
    #[error("summarization failed: {message}")]
    #[diagnostic(
        code(doxflow::assist::summarization),
        help("The model call failed or returned an unexpected shape. Re-trigger the summary.")
    )]
    Summarization { message: String },

    #[error("tag suggestion failed: {message}")]
    #[diagnostic(
        code(doxflow::assist::tag_suggestion),
        help("The model call failed or returned an unexpected shape. Re-trigger the suggestion.")
    )]
    TagSuggestion { message: String },

    #[error("document content is empty")]
    #[diagnostic(
        code(doxflow::assist::empty_content),
        help("Both capabilities require non-empty document content.")
    )]
    EmptyContent,
}

/// Convenience alias for assist operation results.
pub type AssistResult<T> = std::result::Result<T, AssistError>;
