//! Upload workflow: a single in-progress submission.
//!
//! States: `Editing -> Suggesting (repeatable) -> Editing -> Done`, or
//! `Editing -> Cancelled`. Validation runs before submission and reports
//! field-level messages; it never surfaces as a catalog error. Cancelling
//! discards all in-progress edits.

use miette::Diagnostic;
use thiserror::Error;
use tracing::debug;

use crate::assist::{AssistError, AssistGateway};
use crate::catalog::{CatalogError, DocumentCatalog, DocumentDraft, tags};

/// Minimum title length, in characters.
pub const MIN_TITLE_CHARS: usize = 3;
/// Minimum content length, in characters.
pub const MIN_CONTENT_CHARS: usize = 10;

/// Where the submission currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadState {
    /// The user is editing the form.
    Editing,
    /// A tag-suggestion call is in flight.
    Suggesting,
    /// The document was added to the catalog; the form has been reset.
    Done,
    /// The submission was discarded.
    Cancelled,
}

/// A single field-level validation message.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Errors from submitting the form.
#[derive(Debug, Error, Diagnostic)]
pub enum UploadError {
    #[error("validation failed: {}", format_fields(.0))]
    #[diagnostic(
        code(doxflow::upload::invalid),
        help("Fix the listed fields and submit again.")
    )]
    Invalid(Vec<FieldError>),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Catalog(#[from] CatalogError),
}

fn format_fields(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// The in-progress submission.
pub struct UploadWorkflow {
    state: UploadState,
    title: String,
    content: String,
    tags: Vec<String>,
    /// Candidate tags from the last suggestion call, each individually
    /// addable exactly once.
    suggestions: Vec<String>,
}

impl UploadWorkflow {
    pub fn new() -> Self {
        Self {
            state: UploadState::Editing,
            title: String::new(),
            content: String::new(),
            tags: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    pub fn state(&self) -> UploadState {
        self.state
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// Add a tag through the normalizer. Duplicates and blanks are no-ops.
    pub fn add_tag(&mut self, raw: &str) -> bool {
        tags::add_tag(&mut self.tags, raw)
    }

    /// Remove a tag. Absent tags are a no-op.
    pub fn remove_tag(&mut self, tag: &str) {
        tags::remove_tag(&mut self.tags, tag);
    }

    /// Pre-submit validation. Returns one message per violated rule; an empty
    /// result means the form may be submitted.
    ///
    /// The title is measured after trimming, so anything that passes here
    /// also satisfies the catalog's own non-empty rule and a clean form can
    /// never bounce off `add`.
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if self.title.trim().chars().count() < MIN_TITLE_CHARS {
            errors.push(FieldError {
                field: "title",
                message: format!("title must contain at least {MIN_TITLE_CHARS} characters"),
            });
        }
        if self.content.chars().count() < MIN_CONTENT_CHARS {
            errors.push(FieldError {
                field: "content",
                message: format!("content must contain at least {MIN_CONTENT_CHARS} characters"),
            });
        }
        if self.tags.is_empty() {
            errors.push(FieldError {
                field: "tags",
                message: "add at least one tag".into(),
            });
        }
        errors
    }

    /// Ask the gateway for tag suggestions based on the current content.
    ///
    /// Clears the candidate list up front (the pending state shows no
    /// suggestions). On success the list is replaced; on failure it stays
    /// empty and no tags are added. Repeatable from `Editing`.
    pub fn suggest(&mut self, gateway: &AssistGateway) -> Result<(), AssistError> {
        if self.state != UploadState::Editing {
            return Ok(());
        }
        self.suggestions.clear();
        self.state = UploadState::Suggesting;

        let result = gateway.suggest_tags(&self.content);
        self.state = UploadState::Editing;

        let suggested = result?;
        self.suggestions = suggested.suggested_tags;
        Ok(())
    }

    /// One-shot acceptance of a candidate: normalize and add it, then drop it
    /// from the candidate list whether or not the add was a duplicate no-op.
    pub fn accept_suggestion(&mut self, candidate: &str) {
        tags::add_tag(&mut self.tags, candidate);
        self.suggestions.retain(|s| s != candidate);
    }

    /// Validate and, if clean, add the document to the catalog. On success the
    /// form resets and the workflow is `Done`; returns the new document id.
    pub fn submit(&mut self, catalog: &mut DocumentCatalog) -> Result<String, UploadError> {
        let errors = self.validate();
        if !errors.is_empty() {
            debug!(count = errors.len(), "submission blocked by validation");
            return Err(UploadError::Invalid(errors));
        }

        // The form is reset only once the catalog has accepted the draft, so
        // an add failure cannot destroy in-progress edits.
        let draft = DocumentDraft {
            title: self.title.clone(),
            content: self.content.clone(),
            tags: self.tags.clone(),
        };
        let id = catalog.add(draft)?.id.clone();
        self.title.clear();
        self.content.clear();
        self.tags.clear();
        self.suggestions.clear();
        self.state = UploadState::Done;
        Ok(id)
    }

    /// Discard all in-progress edits. No draft persistence.
    pub fn cancel(&mut self) {
        self.title.clear();
        self.content.clear();
        self.tags.clear();
        self.suggestions.clear();
        self.state = UploadState::Cancelled;
    }
}

impl Default for UploadWorkflow {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assist::client::{ModelBackend, ModelError};

    struct Canned(&'static str);

    impl ModelBackend for Canned {
        fn complete(&self, _prompt: &str, _system: Option<&str>) -> Result<String, ModelError> {
            Ok(self.0.to_string())
        }
    }

    struct Failing;

    impl ModelBackend for Failing {
        fn complete(&self, _prompt: &str, _system: Option<&str>) -> Result<String, ModelError> {
            Err(ModelError::RequestFailed {
                message: "connection refused".into(),
            })
        }
    }

    fn valid_form() -> UploadWorkflow {
        let mut wf = UploadWorkflow::new();
        wf.set_title("Rapport Q3");
        wf.set_content("Contenu suffisamment long.");
        wf.add_tag("finance");
        wf
    }

    #[test]
    fn validate_reports_each_violated_field() {
        let wf = UploadWorkflow::new();
        let errors = wf.validate();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["title", "content", "tags"]);
    }

    #[test]
    fn validate_passes_at_thresholds() {
        let mut wf = UploadWorkflow::new();
        wf.set_title("abc"); // exactly 3
        wf.set_content("0123456789"); // exactly 10
        wf.add_tag("x");
        assert!(wf.validate().is_empty());
    }

    #[test]
    fn validate_measures_title_after_trimming() {
        let mut wf = UploadWorkflow::new();
        wf.set_content("0123456789");
        wf.add_tag("x");

        // Whitespace-only and padded-short titles both fail the title rule.
        for title in ["   ", " ab "] {
            wf.set_title(title);
            let errors = wf.validate();
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].field, "title");
        }

        wf.set_title(" abc ");
        assert!(wf.validate().is_empty());
    }

    #[test]
    fn whitespace_title_blocks_submit_and_preserves_form() {
        let mut catalog = DocumentCatalog::new();
        let mut wf = UploadWorkflow::new();
        wf.set_title("   ");
        wf.set_content("Contenu suffisamment long.");
        wf.add_tag("finance");

        // Field-level rejection, never a catalog error.
        let err = wf.submit(&mut catalog).unwrap_err();
        match err {
            UploadError::Invalid(errors) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].field, "title");
            }
            UploadError::Catalog(_) => panic!("catalog error escaped the workflow"),
        }

        // In-progress edits survive the blocked submission.
        assert_eq!(wf.content(), "Contenu suffisamment long.");
        assert_eq!(wf.tags(), ["finance"]);
        assert_eq!(wf.state(), UploadState::Editing);
        assert!(catalog.is_empty());
    }

    #[test]
    fn submit_blocked_by_validation_leaves_catalog_untouched() {
        let mut catalog = DocumentCatalog::new();
        let mut wf = UploadWorkflow::new();
        wf.set_title("ok"); // too short
        let err = wf.submit(&mut catalog).unwrap_err();
        assert!(matches!(err, UploadError::Invalid(_)));
        assert!(catalog.is_empty());
        assert_eq!(wf.state(), UploadState::Editing);
    }

    #[test]
    fn submit_adds_document_and_resets() {
        let mut catalog = DocumentCatalog::new();
        let mut wf = valid_form();
        let id = wf.submit(&mut catalog).unwrap();
        assert_eq!(wf.state(), UploadState::Done);
        assert!(wf.title().is_empty());
        assert!(wf.tags().is_empty());
        assert_eq!(catalog.get(&id).unwrap().title, "Rapport Q3");
    }

    #[test]
    fn suggest_populates_candidates() {
        let gw = AssistGateway::new(Box::new(Canned(r#"["Finance", "Rapport"]"#)));
        let mut wf = valid_form();
        wf.suggest(&gw).unwrap();
        assert_eq!(wf.suggestions(), ["Finance", "Rapport"]);
        assert_eq!(wf.state(), UploadState::Editing);
        // No tags were added yet.
        assert_eq!(wf.tags(), ["finance"]);
    }

    #[test]
    fn suggest_failure_clears_candidates_and_adds_nothing() {
        let gw = AssistGateway::new(Box::new(Failing));
        let mut wf = valid_form();
        wf.suggestions = vec!["stale".into()];
        assert!(wf.suggest(&gw).is_err());
        assert!(wf.suggestions().is_empty());
        assert_eq!(wf.tags(), ["finance"]);
        assert_eq!(wf.state(), UploadState::Editing);
    }

    #[test]
    fn accept_suggestion_is_one_shot() {
        let mut wf = valid_form();
        wf.suggestions = vec!["Finance".into(), " Finance ".into(), "Q1".into()];

        wf.accept_suggestion("Finance");
        // Duplicate of the existing normalized tag: not re-added, but consumed.
        assert_eq!(wf.tags(), ["finance"]);
        assert_eq!(wf.suggestions(), [" Finance ", "Q1"]);

        wf.accept_suggestion(" Finance ");
        assert_eq!(wf.tags(), ["finance"]);
        assert_eq!(wf.suggestions(), ["Q1"]);

        wf.accept_suggestion("Q1");
        assert_eq!(wf.tags(), ["finance", "q1"]);
        assert!(wf.suggestions().is_empty());
    }

    #[test]
    fn cancel_discards_everything() {
        let mut wf = valid_form();
        wf.cancel();
        assert_eq!(wf.state(), UploadState::Cancelled);
        assert!(wf.title().is_empty());
        assert!(wf.content().is_empty());
        assert!(wf.tags().is_empty());
    }
}
