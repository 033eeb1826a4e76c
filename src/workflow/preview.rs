//! Preview workflow: single-document read view with on-demand summarization.
//!
//! States: `Idle -> Summarizing -> Summarized` or `Idle -> Summarizing ->
//! Failed`. Opening a document always starts from `Idle`; a prior summary or
//! error never leaks into a new viewing session. Both outcomes are terminal
//! until the user explicitly re-triggers.

use tracing::warn;

use crate::assist::AssistGateway;
use crate::catalog::{Document, HighlightSpan, search};

/// User-facing message shown when summarization fails.
pub const SUMMARY_FAILED_MESSAGE: &str = "Could not generate the summary. Try again.";

/// Where the summarization currently stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewState {
    /// No summary requested yet.
    Idle,
    /// A summarize call is in flight; re-triggering is refused.
    Summarizing,
    /// The returned summary text.
    Summarized(String),
    /// A user-facing failure message.
    Failed(String),
}

/// A read view over one document.
pub struct PreviewWorkflow {
    document_id: String,
    title: String,
    content: String,
    state: PreviewState,
}

impl PreviewWorkflow {
    /// Open a document for preview. Always starts `Idle`.
    pub fn open(document: &Document) -> Self {
        Self {
            document_id: document.id.clone(),
            title: document.title.clone(),
            content: document.content.clone(),
            state: PreviewState::Idle,
        }
    }

    pub fn document_id(&self) -> &str {
        &self.document_id
    }

    pub fn state(&self) -> &PreviewState {
        &self.state
    }

    /// Request a summary of the previewed document.
    ///
    /// Refused while a call is already in flight. From `Summarized` or
    /// `Failed` this restarts the cycle. The resulting state is returned for
    /// convenience.
    pub fn summarize(&mut self, gateway: &AssistGateway) -> &PreviewState {
        if self.state == PreviewState::Summarizing {
            return &self.state;
        }
        self.state = PreviewState::Summarizing;

        self.state = match gateway.summarize(&self.content) {
            Ok(result) => PreviewState::Summarized(result.summary),
            Err(e) => {
                warn!(id = %self.document_id, error = %e, "summarization failed");
                PreviewState::Failed(SUMMARY_FAILED_MESSAGE.into())
            }
        };
        &self.state
    }

    /// Title spans with every occurrence of `query` marked.
    pub fn highlight_title(&self, query: &str) -> Vec<HighlightSpan> {
        search::highlight(&self.title, query)
    }

    /// Content spans with every occurrence of `query` marked.
    pub fn highlight_content(&self, query: &str) -> Vec<HighlightSpan> {
        search::highlight(&self.content, query)
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

    fn doc() -> Document {
        Document {
            id: "1".into(),
            title: "Rapport Trimestriel".into(),
            content: "Analyse des performances du trimestre.".into(),
            upload_date: 0,
            tags: vec!["finance".into()],
        }
    }

    #[test]
    fn open_starts_idle() {
        let preview = PreviewWorkflow::open(&doc());
        assert_eq!(*preview.state(), PreviewState::Idle);
    }

    #[test]
    fn summarize_success_holds_text() {
        let gw = AssistGateway::new(Box::new(Canned(r#"{"summary": "Résumé."}"#)));
        let mut preview = PreviewWorkflow::open(&doc());
        preview.summarize(&gw);
        assert_eq!(
            *preview.state(),
            PreviewState::Summarized("Résumé.".into())
        );
    }

    #[test]
    fn summarize_failure_holds_user_message() {
        let gw = AssistGateway::new(Box::new(Canned("not json at all")));
        let mut preview = PreviewWorkflow::open(&doc());
        preview.summarize(&gw);
        assert_eq!(
            *preview.state(),
            PreviewState::Failed(SUMMARY_FAILED_MESSAGE.into())
        );
    }

    #[test]
    fn summarize_returns_terminal_state() {
        let success = AssistGateway::new(Box::new(Canned(r#"{"summary": "ok"}"#)));
        let failure = AssistGateway::new(Box::new(Canned("garbage")));

        let mut preview = PreviewWorkflow::open(&doc());
        assert!(matches!(
            preview.summarize(&success),
            PreviewState::Summarized(_)
        ));
        assert!(matches!(preview.summarize(&failure), PreviewState::Failed(_)));
    }

    #[test]
    fn retrigger_after_failure_restarts_cycle() {
        let failing = AssistGateway::new(Box::new(Canned("garbage")));
        let mut preview = PreviewWorkflow::open(&doc());
        preview.summarize(&failing);
        assert!(matches!(preview.state(), PreviewState::Failed(_)));

        let working = AssistGateway::new(Box::new(Canned(r#"{"summary": "ok"}"#)));
        preview.summarize(&working);
        assert_eq!(*preview.state(), PreviewState::Summarized("ok".into()));
    }

    #[test]
    fn reopen_clears_prior_state() {
        let gw = AssistGateway::new(Box::new(Canned(r#"{"summary": "ok"}"#)));
        let d = doc();
        let mut preview = PreviewWorkflow::open(&d);
        preview.summarize(&gw);
        assert!(matches!(preview.state(), PreviewState::Summarized(_)));

        let preview = PreviewWorkflow::open(&d);
        assert_eq!(*preview.state(), PreviewState::Idle);
    }

    #[test]
    fn highlight_marks_query_in_title_and_content() {
        let preview = PreviewWorkflow::open(&doc());
        let title_spans = preview.highlight_title("rapport");
        assert!(title_spans.iter().any(|s| s.matched));
        let content_spans = preview.highlight_content("TRIMESTRE");
        assert!(content_spans.iter().any(|s| s.matched));
        // Empty query marks nothing.
        assert!(
            preview
                .highlight_content("")
                .iter()
                .all(|s| !s.matched)
        );
    }
}
