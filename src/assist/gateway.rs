//! The two assist capabilities: summarize and suggest tags.
//!
//! Each capability embeds the document content verbatim in a fixed
//! instruction template, runs it through the [`ModelBackend`], locates the
//! JSON payload in the completion, and validates it strictly against the
//! declared shape. Unknown fields, missing fields, and wrong types are all
//! rejected before the value reaches the caller.

use serde::Deserialize;
use tracing::{info, warn};

use crate::assist::client::ModelBackend;
use crate::assist::error::{AssistError, AssistResult};

const SUMMARIZE_SYSTEM: &str = "You are an expert document summarizer. \
    Produce a concise summary of the document content provided by the user. \
    Return ONLY a JSON object with a single string field \"summary\" \
    containing the summary, no other text.";

const SUGGEST_TAGS_SYSTEM: &str = "You are an expert at document categorization. \
    Analyze the document content provided by the user and suggest relevant tags \
    to improve discoverability and organization. \
    Return ONLY a JSON array of strings, no other text.";

/// Validated summarization result.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Summary {
    pub summary: String,
}

/// Validated tag-suggestion result. Suggestions are returned raw; callers
/// normalize them on acceptance.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct TagSuggestions {
    pub suggested_tags: Vec<String>,
}

/// Gateway over the external language-model capability.
pub struct AssistGateway {
    backend: Box<dyn ModelBackend>,
}

impl AssistGateway {
    pub fn new(backend: Box<dyn ModelBackend>) -> Self {
        Self { backend }
    }

    /// Produce a concise summary of `content`.
    ///
    /// Transport failures and schema mismatches both surface as
    /// [`AssistError::Summarization`]; there is no automatic retry.
    pub fn summarize(&self, content: &str) -> AssistResult<Summary> {
        if content.trim().is_empty() {
            return Err(AssistError::EmptyContent);
        }

        let prompt = format!("Document Content: {content}\n\nSummarize the content above.");
        let raw = self
            .backend
            .complete(&prompt, Some(SUMMARIZE_SYSTEM))
            .map_err(|e| {
                warn!(error = %e, "summarize model call failed");
                AssistError::Summarization {
                    message: e.to_string(),
                }
            })?;

        let payload =
            extract_delimited(&raw, '{', '}').ok_or_else(|| AssistError::Summarization {
                message: "no JSON object found in response".into(),
            })?;
        let summary: Summary =
            serde_json::from_str(payload).map_err(|e| AssistError::Summarization {
                message: format!("response did not match expected shape: {e}"),
            })?;
        info!(chars = summary.summary.len(), "summary generated");
        Ok(summary)
    }

    /// Propose tags for `content` to aid discoverability.
    ///
    /// The model is instructed to return a bare JSON array of strings; the
    /// object form `{"suggestedTags": [...]}` is accepted as well. Any other
    /// shape fails with [`AssistError::TagSuggestion`]; no retry.
    pub fn suggest_tags(&self, content: &str) -> AssistResult<TagSuggestions> {
        if content.trim().is_empty() {
            return Err(AssistError::EmptyContent);
        }

        let prompt = format!(
            "Document Content: {content}\n\nBased on the content above, suggest a list of \
             tags that would be helpful for categorizing and retrieving this document."
        );
        let raw = self
            .backend
            .complete(&prompt, Some(SUGGEST_TAGS_SYSTEM))
            .map_err(|e| {
                warn!(error = %e, "suggest-tags model call failed");
                AssistError::TagSuggestion {
                    message: e.to_string(),
                }
            })?;

        let trimmed = raw.trim();
        let suggestions = match (trimmed.find('['), trimmed.find('{')) {
            // Bare array form, or the array appears first.
            (Some(a), Some(o)) if a < o => parse_tag_array(trimmed)?,
            (Some(_), None) => parse_tag_array(trimmed)?,
            // Object form.
            (_, Some(_)) => parse_tag_object(trimmed)?,
            (None, None) => {
                return Err(AssistError::TagSuggestion {
                    message: "no JSON payload found in response".into(),
                });
            }
        };
        info!(count = suggestions.suggested_tags.len(), "tags suggested");
        Ok(suggestions)
    }
}

impl std::fmt::Debug for AssistGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssistGateway").finish_non_exhaustive()
    }
}

fn parse_tag_array(trimmed: &str) -> AssistResult<TagSuggestions> {
    let payload =
        extract_delimited(trimmed, '[', ']').ok_or_else(|| AssistError::TagSuggestion {
            message: "no JSON array found in response".into(),
        })?;
    let tags: Vec<String> =
        serde_json::from_str(payload).map_err(|e| AssistError::TagSuggestion {
            message: format!("response did not match expected shape: {e}"),
        })?;
    Ok(TagSuggestions {
        suggested_tags: tags,
    })
}

fn parse_tag_object(trimmed: &str) -> AssistResult<TagSuggestions> {
    let payload =
        extract_delimited(trimmed, '{', '}').ok_or_else(|| AssistError::TagSuggestion {
            message: "no JSON object found in response".into(),
        })?;
    serde_json::from_str(payload).map_err(|e| AssistError::TagSuggestion {
        message: format!("response did not match expected shape: {e}"),
    })
}

/// Locate the outermost `open`..`close` slice in a completion. Models often
/// wrap the payload in prose even when told not to.
fn extract_delimited(raw: &str, open: char, close: char) -> Option<&str> {
    let start = raw.find(open)?;
    let end = raw.rfind(close)?;
    if end > start { Some(&raw[start..=end]) } else { None }
}
