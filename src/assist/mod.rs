//! AI Assist Gateway: the abstraction over the external language-model
//! capability.
//!
//! Two capabilities, both shaped the same way: embed the document content in
//! a fixed instruction template, submit it to the model backend, extract the
//! JSON payload from the completion, and validate it strictly against the
//! declared shape. Nothing from the raw response reaches a caller without
//! passing schema validation. Calls are interactive and user-triggered, so
//! there is no retry or backoff; a failed call is reported and the user may
//! re-trigger.

pub mod client;
pub mod error;
pub mod gateway;

pub use client::{ModelBackend, ModelError, OllamaClient, OllamaConfig};
pub use error::{AssistError, AssistResult};
pub use gateway::{AssistGateway, Summary, TagSuggestions};
