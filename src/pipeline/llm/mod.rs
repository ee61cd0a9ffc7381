//! Generative AI collaborator boundary.
//!
//! Every pipeline stage that talks to the AI service goes through
//! `LlmGenerate`, so tests substitute `MockLlm` and production uses
//! the blocking Gemini REST client.

pub mod gemini;
#[cfg(test)]
pub mod mock;

use thiserror::Error;

pub use gemini::GeminiClient;

#[derive(Error, Debug)]
pub enum LlmError {
    #[error("Gemini API key not configured")]
    NotConfigured,

    #[error("AI service connection failed: {0}")]
    Connection(String),

    #[error("Request timed out after {0}s")]
    Timeout(u64),

    #[error("AI service returned {status}: {body}")]
    Service { status: u16, body: String },

    #[error("Response parsing error: {0}")]
    ResponseParsing(String),

    #[error("AI service returned empty text")]
    EmptyResponse,

    #[error("HTTP client error: {0}")]
    HttpClient(String),
}

/// A document the model must read alongside the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attachment<'a> {
    pub file_uri: &'a str,
    pub mime_type: &'a str,
}

/// One generation call: system instruction, user content, optional document.
#[derive(Debug, Clone, Copy)]
pub struct GenerateRequest<'a> {
    pub system: &'a str,
    pub prompt: &'a str,
    pub attachment: Option<Attachment<'a>>,
}

impl<'a> GenerateRequest<'a> {
    pub fn new(system: &'a str, prompt: &'a str) -> Self {
        Self {
            system,
            prompt,
            attachment: None,
        }
    }

    pub fn with_attachment(mut self, attachment: Attachment<'a>) -> Self {
        self.attachment = Some(attachment);
        self
    }
}

/// Blocking, single-attempt text generation.
///
/// Implementations return `LlmError::EmptyResponse` instead of `Ok("")`,
/// so callers only need to branch on `Ok` vs `Err`.
pub trait LlmGenerate: Send + Sync {
    fn generate(&self, request: &GenerateRequest<'_>) -> Result<String, LlmError>;
}

impl<T: LlmGenerate + ?Sized> LlmGenerate for std::sync::Arc<T> {
    fn generate(&self, request: &GenerateRequest<'_>) -> Result<String, LlmError> {
        (**self).generate(request)
    }
}
