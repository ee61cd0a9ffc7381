use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use super::{GenerateRequest, LlmError, LlmGenerate};

enum Behaviour {
    Respond(String),
    Empty,
    Unreachable,
    NotConfigured,
}

/// Recorded view of one call made against the mock.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub system: String,
    pub prompt: String,
    pub attachment_uri: Option<String>,
}

/// Mock LLM for testing: canned text, empty output, or a failure.
pub struct MockLlm {
    behaviour: Behaviour,
    calls: AtomicUsize,
    recorded: Mutex<Vec<RecordedCall>>,
}

impl MockLlm {
    fn with(behaviour: Behaviour) -> Self {
        Self {
            behaviour,
            calls: AtomicUsize::new(0),
            recorded: Mutex::new(Vec::new()),
        }
    }

    pub fn responding(text: &str) -> Self {
        Self::with(Behaviour::Respond(text.to_string()))
    }

    pub fn empty() -> Self {
        Self::with(Behaviour::Empty)
    }

    pub fn unreachable() -> Self {
        Self::with(Behaviour::Unreachable)
    }

    pub fn not_configured() -> Self {
        Self::with(Behaviour::NotConfigured)
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_call(&self) -> Option<RecordedCall> {
        self.recorded.lock().unwrap().last().cloned()
    }
}

impl LlmGenerate for MockLlm {
    fn generate(&self, request: &GenerateRequest<'_>) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.recorded.lock().unwrap().push(RecordedCall {
            system: request.system.to_string(),
            prompt: request.prompt.to_string(),
            attachment_uri: request.attachment.map(|a| a.file_uri.to_string()),
        });
        match &self.behaviour {
            Behaviour::Respond(text) => Ok(text.clone()),
            Behaviour::Empty => Err(LlmError::EmptyResponse),
            Behaviour::Unreachable => Err(LlmError::Connection("mock: connection refused".into())),
            Behaviour::NotConfigured => Err(LlmError::NotConfigured),
        }
    }
}
