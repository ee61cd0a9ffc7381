use serde::{Deserialize, Serialize};

use super::{GenerateRequest, LlmError, LlmGenerate};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Blocking Gemini `generateContent` client.
///
/// Must be constructed and dropped outside an async context; the
/// pipeline calls it from `spawn_blocking` tasks.
pub struct GeminiClient {
    base_url: String,
    model: String,
    api_key: Option<String>,
    client: reqwest::blocking::Client,
    timeout_secs: u64,
}

impl GeminiClient {
    pub fn new(
        base_url: &str,
        model: &str,
        api_key: Option<String>,
        timeout_secs: u64,
    ) -> Result<Self, LlmError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| LlmError::HttpClient(e.to_string()))?;

        let api_key = api_key.filter(|k| !k.trim().is_empty());
        if api_key.is_none() {
            tracing::warn!("No GEMINI_API_KEY set; AI calls will use fallbacks");
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key,
            client,
            timeout_secs,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    system_instruction: Content<'a>,
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Part<'a> {
    Text {
        text: &'a str,
    },
    #[serde(rename_all = "camelCase")]
    File { file_data: FileData<'a> },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FileData<'a> {
    mime_type: &'a str,
    file_uri: &'a str,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

fn build_body<'a>(request: &GenerateRequest<'a>) -> GenerateContentRequest<'a> {
    let mut parts = vec![Part::Text {
        text: request.prompt,
    }];
    if let Some(attachment) = request.attachment {
        parts.push(Part::File {
            file_data: FileData {
                mime_type: attachment.mime_type,
                file_uri: attachment.file_uri,
            },
        });
    }

    GenerateContentRequest {
        system_instruction: Content {
            role: None,
            parts: vec![Part::Text {
                text: request.system,
            }],
        },
        contents: vec![Content {
            role: Some("user"),
            parts,
        }],
    }
}

/// Concatenate the text parts of the first candidate.
fn extract_text(response: GenerateContentResponse) -> Result<String, LlmError> {
    let text: String = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(LlmError::EmptyResponse);
    }
    Ok(trimmed.to_string())
}

impl LlmGenerate for GeminiClient {
    fn generate(&self, request: &GenerateRequest<'_>) -> Result<String, LlmError> {
        let api_key = self.api_key.as_deref().ok_or(LlmError::NotConfigured)?;
        let body = build_body(request);

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .map_err(|e| {
                if e.is_connect() {
                    LlmError::Connection(self.base_url.clone())
                } else if e.is_timeout() {
                    LlmError::Timeout(self.timeout_secs)
                } else {
                    LlmError::HttpClient(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(LlmError::Service {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateContentResponse = response
            .json()
            .map_err(|e| LlmError::ResponseParsing(e.to_string()))?;

        extract_text(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::llm::Attachment;

    #[test]
    fn body_without_attachment() {
        let request = GenerateRequest::new("be brief", "hello");
        let json = serde_json::to_value(build_body(&request)).unwrap();
        assert_eq!(json["systemInstruction"]["parts"][0]["text"], "be brief");
        assert!(json["systemInstruction"].get("role").is_none());
        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(json["contents"][0]["parts"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn body_with_attachment_adds_file_part() {
        let request = GenerateRequest::new("sys", "prompt").with_attachment(Attachment {
            file_uri: "https://files.example/abc",
            mime_type: "application/pdf",
        });
        let json = serde_json::to_value(build_body(&request)).unwrap();
        let file = &json["contents"][0]["parts"][1]["fileData"];
        assert_eq!(file["fileUri"], "https://files.example/abc");
        assert_eq!(file["mimeType"], "application/pdf");
    }

    #[test]
    fn extract_text_joins_parts() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"1. Stay "},{"text":"calm.\n"}]}}]}"#,
        )
        .unwrap();
        assert_eq!(extract_text(response).unwrap(), "1. Stay calm.");
    }

    #[test]
    fn extract_text_empty_candidates_is_error() {
        let response: GenerateContentResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert!(matches!(extract_text(response), Err(LlmError::EmptyResponse)));

        let blank: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"   "}]}}]}"#,
        )
        .unwrap();
        assert!(matches!(extract_text(blank), Err(LlmError::EmptyResponse)));
    }

    #[test]
    fn missing_key_is_not_configured_without_network() {
        let client = GeminiClient::new("http://127.0.0.1:9", DEFAULT_MODEL, None, 1).unwrap();
        assert!(!client.is_configured());
        let result = client.generate(&GenerateRequest::new("sys", "prompt"));
        assert!(matches!(result, Err(LlmError::NotConfigured)));
    }

    #[test]
    fn blank_key_counts_as_missing() {
        let client =
            GeminiClient::new(DEFAULT_BASE_URL, DEFAULT_MODEL, Some("  ".into()), 1).unwrap();
        assert!(!client.is_configured());
    }

    #[test]
    fn endpoint_includes_model() {
        let client =
            GeminiClient::new("https://example.test/", "gemini-x", Some("k".into()), 1).unwrap();
        assert_eq!(
            client.endpoint(),
            "https://example.test/v1beta/models/gemini-x:generateContent"
        );
        assert_eq!(client.model(), "gemini-x");
    }

    #[test]
    fn unreachable_service_is_connection_error() {
        // Port 9 (discard) is closed on test hosts; connect fails fast.
        let client =
            GeminiClient::new("http://127.0.0.1:9", DEFAULT_MODEL, Some("k".into()), 2).unwrap();
        let result = client.generate(&GenerateRequest::new("sys", "prompt"));
        assert!(result.is_err());
    }
}
