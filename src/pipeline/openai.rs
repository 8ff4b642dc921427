use serde::{Deserialize, Serialize};

use super::ExtractionError;

/// Default OpenAI-compatible API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Completion-provider capability: send a system instruction plus the user
/// text, get back a text body. With `json_mode` the provider is asked to
/// return a JSON-shaped body.
pub trait CompletionClient {
    fn complete(
        &self,
        system: &str,
        user: &str,
        json_mode: bool,
    ) -> Result<String, ExtractionError>;
}

/// Blocking HTTP client for an OpenAI-compatible chat-completions endpoint.
pub struct OpenAiClient {
    base_url: String,
    api_key: String,
    model: String,
    client: reqwest::blocking::Client,
    timeout_secs: u64,
}

impl OpenAiClient {
    /// Create a client. An empty key is a precondition failure: no request
    /// is ever attempted without a credential.
    pub fn new(
        api_key: &str,
        base_url: &str,
        model: &str,
        timeout_secs: u64,
    ) -> Result<Self, ExtractionError> {
        if api_key.trim().is_empty() {
            return Err(ExtractionError::MissingApiKey);
        }

        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| ExtractionError::HttpClient(e.to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
            client,
            timeout_secs,
        })
    }
}

/// Request body for the chat-completions endpoint.
#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
}

/// Response body from the chat-completions endpoint.
#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: String,
}

impl CompletionClient for OpenAiClient {
    fn complete(
        &self,
        system: &str,
        user: &str,
        json_mode: bool,
    ) -> Result<String, ExtractionError> {
        let url = format!("{}/chat/completions", self.base_url);
        let body = ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            response_format: json_mode.then_some(ResponseFormat {
                format_type: "json_object",
            }),
        };

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .map_err(|e| {
                if e.is_connect() {
                    ExtractionError::Connection(self.base_url.clone())
                } else if e.is_timeout() {
                    ExtractionError::HttpClient(format!(
                        "Request timed out after {}s",
                        self.timeout_secs
                    ))
                } else {
                    ExtractionError::HttpClient(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ExtractionError::Provider {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .map_err(|e| ExtractionError::MalformedResponse(e.to_string()))?;

        let first = parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| ExtractionError::MalformedResponse("no choices in response".into()))?;

        Ok(first.message.content)
    }
}

/// Mock completion client for testing: returns scripted responses in call
/// order, repeating the last one once the script runs out.
pub struct MockCompletionClient {
    responses: Vec<String>,
    call_count: std::sync::atomic::AtomicUsize,
}

impl MockCompletionClient {
    pub fn new(responses: &[&str]) -> Self {
        Self {
            responses: responses.iter().map(|r| r.to_string()).collect(),
            call_count: std::sync::atomic::AtomicUsize::new(0),
        }
    }

    /// Number of completion calls made so far.
    pub fn calls(&self) -> usize {
        self.call_count.load(std::sync::atomic::Ordering::SeqCst)
    }
}

impl CompletionClient for MockCompletionClient {
    fn complete(
        &self,
        _system: &str,
        _user: &str,
        _json_mode: bool,
    ) -> Result<String, ExtractionError> {
        let index = self
            .call_count
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        let response = self
            .responses
            .get(index)
            .or_else(|| self.responses.last())
            .cloned()
            .unwrap_or_default();
        Ok(response)
    }
}
