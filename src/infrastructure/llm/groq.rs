//! Groq provider, speaking the OpenAI-compatible chat completions protocol

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::http_client::HttpClientTrait;
use crate::domain::DomainError;
use crate::domain::llm::{
    CompletionRequest, CompletionResponse, FinishReason, LlmProvider, Message, MessageRole, Usage,
};

const DEFAULT_GROQ_BASE_URL: &str = "https://api.groq.com/openai";

/// Groq API provider
#[derive(Debug)]
pub struct GroqProvider<C: HttpClientTrait> {
    client: C,
    auth_header: String,
    base_url: String,
}

impl<C: HttpClientTrait> GroqProvider<C> {
    pub fn new(client: C, api_key: impl Into<String>) -> Self {
        Self::with_base_url(client, api_key, DEFAULT_GROQ_BASE_URL)
    }

    pub fn with_base_url(
        client: C,
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        let auth_header = format!("Bearer {}", api_key.into());
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            client,
            auth_header,
            base_url,
        }
    }

    fn chat_completions_url(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url)
    }

    fn build_request(&self, model: &str, request: &CompletionRequest) -> serde_json::Value {
        let messages: Vec<WireMessage> = request
            .messages
            .iter()
            .map(WireMessage::from_domain)
            .collect();

        let mut body = serde_json::json!({
            "model": model,
            "messages": messages,
        });

        if let Some(temperature) = request.temperature {
            body["temperature"] = serde_json::json!(temperature);
        }

        if let Some(max_tokens) = request.max_tokens {
            body["max_tokens"] = serde_json::json!(max_tokens);
        }

        body
    }

    fn headers(&self) -> Vec<(&str, &str)> {
        vec![
            ("Authorization", self.auth_header.as_str()),
            ("Content-Type", "application/json"),
        ]
    }

    fn parse_response(&self, json: serde_json::Value) -> Result<CompletionResponse, DomainError> {
        let response: WireResponse = serde_json::from_value(json).map_err(|e| {
            DomainError::provider("groq", format!("Failed to parse response: {}", e))
        })?;

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| DomainError::provider("groq", "No choices in response"))?;

        let message = Message::assistant(choice.message.content.unwrap_or_default());

        let mut completion = CompletionResponse::new(response.id, response.model, message);

        if let Some(reason) = choice.finish_reason {
            completion = completion.with_finish_reason(parse_finish_reason(&reason));
        }

        if let Some(usage) = response.usage {
            completion =
                completion.with_usage(Usage::new(usage.prompt_tokens, usage.completion_tokens));
        }

        Ok(completion)
    }
}

#[async_trait]
impl<C: HttpClientTrait> LlmProvider for GroqProvider<C> {
    async fn complete(
        &self,
        model: &str,
        request: CompletionRequest,
    ) -> Result<CompletionResponse, DomainError> {
        let url = self.chat_completions_url();
        let body = self.build_request(model, &request);
        let response = self.client.post_json(&url, self.headers(), &body).await?;

        self.parse_response(response)
    }

    fn provider_name(&self) -> &'static str {
        "groq"
    }
}

fn parse_finish_reason(reason: &str) -> FinishReason {
    match reason {
        "stop" => FinishReason::Stop,
        "length" => FinishReason::Length,
        "content_filter" => FinishReason::ContentFilter,
        _ => FinishReason::Stop,
    }
}

// Wire types

#[derive(Debug, Serialize)]
struct WireMessage {
    role: String,
    content: String,
}

impl WireMessage {
    fn from_domain(message: &Message) -> Self {
        let role = match message.role {
            MessageRole::System => "system",
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
        };

        Self {
            role: role.to_string(),
            content: message.content.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct WireResponse {
    id: String,
    model: String,
    choices: Vec<WireChoice>,
    usage: Option<WireUsage>,
}

#[derive(Debug, Deserialize)]
struct WireChoice {
    message: WireResponseMessage,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WireResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WireUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::llm::http_client::mock::MockHttpClient;

    const TEST_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

    #[tokio::test]
    async fn test_groq_complete() {
        let mock_response = serde_json::json!({
            "id": "chatcmpl-123",
            "model": "llama3-8b-8192",
            "choices": [{
                "message": {
                    "role": "assistant",
                    "content": "Letters of Credit are payment guarantees."
                },
                "finish_reason": "stop"
            }],
            "usage": {
                "prompt_tokens": 42,
                "completion_tokens": 9,
                "total_tokens": 51
            }
        });

        let client = MockHttpClient::new().with_response(TEST_URL, mock_response);
        let provider = GroqProvider::new(client, "gsk-test-key");

        let request = CompletionRequest::builder()
            .user("What is a Letter of Credit?")
            .build();

        let response = provider.complete("llama3-8b-8192", request).await.unwrap();

        assert_eq!(response.id, "chatcmpl-123");
        assert_eq!(response.model, "llama3-8b-8192");
        assert_eq!(response.content(), "Letters of Credit are payment guarantees.");
        assert_eq!(response.finish_reason, Some(FinishReason::Stop));

        let usage = response.usage.unwrap();
        assert_eq!(usage.prompt_tokens, 42);
        assert_eq!(usage.total_tokens, 51);
    }

    #[tokio::test]
    async fn test_groq_error_propagates() {
        let client = MockHttpClient::new().with_error(TEST_URL, "API key invalid");
        let provider = GroqProvider::new(client, "bad-key");

        let request = CompletionRequest::builder().user("Hello").build();
        let result = provider.complete("llama3-8b-8192", request).await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_groq_custom_base_url() {
        let custom_url = "http://localhost:8080/v1/chat/completions";
        let mock_response = serde_json::json!({
            "id": "chatcmpl-local",
            "model": "llama3-8b-8192",
            "choices": [{
                "message": { "role": "assistant", "content": "local" },
                "finish_reason": "stop"
            }]
        });

        let client = MockHttpClient::new().with_response(custom_url, mock_response);
        let provider = GroqProvider::with_base_url(client, "key", "http://localhost:8080");

        let request = CompletionRequest::builder().user("ping").build();
        let response = provider.complete("llama3-8b-8192", request).await.unwrap();

        assert_eq!(response.id, "chatcmpl-local");
        assert!(response.usage.is_none());
    }
}
