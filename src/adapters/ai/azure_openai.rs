//! Azure OpenAI adapter for chat completions.
//!
//! Implements `ChatPort` against a hosted deployment:
//! `{base}/openai/deployments/{deployment}/chat/completions?api-version={v}`
//! with the `api-key` header. The credential is redacted from every error
//! message and never logged.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::domain::DomainError;
use crate::ports::ChatPort;

/// Azure OpenAI chat-completion adapter.
pub struct AzureOpenAiAdapter {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl std::fmt::Debug for AzureOpenAiAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AzureOpenAiAdapter")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl AzureOpenAiAdapter {
    /// Create a new adapter. Fails if the credential is empty — the remote
    /// boundary must not exist without one.
    ///
    /// # Arguments
    /// * `api_base` - Resource endpoint (e.g., "https://example.openai.azure.com/")
    /// * `api_version` - API version string (e.g., "2024-02-15-preview")
    /// * `deployment` - Deployment name (e.g., "gpt-4")
    /// * `api_key` - Opaque session credential
    pub fn new(
        api_base: &str,
        api_version: &str,
        deployment: &str,
        api_key: String,
    ) -> Result<Self, DomainError> {
        if api_key.trim().is_empty() {
            return Err(DomainError::MissingCredential);
        }
        let endpoint = format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            api_base.trim_end_matches('/'),
            deployment,
            api_version
        );
        Ok(Self {
            client: reqwest::Client::new(),
            endpoint,
            api_key,
        })
    }

    /// Strip the credential from text that may end up in logs or on screen.
    /// Some client stacks embed request headers in error chains.
    fn redact(&self, text: &str) -> String {
        text.replace(&self.api_key, "***")
    }
}

/// Chat completion request body. The deployment (model) is addressed in the
/// URL, not the payload.
#[derive(Serialize)]
struct ChatRequest {
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: MessageContent,
}

#[derive(Deserialize)]
struct MessageContent {
    content: String,
}

#[async_trait::async_trait]
impl ChatPort for AzureOpenAiAdapter {
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        temperature: f32,
    ) -> Result<String, DomainError> {
        info!(
            system_len = system_prompt.len(),
            user_len = user_prompt.len(),
            temperature,
            "sending chat completion request"
        );

        let request = ChatRequest {
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: system_prompt.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: user_prompt.to_string(),
                },
            ],
            temperature,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .header("api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| DomainError::Chat(self.redact(&format!("HTTP request failed: {}", e))))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            let snippet: String = text.chars().take(200).collect();
            warn!(status = %status, "chat API returned error");
            return Err(DomainError::Chat(self.redact(&format!(
                "API error {}: {}",
                status, snippet
            ))));
        }

        let chat_response: ChatResponse = response.json().await.map_err(|e| {
            DomainError::Chat(self.redact(&format!("Failed to parse API response: {}", e)))
        })?;

        let content = chat_response
            .choices
            .first()
            .map(|c| c.message.content.trim().to_string())
            .ok_or_else(|| DomainError::Chat("No response choices returned".to_string()))?;

        debug!(reply_len = content.len(), "received chat completion");

        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_credential_is_rejected() {
        let err = AzureOpenAiAdapter::new(
            "https://example.openai.azure.com/",
            "2024-02-15-preview",
            "gpt-4",
            "   ".to_string(),
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::MissingCredential));
    }

    #[test]
    fn endpoint_is_built_from_base_version_and_deployment() {
        let adapter = AzureOpenAiAdapter::new(
            "https://example.openai.azure.com/",
            "2024-02-15-preview",
            "gpt-4",
            "secret-key".to_string(),
        )
        .unwrap();
        assert_eq!(
            adapter.endpoint,
            "https://example.openai.azure.com/openai/deployments/gpt-4/chat/completions?api-version=2024-02-15-preview"
        );
    }

    #[test]
    fn redact_strips_the_credential() {
        let adapter = AzureOpenAiAdapter::new(
            "https://example.openai.azure.com",
            "2024-02-15-preview",
            "gpt-4",
            "sk-very-secret".to_string(),
        )
        .unwrap();
        let msg = adapter.redact("error: header api-key: sk-very-secret rejected");
        assert!(!msg.contains("sk-very-secret"));
        assert!(msg.contains("***"));
    }

    #[test]
    fn response_body_parses() {
        let json = r#"{"choices":[{"message":{"role":"assistant","content":"Final article text."}}]}"#;
        let parsed: ChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.choices[0].message.content, "Final article text.");
    }
}
