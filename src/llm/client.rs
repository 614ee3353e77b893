use super::types::*;
use crate::{Error, Result, config::LlmConfig};
use async_trait::async_trait;
use tracing::{debug, error};

#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn create_chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse>;
}

pub struct OpenAiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OpenAiClient {
    pub fn new(config: &LlmConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone().unwrap_or_default(),
        }
    }

    fn completions_url(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url)
    }
}

#[async_trait]
impl LlmClient for OpenAiClient {
    async fn create_chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse> {
        debug!(
            "Creating chat completion with {} messages",
            request.messages.len()
        );

        let response = self
            .http
            .post(self.completions_url())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!("Chat completion request failed: {}", e);
                Error::internal(format!("chat completion request failed: {e}"))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("OpenAI error: {} {}", status, body);
            return Err(Error::upstream(status.as_u16(), body));
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            error!("Failed to decode chat completion body: {}", e);
            Error::malformed(e.to_string())
        })?;

        debug!(
            "Received chat completion response with {} choices",
            completion.choices.len()
        );

        Ok(completion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn test_config(base_url: &str) -> LlmConfig {
        LlmConfig {
            base_url: base_url.to_string(),
            model: "gpt-4.1-mini".to_string(),
            api_key: Some("test-api-key".to_string()),
        }
    }

    #[test]
    fn completions_url_joins_the_fixed_path() {
        let client = OpenAiClient::new(&test_config("https://api.openai.com"));
        assert_eq!(
            client.completions_url(),
            "https://api.openai.com/v1/chat/completions"
        );
    }

    #[test]
    fn trailing_slash_in_base_url_is_tolerated() {
        let client = OpenAiClient::new(&test_config("http://localhost:8999/"));
        assert_eq!(
            client.completions_url(),
            "http://localhost:8999/v1/chat/completions"
        );
    }

    #[test]
    fn absent_key_becomes_an_empty_bearer_token() {
        let mut config = test_config("https://api.openai.com");
        config.api_key = None;

        let client = OpenAiClient::new(&config);
        assert_eq!(client.api_key, "");
    }
}
