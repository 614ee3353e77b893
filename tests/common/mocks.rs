use async_trait::async_trait;
use scam_shield::{
    Error, Result,
    llm::{ChatCompletionRequest, ChatCompletionResponse, Choice, ChoiceMessage, LlmClient},
};
use std::sync::Mutex;

pub enum MockFailure {
    Upstream { status: u16, body: String },
    Transport(String),
}

/// Mock LLM client for testing: replays scripted responses (or a scripted
/// failure) and records every request it receives.
pub struct MockLlmClient {
    responses: Mutex<Vec<ChatCompletionResponse>>,
    requests: Mutex<Vec<ChatCompletionRequest>>,
    failure: Option<MockFailure>,
}

impl MockLlmClient {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(Vec::new()),
            requests: Mutex::new(Vec::new()),
            failure: None,
        }
    }

    /// Scripts a single completion whose first choice carries `content`.
    pub fn with_content(content: impl Into<String>) -> Self {
        Self::new().add_response(response_with_content(content))
    }

    pub fn with_response(response: ChatCompletionResponse) -> Self {
        Self::new().add_response(response)
    }

    pub fn with_upstream_error(status: u16, body: impl Into<String>) -> Self {
        let mut mock = Self::new();
        mock.failure = Some(MockFailure::Upstream {
            status,
            body: body.into(),
        });
        mock
    }

    pub fn with_transport_error(message: impl Into<String>) -> Self {
        let mut mock = Self::new();
        mock.failure = Some(MockFailure::Transport(message.into()));
        mock
    }

    pub fn add_response(self, response: ChatCompletionResponse) -> Self {
        self.responses.lock().unwrap().push(response);
        self
    }

    pub fn requests(&self) -> Vec<ChatCompletionRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl Default for MockLlmClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn create_chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse> {
        self.requests.lock().unwrap().push(request);

        match &self.failure {
            Some(MockFailure::Upstream { status, body }) => {
                Err(Error::upstream(*status, body.clone()))
            }
            Some(MockFailure::Transport(message)) => Err(Error::internal(message.clone())),
            None => {
                let mut responses = self.responses.lock().unwrap();
                if responses.is_empty() {
                    return Err(Error::internal("No more mock responses available"));
                }
                Ok(responses.remove(0))
            }
        }
    }
}

pub fn response_with_content(content: impl Into<String>) -> ChatCompletionResponse {
    ChatCompletionResponse {
        choices: vec![Choice {
            message: ChoiceMessage {
                content: Some(content.into()),
            },
        }],
    }
}
