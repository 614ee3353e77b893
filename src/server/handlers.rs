use super::types::{CheckRequest, ProbeResponse};
use crate::{
    Error, Result,
    config::{self, Config},
    llm::{ChatCompletionRequest, ChatMessage, LlmClient},
    scam::{self, Verdict},
};
use axum::{body::Bytes, extract::State, http::Method, response::Json};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub llm: Arc<dyn LlmClient>,
}

/// Classifies one message as a likely scam via the completion service.
///
/// Wired for every HTTP method so that non-POST calls get the JSON 405 body;
/// everything else runs in a strict order: body validation, credential gate,
/// one remote call, verdict validation. Each failure is answered at the point
/// of detection and nothing partial is ever returned.
pub async fn scam_check(
    State(state): State<AppState>,
    method: Method,
    body: Bytes,
) -> Result<Json<Verdict>> {
    if method != Method::POST {
        return Err(Error::MethodNotAllowed);
    }

    let request = CheckRequest::from_body(&body).ok_or(Error::MissingMessage)?;

    info!(
        message_chars = request.message.chars().count(),
        has_sender = request.sender.is_some(),
        "Received scam-check request"
    );

    if state.config.llm.api_key.is_none() {
        error!("{} is missing in environment", config::API_KEY_ENV);
        return Err(Error::MissingApiKey);
    }

    let completion = state
        .llm
        .create_chat_completion(ChatCompletionRequest {
            model: state.config.llm.model.clone(),
            messages: vec![
                ChatMessage::system(scam::SYSTEM_PROMPT),
                ChatMessage::user(scam::build_prompt(
                    &request.message,
                    request.sender.as_deref(),
                )),
            ],
            temperature: scam::TEMPERATURE,
        })
        .await?;

    // An absent first choice degrades to an empty string, which fails the
    // verdict parse the same way unparseable content does.
    let content = completion.first_content().unwrap_or_default();
    let verdict = scam::parse_verdict(content)?;

    info!(risk = ?verdict.risk, "Scam check verdict produced");

    Ok(Json(verdict))
}

/// Reports whether the completion-service credential is configured. Answers
/// any method with 200; there is no error path.
pub async fn config_probe(State(state): State<AppState>) -> Json<ProbeResponse> {
    Json(ProbeResponse {
        has_key: state.config.llm.api_key.is_some(),
    })
}
