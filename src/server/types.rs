use serde::Serialize;
use serde_json::Value;

/// Body of a scam-check request.
///
/// The shape is probed by hand rather than through a `Json` extractor so a
/// missing or mistyped `message` always yields the same stable error body,
/// and an absent or unparseable request body counts as a missing message.
#[derive(Debug, Clone)]
pub struct CheckRequest {
    pub message: String,
    pub sender: Option<String>,
}

impl CheckRequest {
    pub fn from_body(body: &[u8]) -> Option<Self> {
        let value: Value = serde_json::from_slice(body).unwrap_or(Value::Null);

        let message = match value.get("message") {
            Some(Value::String(message)) if !message.is_empty() => message.clone(),
            _ => return None,
        };

        // A sender only counts when it is a non-empty string after trimming.
        let sender = value
            .get("sender")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|sender| !sender.is_empty())
            .map(str::to_string);

        Some(Self { message, sender })
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ProbeResponse {
    #[serde(rename = "hasKey")]
    pub has_key: bool,
}
