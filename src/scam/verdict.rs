use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    High,
    Medium,
    Low,
}

/// The structured assessment relayed to the caller, and nothing else: no
/// upstream metadata, token counts, or raw content travel with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub risk: RiskLevel,
    pub summary: String,
    pub reason: String,
    pub advice: String,
}

const REQUIRED_FIELDS: [&str; 4] = ["risk", "summary", "reason", "advice"];

/// Parses the model's reply into a [`Verdict`].
///
/// The reply must be a bare JSON object carrying all four fields as
/// non-empty strings. Unparseable text is malformed; parseable text with an
/// absent, empty, or non-string field is incomplete; a `risk` value outside
/// the enum is malformed. No partial verdict is ever produced.
pub fn parse_verdict(content: &str) -> Result<Verdict> {
    let value: Value = serde_json::from_str(content).map_err(|_| {
        error!("Failed to parse AI JSON: {}", content);
        Error::malformed(content)
    })?;

    let missing: Vec<&str> = REQUIRED_FIELDS
        .iter()
        .copied()
        .filter(|field| !matches!(value.get(field), Some(Value::String(s)) if !s.is_empty()))
        .collect();
    if !missing.is_empty() {
        error!("AI response missing fields: {}", value);
        return Err(Error::incomplete(missing.join(", ")));
    }

    serde_json::from_value(value.clone()).map_err(|_| {
        error!("AI response out of contract: {}", value);
        Error::malformed(value.to_string())
    })
}
