/// Framing given to the model ahead of every classification.
pub const SYSTEM_PROMPT: &str = "You are a scam-detection assistant helping seniors avoid fraud. Always err on the side of caution.";

/// Low temperature keeps the reply literal and close to the requested JSON.
pub const TEMPERATURE: f32 = 0.1;

pub fn sender_line(sender: Option<&str>) -> String {
    match sender {
        Some(sender) => format!("Sender: \"{sender}\"."),
        None => "Sender: not provided.".to_string(),
    }
}

/// Builds the classification instruction block around the caller's message.
///
/// The message text is embedded literally; the instructions pin down the
/// judgment criteria and the exact four-field JSON reply shape.
pub fn build_prompt(message: &str, sender: Option<&str>) -> String {
    format!(
        r#"You are an AI assistant that evaluates whether messages are likely scams, especially targeting older adults.

Here is the sender and message:

{sender_line}

Message:
"{message}"

You must:
- Consider the content AND the sender.
- Look for signs of phishing, impersonation of banks, PayPal, Amazon, IRS, tech support, or family.
- Be conservative (better to call something risky than safe).
- Explain things in very simple language suitable for a senior.

Respond in EXACTLY this JSON format, and only JSON, no extra text:

{{
  "risk": "high" | "medium" | "low",
  "summary": "one sentence summary of what the message is about",
  "reason": "short explanation in plain language suitable for a senior",
  "advice": "one or two short sentences telling the senior what to do next"
}}"#,
        sender_line = sender_line(sender),
    )
}
