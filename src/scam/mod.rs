mod prompt;
mod verdict;

pub use prompt::{SYSTEM_PROMPT, TEMPERATURE, build_prompt, sender_line};
pub use verdict::{RiskLevel, Verdict, parse_verdict};
