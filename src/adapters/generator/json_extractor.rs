//! Extracting a roadmap document from raw generator text.
//!
//! Text-completion backends wrap JSON in markdown fences or surround it
//! with prose. Every generator adapter funnels raw output through
//! [`parse_roadmap`] so the cleanup rules live in one place.

use crate::domain::diagnosis::Roadmap;
use crate::ports::GenerationError;

/// Pulls the JSON payload out of raw generator text.
///
/// Tries, in order: a fenced ```json block, any fenced block, the
/// outermost brace pair, and finally the trimmed text itself.
pub fn extract_json_payload(raw: &str) -> &str {
    if let Some(start) = raw.find("```") {
        let body = &raw[start + 3..];
        let body = body.strip_prefix("json").unwrap_or(body);
        if let Some(end) = body.find("```") {
            return body[..end].trim();
        }
    }

    if let (Some(open), Some(close)) = (raw.find('{'), raw.rfind('}')) {
        if open < close {
            return raw[open..=close].trim();
        }
    }

    raw.trim()
}

/// Parses raw generator output into a roadmap document.
///
/// # Errors
///
/// Returns [`GenerationError::InvalidOutput`] when no well-formed
/// roadmap JSON can be recovered from the text.
pub fn parse_roadmap(raw: &str) -> Result<Roadmap, GenerationError> {
    serde_json::from_str(extract_json_payload(raw))
        .map_err(|e| GenerationError::InvalidOutput(e.to_string()))
}
