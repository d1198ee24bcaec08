use crate::domain::model::{PlaceDetails, TripPlan};
use regex::Regex;
use serde_json::Value;

/// Recover a JSON value from raw model output.
///
/// The generation service wraps structured output inconsistently depending on
/// which grounding tools are enabled, so three increasingly permissive
/// strategies run in order and the first success wins:
///
/// 1. parse the whole (trimmed) text as JSON;
/// 2. parse the contents of a fenced code block, with or without a `json` tag;
/// 3. parse the span from the first `{` to the last `}`.
///
/// The brace span is greedy across the entire text, so prose containing stray
/// braces after the real payload can poison it. Responses that matter in
/// practice are either bare JSON or fenced, which the earlier stages catch.
///
/// Returns `None` when every strategy fails; never panics.
pub fn extract_structured(text: &str) -> Option<Value> {
    let trimmed = text.trim();
    if let Ok(value) = serde_json::from_str::<Value>(trimmed) {
        return Some(value);
    }

    if let Ok(fence) = Regex::new(r"(?s)```(?:json)?\s*(.*?)```") {
        if let Some(caps) = fence.captures(text) {
            if let Ok(value) = serde_json::from_str::<Value>(caps[1].trim()) {
                return Some(value);
            }
        }
    }

    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if start >= end {
        return None;
    }
    serde_json::from_str(text[start..=end].trim()).ok()
}

/// Extract and decode a trip plan. Decoding is tolerant: missing fields fall
/// back to their defaults rather than failing the whole extraction.
pub fn extract_trip_plan(text: &str) -> Option<TripPlan> {
    let value = extract_structured(text)?;
    serde_json::from_value(value).ok()
}

/// Extract and decode place details. The name is the one required field.
pub fn extract_place_details(text: &str) -> Option<PlaceDetails> {
    let value = extract_structured(text)?;
    serde_json::from_value(value).ok()
}
