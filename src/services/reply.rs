// src/services/reply.rs
use serde_json::Value;
use thiserror::Error;

use super::prompt::EXPECTED_KEYS;

const OPENING_FENCE: &str = "```json";
const CLOSING_FENCE: &str = "```";

/// The model text could not be parsed as JSON.
#[derive(Debug, Error)]
#[error("reply is not valid JSON: {source}")]
pub struct MalformedResponse {
    #[source]
    pub source: serde_json::Error,
    pub cleaned: String,
}

/// Strip a ```` ```json ```` / ```` ``` ```` fence around the reply and trim it.
///
/// Repeats until nothing changes, so the output never starts or ends with a
/// fence marker and a second call is a no-op.
pub fn normalize_reply(raw: &str) -> String {
    let mut current = raw.trim();
    loop {
        let mut next = current;
        if let Some(rest) = next.strip_prefix(OPENING_FENCE) {
            next = rest.trim_start();
        }
        if let Some(rest) = next.strip_suffix(CLOSING_FENCE) {
            next = rest.trim_end();
        }
        if next.len() == current.len() {
            return current.to_string();
        }
        current = next;
    }
}

/// Parse the cleaned reply. Any JSON value passes through untouched.
pub fn parse_structured_reply(cleaned: &str) -> Result<Value, MalformedResponse> {
    serde_json::from_str(cleaned).map_err(|source| MalformedResponse {
        source,
        cleaned: cleaned.to_string(),
    })
}

/// Expected keys that are absent from the reply. Non-objects miss all of them.
pub fn missing_keys(value: &Value) -> Vec<&'static str> {
    EXPECTED_KEYS
        .iter()
        .copied()
        .filter(|key| value.get(key).is_none())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn fenced_reply_is_unwrapped() {
        let raw = "```json\n{\"possibleConditions\":[\"tension\"]}\n```";
        assert_eq!(normalize_reply(raw), "{\"possibleConditions\":[\"tension\"]}");
    }

    #[test]
    fn fence_without_newlines_is_unwrapped() {
        assert_eq!(normalize_reply("```json{\"a\":1}```"), "{\"a\":1}");
        assert_eq!(normalize_reply("```json   {\"a\":1}   ```"), "{\"a\":1}");
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert_eq!(normalize_reply("  \n{\"a\":1}\n\t "), "{\"a\":1}");
        assert_eq!(normalize_reply("\n ```json\n{\"a\":1}\n```\n"), "{\"a\":1}");
    }

    #[test]
    fn only_one_side_fenced() {
        assert_eq!(normalize_reply("```json\n[1, 2]"), "[1, 2]");
        assert_eq!(normalize_reply("[1, 2]\n```"), "[1, 2]");
    }

    #[test]
    fn interior_backticks_are_kept() {
        let raw = "```json\n{\"tip\":\"use ``` carefully\"}\n```";
        assert_eq!(normalize_reply(raw), "{\"tip\":\"use ``` carefully\"}");
    }

    #[test]
    fn plain_reply_is_unchanged() {
        assert_eq!(normalize_reply("{\"a\":1}"), "{\"a\":1}");
        assert_eq!(normalize_reply(""), "");
    }

    #[test]
    fn normalize_is_idempotent() {
        let inputs = [
            "```json\n{\"a\":1}\n```",
            "```json```json {} ``` ```",
            " ```json {} ```",
            "```json",
            "``````",
            "```json\n```",
            "not json at all",
            "   ",
        ];
        for raw in inputs {
            let once = normalize_reply(raw);
            assert_eq!(normalize_reply(&once), once, "input: {raw:?}");
        }
    }

    #[test]
    fn valid_json_passes_through() {
        let value = json!({
            "possibleConditions": ["tension"],
            "earlySigns": "dull ache",
            "remedies": ["rest", "water"],
            "extra": {"nested": true},
        });
        let text = serde_json::to_string(&value).unwrap();
        assert_eq!(parse_structured_reply(&text).unwrap(), value);
    }

    #[test]
    fn invalid_json_keeps_cleaned_text() {
        let err = parse_structured_reply("Sorry, I can't help with that.").unwrap_err();
        assert_eq!(err.cleaned, "Sorry, I can't help with that.");

        assert!(parse_structured_reply("").is_err());
        assert!(parse_structured_reply("{\"a\":").is_err());
    }

    #[test]
    fn missing_keys_reports_absent_fields() {
        let value = json!({"possibleConditions": [], "causes": "x"});
        assert_eq!(
            missing_keys(&value),
            vec!["earlySigns", "remedies", "yogaTips", "precautions"]
        );
        assert_eq!(missing_keys(&json!([1, 2])).len(), 6);
    }
}
