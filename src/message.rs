// src/message.rs
use serde::{Deserialize, Serialize};

/// Query string of `GET /chat`.
#[derive(Debug, Default)]
pub struct ChatQuery {
    pub message: Option<String>,
    pub language: Option<String>,
}

impl ChatQuery {
    /// Build from raw query pairs. A repeated key keeps its first value and
    /// unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "message" => &mut query.message,
                "language" => &mut query.language,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }
}


#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
