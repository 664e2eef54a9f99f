use axum::{
    Json,
    extract::{Query, State},
};
use serde_json::Value;
use uuid::Uuid;

use crate::{
    error::AppError,
    message::ChatQuery,
    services::{
        prompt::{DEFAULT_LANGUAGE, build_prompt},
        reply::{missing_keys, normalize_reply, parse_structured_reply},
    },
    state::SharedState,
};

#[tracing::instrument(name = "chat", skip_all, fields(request_id = %Uuid::new_v4()))]
pub async fn chat_handler(
    State(state): State<SharedState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Value>, AppError> {
    let query = ChatQuery::from_pairs(pairs);
    let message = query.message.as_deref().map(str::trim).unwrap_or_default();
    if message.is_empty() {
        return Err(AppError::BadRequest("Message is required".to_string()));
    }

    let language = query
        .language
        .as_deref()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .unwrap_or(DEFAULT_LANGUAGE);

    let prompt = build_prompt(message, language);

    let raw_reply = state.model.generate(&prompt).await.map_err(|e| {
        tracing::error!(error = %e, "Gemini API error");
        AppError::from(e)
    })?;
    tracing::info!(raw_reply = %raw_reply, "Raw Gemini reply");

    let cleaned = normalize_reply(&raw_reply);
    let structured = parse_structured_reply(&cleaned).map_err(|e| {
        tracing::error!(error = %e, cleaned_reply = %e.cleaned, "JSON parse error");
        AppError::from(e)
    })?;

    let missing = missing_keys(&structured);
    if !missing.is_empty() {
        tracing::warn!(?missing, "Gemini reply lacks expected keys");
    }

    tracing::info!(%language, "Chat reply relayed");
    Ok(Json(structured))
}
