// src/state.rs
use std::sync::Arc;

use crate::services::gemini::ChatModel;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub model: Arc<dyn ChatModel>,
}

impl AppState {
    pub fn new(model: Arc<dyn ChatModel>) -> Self {
        Self { model }
    }
}
