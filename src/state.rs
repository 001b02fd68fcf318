// src/state.rs
use std::sync::Arc;

use crate::services::anthropic::ChatCompletion;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub llm: Arc<dyn ChatCompletion>,
}

impl AppState {
    pub fn new(llm: Arc<dyn ChatCompletion>) -> Self {
        Self { llm }
    }
}
