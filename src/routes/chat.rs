use axum::{Json, body::Bytes, extract::State};

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    services::relay::relay_message,
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    body: Bytes,
) -> Result<Json<ChatResponse>, AppError> {
    // Decoded whatever the Content-Type; an unreadable body is a handling
    // failure, not a blank message.
    let payload: ChatRequest =
        serde_json::from_slice(&body).map_err(|e| AppError::Internal(e.to_string()))?;

    let response = relay_message(state.llm.as_ref(), payload.message.as_deref()).await?;

    Ok(Json(ChatResponse { response }))
}
