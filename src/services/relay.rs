// src/services/relay.rs
use crate::error::AppError;
use crate::services::anthropic::{ChatCompletion, ContentBlock, LlmError, ModelReply};

pub const NON_TEXT_FALLBACK: &str = "Sorry, I didnt get that. Please retype your response.";

/// Validates one user message, asks the model once and returns the reply text.
pub async fn relay_message(llm: &dyn ChatCompletion, message: Option<&str>) -> Result<String, AppError> {
    let message = match message {
        Some(m) if !m.trim().is_empty() => m,
        _ => {
            tracing::debug!("rejecting blank message");
            return Err(AppError::empty_message());
        }
    };

    let reply = llm.complete(message).await?;
    Ok(extract_reply(reply)?)
}

/// Takes the first content block if it is text, otherwise the canned fallback.
pub fn extract_reply(reply: ModelReply) -> Result<String, LlmError> {
    match reply.content.into_iter().next() {
        Some(ContentBlock::Text { text }) => Ok(text),
        Some(ContentBlock::Other) => {
            tracing::warn!("first content block is not text, answering with fallback");
            Ok(NON_TEXT_FALLBACK.to_string())
        }
        None => Err(LlmError::EmptyReply),
    }
}
