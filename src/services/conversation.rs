// src/services/conversation.rs
use chrono::{DateTime, Local};

use crate::services::relay_client::{RelayError, RelayTransport};

pub const MAX_INPUT_CHARS: usize = 1000;
pub const APOLOGY: &str = "Sorry! There seems to be an error. Please try again.";
const EMPTY_HINT: &str = "Say hi!";
const TYPING: &str = "Claude is typing...";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageRole {
    User,
    Assistant,
}

impl MessageRole {
    fn label(self) -> &'static str {
        match self {
            MessageRole::User => "You",
            MessageRole::Assistant => "Claude",
        }
    }
}

#[derive(Clone, Debug)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
    pub timestamp: DateTime<Local>,
}

impl Message {
    fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self { role, content: content.into(), timestamp: Local::now() }
    }
}

/// In-memory chat state: the append-only history, the draft being typed and
/// whether a reply is still outstanding.
#[derive(Debug, Default)]
pub struct ConversationView {
    messages: Vec<Message>,
    draft: String,
    pending: bool,
}

impl ConversationView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Replaces the draft, keeping at most `MAX_INPUT_CHARS` characters.
    pub fn set_draft(&mut self, text: &str) {
        self.draft = text.chars().take(MAX_INPUT_CHARS).collect();
    }

    pub fn can_submit(&self) -> bool {
        !self.pending && !self.draft.trim().is_empty()
    }

    /// Starts a submission cycle. Returns the text to send, or `None` when the
    /// draft is blank or a reply is already pending; in that case nothing changes.
    pub fn begin_submit(&mut self) -> Option<String> {
        if !self.can_submit() {
            return None;
        }

        let text = self.draft.trim().to_string();
        self.draft.clear();
        self.messages.push(Message::new(MessageRole::User, text.clone()));
        self.pending = true;
        Some(text)
    }

    /// Ends a submission cycle with exactly one assistant message.
    pub fn finish_submit(&mut self, outcome: Result<String, RelayError>) {
        let content = match outcome {
            Ok(reply) => reply,
            Err(err) => {
                tracing::error!(error = %err, "relay call failed");
                APOLOGY.to_string()
            }
        };
        self.messages.push(Message::new(MessageRole::Assistant, content));
        self.pending = false;
    }

    /// Runs one full cycle against `transport`. Returns false if the
    /// submission was rejected and no call was made.
    pub async fn submit(&mut self, transport: &dyn RelayTransport) -> bool {
        let Some(text) = self.begin_submit() else {
            return false;
        };
        let outcome = transport.send(&text).await;
        self.finish_submit(outcome);
        true
    }

    pub fn render(&self) -> String {
        let mut lines = Vec::with_capacity(self.messages.len() + 2);

        if self.messages.is_empty() {
            lines.push(EMPTY_HINT.to_string());
        }
        lines.extend(self.messages.iter().map(|message| {
            format!(
                "{} ({}): {}",
                message.role.label(),
                message.timestamp.format("%-I:%M %p"),
                message.content
            )
        }));
        if self.pending {
            lines.push(TYPING.to_string());
        }
        lines.push(format!("{}/{} chars", self.draft.chars().count(), MAX_INPUT_CHARS));
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_is_capped() {
        let mut view = ConversationView::new();
        view.set_draft(&"é".repeat(MAX_INPUT_CHARS + 20));
        assert_eq!(view.draft().chars().count(), MAX_INPUT_CHARS);
    }

    #[test]
    fn blank_draft_is_rejected() {
        let mut view = ConversationView::new();
        view.set_draft("   \t ");
        assert!(!view.can_submit());
        assert_eq!(view.begin_submit(), None);
        assert!(view.messages().is_empty());
        assert!(!view.is_pending());
    }

    #[test]
    fn begin_appends_trimmed_user_message() {
        let mut view = ConversationView::new();
        view.set_draft("  Hello  ");
        assert_eq!(view.begin_submit().as_deref(), Some("Hello"));
        assert_eq!(view.messages().len(), 1);
        assert_eq!(view.messages()[0].role, MessageRole::User);
        assert_eq!(view.messages()[0].content, "Hello");
        assert!(view.draft().is_empty());
        assert!(view.is_pending());
    }

    #[test]
    fn render_shows_hint_typing_and_counter() {
        let mut view = ConversationView::new();
        assert!(view.render().starts_with("Say hi!"));

        view.set_draft("Hello");
        view.begin_submit();
        view.set_draft("abc");
        let rendered = view.render();
        assert!(rendered.contains("You ("));
        assert!(rendered.contains("): Hello"));
        assert!(rendered.contains("Claude is typing..."));
        assert!(rendered.ends_with("3/1000 chars"));
        assert!(!rendered.contains("Say hi!"));
    }

    #[test]
    fn render_is_one_line_per_item() {
        let mut view = ConversationView::new();
        assert_eq!(view.render().lines().collect::<Vec<_>>(), vec!["Say hi!", "0/1000 chars"]);

        view.set_draft("Hello");
        view.begin_submit();
        view.finish_submit(Ok("Hi there".into()));
        let rendered = view.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("You (") && lines[0].ends_with("): Hello"));
        assert!(lines[1].starts_with("Claude (") && lines[1].ends_with("): Hi there"));
        assert_eq!(lines[2], "0/1000 chars");
    }
}
