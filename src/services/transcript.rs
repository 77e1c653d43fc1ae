// src/services/transcript.rs
use crate::message::{Message, Role};

/// Ordered conversation history sent with every request.
///
/// Always starts with exactly one system message. Entries are only ever
/// appended; nothing is trimmed even when the history outgrows the
/// model's context window, the server is left to truncate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    /// Start a transcript holding only the system prompt with both names in it.
    pub fn new(system_prompt: &str, human_name: &str, ai_name: &str) -> Self {
        let content = format!("{system_prompt} Your name is {ai_name}. My name is {human_name}.");
        Self { messages: vec![Message::system(content)] }
    }

    // Append what the user typed. Empty input is still a message.
    pub fn push_user(&mut self, content: impl Into<String>) -> usize {
        self.messages.push(Message::user(content));
        self.messages.len()
    }

    // Append the server's reply untouched, whatever role it claims.
    pub fn push_assistant(&mut self, message: Message) -> usize {
        self.messages.push(message);
        self.messages.len()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn system(&self) -> &Message {
        &self.messages[0]
    }

    pub fn last(&self) -> &Message {
        &self.messages[self.messages.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Never true: the system message is always present.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Number of user messages that have no assistant reply after them.
    pub fn unanswered(&self) -> usize {
        self.messages
            .iter()
            .rev()
            .take_while(|m| m.role == Role::User)
            .count()
    }
}
