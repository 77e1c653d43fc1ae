// src/message.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::services::transcript::Transcript;

/// Who authored a message. Roles the server invents are kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
    #[serde(untagged)]
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self { role, content: content.into() }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}

/// Body of one `POST` to the inference endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub stream: bool,
    pub context_window_size: u32,
}

impl ChatRequest {
    /// Snapshot of the whole transcript. Streaming is never requested.
    pub fn new(model: impl Into<String>, transcript: &Transcript, context_window_size: u32) -> Self {
        Self {
            model: model.into(),
            messages: transcript.messages().to_vec(),
            stream: false,
            context_window_size,
        }
    }
}

/// Decoded reply. Only `message` is required; the rest is informational.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    pub message: Message,
    #[serde(default)]
    pub done: bool,
    #[serde(default)]
    pub total_duration: Option<u64>,
    #[serde(default)]
    pub load_duration: Option<u64>,
    #[serde(default)]
    pub prompt_eval_count: Option<u64>,
    #[serde(default)]
    pub prompt_eval_duration: Option<u64>,
    #[serde(default)]
    pub eval_count: Option<u64>,
    #[serde(default)]
    pub eval_duration: Option<u64>,
}

impl ChatResponse {
    pub fn from_message(message: Message) -> Self {
        Self {
            model: None,
            created_at: None,
            message,
            done: true,
            total_duration: None,
            load_duration: None,
            prompt_eval_count: None,
            prompt_eval_duration: None,
            eval_count: None,
            eval_duration: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn roles_serialize_lowercase() {
        let msg = Message::assistant("hi");
        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(value, json!({"role": "assistant", "content": "hi"}));
    }

    #[test]
    fn unknown_role_is_kept_verbatim() {
        let msg: Message = serde_json::from_str(r#"{"role":"tool","content":"x"}"#).unwrap();
        assert_eq!(msg.role, Role::Other("tool".to_string()));
        let back = serde_json::to_value(&msg).unwrap();
        assert_eq!(back["role"], "tool");
    }

    #[test]
    fn request_uses_wire_field_names() {
        let transcript = Transcript::new("be nice", "Bob", "Ava");
        let req = ChatRequest::new("m1", &transcript, 1000);
        let value = serde_json::to_value(&req).unwrap();

        assert_eq!(value["model"], "m1");
        assert_eq!(value["stream"], false);
        assert_eq!(value["context_window_size"], 1000);
        assert_eq!(value["messages"][0]["role"], "system");

        let decoded: ChatRequest = serde_json::from_value(value).unwrap();
        assert_eq!(decoded, req);
    }

    #[test]
    fn full_ollama_response_decodes() {
        let body = json!({
            "model": "llama3",
            "created_at": "2024-05-01T12:30:45.123456Z",
            "message": {"role": "assistant", "content": "hi"},
            "done": true,
            "done_reason": "stop",
            "total_duration": 5191566416u64,
            "load_duration": 2154458,
            "prompt_eval_count": 26,
            "prompt_eval_duration": 383809000,
            "eval_count": 298,
            "eval_duration": 4799921000u64
        });
        let resp: ChatResponse = serde_json::from_value(body).unwrap();
        assert_eq!(resp.message, Message::assistant("hi"));
        assert!(resp.done);
        assert_eq!(resp.eval_count, Some(298));
        assert!(resp.created_at.is_some());
    }

    #[test]
    fn metadata_is_optional_but_message_is_not() {
        let resp: ChatResponse =
            serde_json::from_str(r#"{"message":{"role":"assistant","content":"ok"}}"#).unwrap();
        assert_eq!(resp.message.content, "ok");
        assert!(!resp.done);
        assert_eq!(resp.total_duration, None);

        let missing = serde_json::from_str::<ChatResponse>(r#"{"model":"m1","done":true}"#);
        assert!(missing.is_err());
    }
}
