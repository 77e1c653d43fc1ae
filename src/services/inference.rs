// src/services/inference.rs
use std::time::Duration;

use tracing::debug;

use crate::error::ChatError;
use crate::message::{ChatRequest, ChatResponse};

/// One blocking round trip to a model server.
pub trait InferenceClient {
    fn chat(&self, request: &ChatRequest) -> impl Future<Output = Result<ChatResponse, ChatError>> + Send;
}

/// Talks to an Ollama-style `/api/chat` endpoint with streaming turned off.
#[derive(Clone, Debug)]
pub struct OllamaClient {
    http: reqwest::Client,
    endpoint: String,
}

impl OllamaClient {
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> Result<Self, ChatError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl InferenceClient for OllamaClient {
    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, ChatError> {
        debug!(
            endpoint = %self.endpoint,
            model = %request.model,
            messages = request.messages.len(),
            "sending chat request"
        );

        let response = self.http.post(&self.endpoint).json(request).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            return Err(ChatError::Status {
                status,
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        let reply: ChatResponse = serde_json::from_slice(&body)?;
        debug!(
            model = reply.model.as_deref().unwrap_or_default(),
            done = reply.done,
            total_duration = reply.total_duration,
            prompt_eval_count = reply.prompt_eval_count,
            eval_count = reply.eval_count,
            eval_duration = reply.eval_duration,
            "received chat response"
        );
        Ok(reply)
    }
}
