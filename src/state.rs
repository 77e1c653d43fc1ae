// src/state.rs
use tracing::{info, warn};

use crate::config::Config;
use crate::error::ChatError;
use crate::message::{ChatRequest, Message};
use crate::services::inference::InferenceClient;
use crate::services::transcript::Transcript;

/// Where the current turn stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnState {
    Idle,
    Sending,
}

/// Everything one chat run owns: read-only config, the transcript and the client.
pub struct ChatSession<C> {
    config: Config,
    transcript: Transcript,
    client: C,
    state: TurnState,
}

impl<C: InferenceClient> ChatSession<C> {
    pub fn new(config: Config, client: C) -> Self {
        let transcript = Transcript::new(&config.system_prompt, &config.human_name, &config.ai_name);
        info!(model = %config.model_name, context_window_size = config.context_window_size, "chat session started");
        Self { config, transcript, client, state: TurnState::Idle }
    }

    /// Run one turn: record the input, send the whole transcript, record the reply.
    ///
    /// On failure the user message stays in the transcript unanswered and goes
    /// out again with the next request.
    pub async fn send_turn(&mut self, input: &str) -> Result<&Message, ChatError> {
        self.transcript.push_user(input);
        let request = self.request();

        self.state = TurnState::Sending;
        let result = self.client.chat(&request).await;
        self.state = TurnState::Idle;

        match result {
            Ok(response) => {
                self.transcript.push_assistant(response.message);
                Ok(self.transcript.last())
            }
            Err(err) => {
                warn!(error = %err, unanswered = self.transcript.unanswered(), "chat turn failed");
                Err(err)
            }
        }
    }

    /// Payload the next send would carry.
    pub fn request(&self) -> ChatRequest {
        ChatRequest::new(&self.config.model_name, &self.transcript, self.config.context_window_size)
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn state(&self) -> TurnState {
        self.state
    }
}
