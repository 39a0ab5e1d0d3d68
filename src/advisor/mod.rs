//! AI advisory chat.
//!
//! The chat keeps a transcript that opens with the advisor's greeting. Each
//! question becomes one request to a [`TextGenerator`]. Only one request may
//! be in flight; it carries an id, and a reply whose id no longer matches the
//! pending request (because it was cancelled) is dropped.
//!
//! Failures never escape this module: they are logged and shown in the
//! transcript as a fixed apology.

/// Gemini HTTP client
pub mod gemini;

use crate::errors::Result;
use async_trait::async_trait;
use tracing::{debug, info, warn};

pub use gemini::GeminiClient;

/// Reply shown when the service call fails.
pub const ERROR_REPLY: &str = "Error al conectar con el Asesor Virtual. Por favor, intenta más tarde.";

/// Reply shown when the service answers with no text.
pub const EMPTY_REPLY: &str = "Lo siento, no pude procesar tu consulta en este momento.";

/// Anything that turns a prompt into generated text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generates a reply to `prompt`.
    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// Author of a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    /// The person asking
    User,
    /// The advisor
    Advisor,
}

/// One transcript entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    /// Who wrote it
    pub sender: Sender,
    /// Message body
    pub text: String,
}

impl ChatMessage {
    fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            sender,
            text: text.into(),
        }
    }
}

/// Identity of one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(u64);

/// A question accepted by the chat and waiting for its reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest {
    /// Identity to hand back to [`AdvisorChat::complete`]
    pub id: RequestId,
    /// Trimmed question text
    pub prompt: String,
}

/// Transcript plus the single in-flight request.
#[derive(Debug, Clone)]
pub struct AdvisorChat {
    transcript: Vec<ChatMessage>,
    pending: Option<RequestId>,
    next_request: u64,
}

impl AdvisorChat {
    /// Starts a transcript with the advisor's greeting.
    #[must_use]
    pub fn new(greeting: &str) -> Self {
        Self {
            transcript: vec![ChatMessage::new(Sender::Advisor, greeting)],
            pending: None,
            next_request: 1,
        }
    }

    /// Every message so far, oldest first.
    #[must_use]
    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    /// True while a request is in flight.
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    /// Accepts a question: appends it to the transcript and marks the chat busy.
    ///
    /// Returns `None` for a blank message or while another request is pending.
    pub fn begin(&mut self, message: &str) -> Option<PendingRequest> {
        let prompt = message.trim();
        if prompt.is_empty() {
            return None;
        }
        if self.is_busy() {
            debug!("Advisor busy, question rejected");
            return None;
        }

        let id = RequestId(self.next_request);
        self.next_request += 1;
        self.pending = Some(id);
        self.transcript.push(ChatMessage::new(Sender::User, prompt));
        Some(PendingRequest {
            id,
            prompt: prompt.to_string(),
        })
    }

    /// Delivers the outcome of request `id`.
    ///
    /// Returns `false` and leaves the transcript alone if `id` is not the
    /// pending request.
    pub fn complete(&mut self, id: RequestId, result: Result<String>) -> bool {
        if self.pending != Some(id) {
            debug!(request = id.0, "Discarding stale advisor reply");
            return false;
        }
        self.pending = None;

        let reply = match result {
            Ok(text) if text.trim().is_empty() => EMPTY_REPLY.to_string(),
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "Advisor request failed");
                ERROR_REPLY.to_string()
            }
        };
        self.transcript.push(ChatMessage::new(Sender::Advisor, reply));
        true
    }

    /// Abandons the pending request; its reply, if it ever arrives, is discarded.
    pub fn cancel(&mut self) -> Option<RequestId> {
        let cancelled = self.pending.take();
        if let Some(id) = cancelled {
            info!(request = id.0, "Advisor request cancelled");
        }
        cancelled
    }

    /// Cancels request `id` if it is still the pending one.
    ///
    /// Returns `false` if `id` already completed or was superseded.
    pub fn cancel_request(&mut self, id: RequestId) -> bool {
        if self.pending != Some(id) {
            return false;
        }
        self.cancel().is_some()
    }

    /// Asks one question and waits for the reply.
    ///
    /// Returns the advisor's reply, or `None` if the question was blank or
    /// the chat was busy.
    pub async fn send(&mut self, generator: &dyn TextGenerator, message: &str) -> Option<&ChatMessage> {
        let request = self.begin(message)?;
        let result = generator.generate(&request.prompt).await;
        self.complete(request.id, result);
        self.transcript.last()
    }
}
