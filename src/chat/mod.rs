pub mod fake;
pub mod real;

use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;

/// Default endpoint of the chat service that answers questions
pub const DEFAULT_CHAT_URL: &str = "http://localhost:8000/chat";

/// One response from the question-answering service.
///
/// The service may attach source documents, timings or session data to its
/// reply; only the `answer` field is consumed and everything else is
/// dropped on deserialization. A reply without an `answer` field is valid
/// and maps to `None`.
#[derive(Debug, Clone, Deserialize)]
pub struct AnswerResponse {
    #[serde(default)]
    pub answer: Option<String>,
}

/// A trait that abstracts the question-answering service for testing
///
/// This trait provides a common interface for the real HTTP-backed client
/// and the fake client, making it easy to swap between them in tests.
///
/// Implementation notes:
/// - Uses `async-trait` to enable async methods in traits
/// - Calls are awaited one at a time by the collector, so implementations
///   never see overlapping requests from a single run
#[async_trait]
pub trait AnswerClient: Send + Sync {
    /// Submits one question to the service and returns its reply
    ///
    /// # Arguments
    /// * `question` - The question text, exactly as read from the input
    ///   file
    ///
    /// # Returns
    /// The service's reply, or an error if the call failed outright
    async fn answer(
        &self,
        question: &str,
    ) -> Result<AnswerResponse, anyhow::Error>;
}
