use anyhow::Result;
use async_trait::async_trait;
use std::sync::Mutex;

use crate::chat::{AnswerClient, AnswerResponse};

/// One scripted reply held by the fake client.
#[derive(Debug)]
enum QueuedReply {
    /// Reply whose `answer` field is set to the given text
    Answer(String),
    /// Reply without an `answer` field
    Empty,
    /// A failed call with the given error message
    Error(String),
}

/// A fake implementation of the answer client for testing
///
/// This fake client allows tests to control exactly what replies are
/// returned, without making any network calls. It provides a builder
/// pattern for configuration and tracks received questions for
/// verification in tests.
///
/// # Example
///
/// ```
/// use qa_harness::chat::AnswerClient;
/// use qa_harness::chat::fake::FakeAnswerClient;
///
/// #[tokio::main]
/// async fn main() -> anyhow::Result<()> {
///     // Create a fake client with a predetermined reply
///     let client = FakeAnswerClient::new().with_answer("4");
///
///     // Call the fake client as you would the real one
///     let response = client.answer("What is 2+2?").await?;
///     assert_eq!(response.answer.as_deref(), Some("4"));
///
///     // Assert on what the client received
///     let questions = client.questions.lock().unwrap();
///     assert_eq!(questions.as_slice(), ["What is 2+2?"]);
///     Ok(())
/// }
/// ```
pub struct FakeAnswerClient {
    replies: Mutex<Vec<QueuedReply>>,
    // Track received questions for verification in tests
    pub questions: Mutex<Vec<String>>,
}

impl Default for FakeAnswerClient {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeAnswerClient {
    pub fn new() -> Self {
        Self {
            replies: Mutex::new(vec![]),
            questions: Mutex::new(vec![]),
        }
    }

    /// Queue a reply whose `answer` field is set to the given text
    pub fn with_answer(self, answer: &str) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push(QueuedReply::Answer(answer.to_string()));
        self
    }

    /// Queue multiple answers to be returned in sequence
    pub fn with_answers(self, answers: Vec<&str>) -> Self {
        {
            let mut replies = self.replies.lock().unwrap();
            for answer in answers {
                replies.push(QueuedReply::Answer(answer.to_string()));
            }
        }
        self
    }

    /// Queue a reply that carries no `answer` field
    pub fn with_empty_response(self) -> Self {
        self.replies.lock().unwrap().push(QueuedReply::Empty);
        self
    }

    /// Queue a call that fails with the given error message
    pub fn with_error(self, message: &str) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push(QueuedReply::Error(message.to_string()));
        self
    }
}

#[async_trait]
impl AnswerClient for FakeAnswerClient {
    async fn answer(
        &self,
        question: &str,
    ) -> Result<AnswerResponse, anyhow::Error> {
        // Store the question for later verification
        self.questions.lock().unwrap().push(question.to_string());

        let mut replies = self.replies.lock().unwrap();
        let reply = if replies.is_empty() {
            QueuedReply::Answer("Fake default answer".to_string())
        } else {
            replies.remove(0)
        };

        match reply {
            QueuedReply::Answer(text) => Ok(AnswerResponse {
                answer: Some(text),
            }),
            QueuedReply::Empty => Ok(AnswerResponse { answer: None }),
            QueuedReply::Error(message) => Err(anyhow::anyhow!(message)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fake_client_replies_in_sequence(
    ) -> Result<(), anyhow::Error> {
        let client = FakeAnswerClient::new()
            .with_answer("First answer")
            .with_answer("Second answer");

        // First call should return "First answer"
        let response1 = client.answer("first question").await?;
        assert_eq!(response1.answer.as_deref(), Some("First answer"));

        // Second call should return "Second answer"
        let response2 = client.answer("second question").await?;
        assert_eq!(response2.answer.as_deref(), Some("Second answer"));

        // Third call should return the default answer
        let response3 = client.answer("third question").await?;
        assert_eq!(response3.answer.as_deref(), Some("Fake default answer"));

        Ok(())
    }

    #[tokio::test]
    async fn test_with_answers_queues_in_order() -> Result<(), anyhow::Error>
    {
        let client =
            FakeAnswerClient::new().with_answers(vec!["one", "two"]);

        assert_eq!(
            client.answer("q1").await?.answer.as_deref(),
            Some("one")
        );
        assert_eq!(
            client.answer("q2").await?.answer.as_deref(),
            Some("two")
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_empty_response_has_no_answer() -> Result<(), anyhow::Error>
    {
        let client = FakeAnswerClient::new().with_empty_response();

        let response = client.answer("any question").await?;
        assert_eq!(response.answer, None);

        Ok(())
    }

    #[tokio::test]
    async fn test_error_reply_fails_the_call() {
        let client =
            FakeAnswerClient::new().with_error("service unavailable");

        let result = client.answer("any question").await;
        assert!(result.is_err());
        assert_eq!(
            result.err().unwrap().to_string(),
            "service unavailable"
        );
    }

    #[tokio::test]
    async fn test_question_tracking() {
        let client = FakeAnswerClient::new().with_answer("Test answer");

        let _ = client.answer("What is 2+2?").await.unwrap();

        let questions = client.questions.lock().unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0], "What is 2+2?");
    }
}
