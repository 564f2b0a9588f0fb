use crate::chat::{AnswerClient, AnswerResponse};
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;
use url::Url;

/// JSON body posted to the chat service for each question.
#[derive(Debug, Serialize)]
struct QuestionRequest<'a> {
    question: &'a str,
}

// A real implementation of the answer client, backed by the chat service's
// HTTP endpoint.
pub struct HttpAnswerClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl HttpAnswerClient {
    /// Creates a client for the given endpoint URL.
    ///
    /// The URL is validated up front so a bad `--chat-url` fails at startup
    /// rather than on the first question. No request timeout is configured:
    /// the run waits as long as the service takes to answer.
    pub fn new(chat_url: &str) -> Result<Self> {
        let endpoint = Url::parse(chat_url).map_err(|e| {
            anyhow::anyhow!("Invalid chat service URL '{}': {}", chat_url, e)
        })?;

        Ok(Self {
            http: reqwest::Client::new(),
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

/// Creates the answer client used by the harness binary.
pub fn create_answer_client(
    chat_url: &str,
) -> Result<Arc<dyn AnswerClient>> {
    Ok(Arc::new(HttpAnswerClient::new(chat_url)?))
}

#[async_trait]
impl AnswerClient for HttpAnswerClient {
    async fn answer(
        &self,
        question: &str,
    ) -> Result<AnswerResponse, anyhow::Error> {
        debug!("Sending question to chat service at {}", self.endpoint);

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&QuestionRequest { question })
            .send()
            .await
            .context("Failed to send request to chat service")?;

        // Get status code before consuming response with text()
        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|e| {
                format!("Could not read error response: {}", e)
            });
            return Err(anyhow::anyhow!(
                "Chat service returned error ({}): {}",
                status,
                error_text
            ));
        }

        let response_text = response
            .text()
            .await
            .context("Failed to read chat service response")?;
        debug!("Received response from chat service: {}", response_text);

        let parsed: AnswerResponse = serde_json::from_str(&response_text)
            .context("Failed to parse chat service response as JSON")?;

        Ok(parsed)
    }
}
