use crate::chat::AnswerClient;
use crate::HarnessError;
use std::time::Instant;
use tracing::{debug, info};

/// Asks the chat service every question in order and collects the model
/// answers, one awaited call at a time.
///
/// Answers come back in the same order as `questions`. A missing `answer`
/// field in a response is recorded as an empty string. The first failed
/// call aborts the run with [`HarnessError::Collaborator`] carrying the
/// zero-based index of the question that failed; no later questions are
/// asked.
pub async fn collect_answers(
    client: &dyn AnswerClient,
    questions: &[String],
) -> Result<Vec<String>, HarnessError> {
    info!("Collecting answers for {} questions", questions.len());

    let mut answers = Vec::with_capacity(questions.len());
    for (index, question) in questions.iter().enumerate() {
        let start_time = Instant::now();
        let response = client
            .answer(question)
            .await
            .map_err(|e| HarnessError::Collaborator { index, source: e })?;
        let duration_ms = start_time.elapsed().as_millis() as i64;

        let answer = response.answer.unwrap_or_default();
        debug!(
            "Question {} answered in {} ms ({} bytes)",
            index + 1,
            duration_ms,
            answer.len()
        );
        answers.push(answer);
    }

    info!("Collected {} answers", answers.len());
    Ok(answers)
}
