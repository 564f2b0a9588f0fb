use crate::chat::AnswerClient;
use crate::collector::collect_answers;
use crate::dataset::read_qa_pairs;
use crate::report::write_results;
use crate::HarnessError;
use std::path::Path;
use tracing::instrument;

/// Runs one full evaluation pass: read question/answer pairs from
/// `input`, ask the chat service each question in turn, and write
/// `model_answer<TAB>expected_answer` rows to `output`.
///
/// Returns the number of rows written. Any stage failure aborts the run;
/// a failure before the write stage leaves `output` untouched.
#[instrument(skip(client), err)]
pub async fn run(
    input: &Path,
    output: &Path,
    client: &dyn AnswerClient,
) -> Result<usize, HarnessError> {
    let pairs = read_qa_pairs(input)?;

    let (questions, expected_answers): (Vec<String>, Vec<String>) = pairs
        .into_iter()
        .map(|pair| (pair.question, pair.expected_answer))
        .unzip();

    let model_answers = collect_answers(client, &questions).await?;

    write_results(output, &model_answers, &expected_answers)?;

    Ok(model_answers.len())
}
