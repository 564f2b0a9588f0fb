use crate::HarnessError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::info;

/// One question paired with its expected (ground-truth) answer, as read
/// from the input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QaPair {
    pub question: String,
    pub expected_answer: String,
}

/// Reads question/expected-answer pairs from a tab-separated file.
///
/// Each line must hold exactly one question and one expected answer
/// separated by a single tab; trailing `\n` or `\r\n` is stripped before
/// splitting. Pairs are returned in file line order, with no filtering or
/// deduplication. A line whose tab count is not exactly one fails the
/// whole read with [`HarnessError::MalformedLine`].
pub fn read_qa_pairs(path: &Path) -> Result<Vec<QaPair>, HarnessError> {
    let file = File::open(path).map_err(|e| HarnessError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let reader = BufReader::new(file);

    let mut pairs = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| HarnessError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut fields = line.split('\t');
        let pair = match (fields.next(), fields.next(), fields.next()) {
            (Some(question), Some(expected), None) => QaPair {
                question: question.to_string(),
                expected_answer: expected.to_string(),
            },
            _ => {
                return Err(HarnessError::MalformedLine {
                    path: path.to_path_buf(),
                    line_number: index + 1,
                })
            }
        };
        pairs.push(pair);
    }

    info!(
        "Read {} question/answer pairs from {}",
        pairs.len(),
        path.display()
    );

    Ok(pairs)
}
