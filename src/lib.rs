use std::path::PathBuf;

pub mod chat;
pub mod cli;
pub mod collector;
pub mod dataset;
pub mod harness;
pub mod report;

pub mod test_utils;

pub use dataset::QaPair;

/// Errors that abort an evaluation run.
///
/// Every stage fails fast: the first error stops the run and nothing
/// after the failing step executes.
#[derive(Debug)]
pub enum HarnessError {
    /// Reading the input file or writing the output file failed.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// An input line did not contain exactly one tab separator.
    MalformedLine { path: PathBuf, line_number: usize },
    /// The chat service call for one question failed. `index` is the
    /// zero-based position of the question in the input file.
    Collaborator { index: usize, source: anyhow::Error },
    /// The number of collected answers does not match the number of
    /// expected answers.
    LengthMismatch { answers: usize, expected: usize },
}

impl std::fmt::Display for HarnessError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            HarnessError::Io { path, source } => {
                write!(f, "I/O error on {}: {}", path.display(), source)
            }
            HarnessError::MalformedLine { path, line_number } => {
                write!(
                    f,
                    "{}:{}: expected exactly one tab separator",
                    path.display(),
                    line_number
                )
            }
            HarnessError::Collaborator { index, source } => {
                write!(
                    f,
                    "Chat service failed on question {}: {}",
                    index + 1,
                    source
                )
            }
            HarnessError::LengthMismatch { answers, expected } => {
                write!(
                    f,
                    "Collected {} answers for {} expected answers",
                    answers, expected
                )
            }
        }
    }
}

impl std::error::Error for HarnessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HarnessError::Io { source, .. } => Some(source),
            HarnessError::Collaborator { source, .. } => {
                Some(source.as_ref())
            }
            _ => None,
        }
    }
}
