use crate::chat::DEFAULT_CHAT_URL;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the QA evaluation harness
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct HarnessArgs {
    /// Path to the tab-separated question/expected-answer file
    #[arg(long, default_value = "questions_and_answers.txt")]
    pub input: PathBuf,

    /// Path to write model-answer/expected-answer rows to
    #[arg(long, default_value = "answers.txt")]
    pub output: PathBuf,

    /// Chat service answer endpoint
    #[arg(long, default_value = DEFAULT_CHAT_URL, env = "CHAT_URL")]
    pub chat_url: String,
}
