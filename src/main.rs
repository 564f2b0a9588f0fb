use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use qa_harness::chat::real::create_answer_client;
use qa_harness::cli::HarnessArgs;
use qa_harness::harness;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing; logs go to stderr so stdout stays reserved for
    // the confirmation line.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(
            tracing_subscriber::fmt::layer().with_writer(std::io::stderr),
        )
        .init();

    run_app().await
}

async fn run_app() -> Result<()> {
    let args = HarnessArgs::parse();

    let client = create_answer_client(&args.chat_url)?;

    let rows =
        harness::run(&args.input, &args.output, client.as_ref()).await?;
    info!("Evaluation complete: {} rows written", rows);

    println!("Answers have been saved to {}", args.output.display());
    Ok(())
}
