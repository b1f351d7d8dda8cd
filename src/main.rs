//! Demo binary: summarizes the bundled example documents and prints
//! side-by-side comparisons with statistics.
//! Run with: `cargo run`

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;

use condense::corpus::{self, ExampleDocument};
use condense::llm::{BartClient, SummaryModel};
use condense::summarize::{
    ChunkedSummarizer, LengthPreset, RomanianHeuristic, SummarizerConfig, SummaryOutcome,
};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("demo failed: {err:#}");
            ExitCode::from(1)
        }
    }
}

fn run() -> anyhow::Result<()> {
    let rt = tokio::runtime::Runtime::new().context("failed to create runtime")?;
    rt.block_on(run_demos())
}

async fn run_demos() -> anyhow::Result<()> {
    println!();
    println!("{}", "=".repeat(80));
    println!("condense — abstractive summarization demo (facebook/bart-large-cnn)");
    println!("{}", "=".repeat(80));
    println!();
    println!("Loading the model can take a moment on the first call...");
    println!();

    let model = Arc::new(BartClient::from_env().context("failed to build model client")?);
    let handle: Arc<dyn SummaryModel> = model.clone();
    let summarizer = ChunkedSummarizer::new(handle, SummarizerConfig::default())
        .context("failed to build summarizer")?
        .with_detector(Box::new(
            RomanianHeuristic::new().context("failed to build language heuristic")?,
        ));

    if let Err(err) = model.warm_up().await {
        eprintln!("warm-up failed ({err}); the first summary may be slow");
    }

    for example in corpus::EXAMPLES {
        let outcome = summarizer
            .summarize(example.text, example.preset.budget(), true)
            .await
            .with_context(|| format!("failed to summarize '{}'", example.title))?;
        print_comparison(example, &outcome);
    }

    // Same text at every preset, to show how the budget shapes the output.
    let custom = &corpus::EXAMPLES[corpus::EXAMPLES.len() - 1];
    println!("{}", "=".repeat(80));
    println!("SAME TEXT, DIFFERENT LENGTHS: {}", custom.title.to_uppercase());
    println!("{}", "=".repeat(80));
    for preset in [LengthPreset::Short, LengthPreset::Medium, LengthPreset::Long] {
        let outcome = summarizer
            .summarize(custom.text, preset.budget(), true)
            .await
            .with_context(|| format!("failed at preset '{}'", preset.as_str()))?;
        println!();
        println!(
            "{} summary ({} words):",
            preset.as_str().to_uppercase(),
            outcome.stats.summary_words
        );
        println!("{}", "-".repeat(80));
        println!("{}", outcome.summary);
    }
    println!();

    Ok(())
}

/// Print a visual comparison between the original text and its summary.
fn print_comparison(example: &ExampleDocument, outcome: &SummaryOutcome) {
    println!("{}", "=".repeat(80));
    println!("EXAMPLE: {}", example.title.to_uppercase());
    println!("{}", "=".repeat(80));

    println!();
    println!("STATISTICS:");
    println!("   - Original words:    {}", outcome.stats.original_words);
    println!("   - Summary words:     {}", outcome.stats.summary_words);
    println!(
        "   - Compression:       {:.1}%",
        outcome.stats.compression_ratio * 100.0
    );
    println!("   - Strategy:          {}", outcome.stats.strategy);
    if let Some(note) = &outcome.note {
        println!("   - Note:              {note}");
    }

    println!();
    println!("ORIGINAL ({} words):", outcome.stats.original_words);
    println!("{}", "-".repeat(80));
    println!("{}", example.text);

    println!();
    println!("SUMMARY ({} words):", outcome.stats.summary_words);
    println!("{}", "-".repeat(80));
    println!("{}", outcome.summary);
    println!();
}
