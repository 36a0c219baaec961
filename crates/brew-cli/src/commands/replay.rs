use anyhow::{Context, Result};
use brew_core::{ChatMessage, MessageOrigin, OrderSynchronizer, SyncOutcome, render_review};
use brew_infrastructure::load_transcript;
use colored::Colorize;
use std::path::Path;

use super::utils::load_context;

pub fn run(config: Option<&Path>, transcript_path: &Path, step: bool) -> Result<()> {
    let (app_config, catalog) = load_context(config)?;
    let transcript = load_transcript(transcript_path)
        .with_context(|| format!("Failed to read transcript {}", transcript_path.display()))?;

    let mut sync = OrderSynchronizer::new(catalog);

    if step {
        for end in 1..=transcript.len() {
            let message = &transcript[end - 1];
            let outcome = sync.on_transcript_changed(&transcript[..end]);
            print_step(message, outcome, &sync);
        }
    } else {
        sync.on_transcript_changed(&transcript);
    }

    println!("{}", serde_json::to_string_pretty(sync.state().as_ref())?);
    println!(
        "{}",
        render_review(sync.catalog(), sync.state(), &app_config.currency_symbol).bold()
    );
    Ok(())
}

fn print_step(message: &ChatMessage, outcome: SyncOutcome, sync: &OrderSynchronizer) {
    let speaker = match message.origin {
        MessageOrigin::Human => "customer".bright_green(),
        MessageOrigin::Agent => "barista".bright_blue(),
        MessageOrigin::System => "system".dimmed(),
    };
    println!("{}: {}", speaker, message.text);

    if outcome.is_updated() {
        let highlighted: Vec<&str> = sync
            .selected_entries()
            .map(|entry| entry.name.as_str())
            .collect();
        println!("  {} {}", "→".yellow(), highlighted.join(", "));
    }
}
