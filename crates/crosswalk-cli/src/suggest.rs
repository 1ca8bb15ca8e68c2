//! # Suggest Subcommand
//!
//! Lists additional clauses a document likely evidences, derived from the
//! `EQUIVALENT` mappings of its existing classifications.

use anyhow::{Context, Result};
use clap::Args;

use crosswalk_core::DocumentId;
use crosswalk_engine::{DocumentSuggester, DocumentSuggestion};

use crate::config::CliConfig;
use crate::dataset::FileDataset;

/// Arguments for the `crosswalk suggest` subcommand.
#[derive(Args, Debug)]
pub struct SuggestArgs {
    /// Document UUID.
    #[arg(long)]
    pub document: DocumentId,

    /// Hide suggestions the document is already classified against.
    #[arg(long)]
    pub new_only: bool,
}

/// Compute suggestions for the requested document.
pub async fn suggest(args: &SuggestArgs, config: &CliConfig) -> Result<Vec<DocumentSuggestion>> {
    let dataset = FileDataset::new(&config.data_dir);
    let suggester = DocumentSuggester::new(dataset.clone(), dataset.clone(), dataset);

    let mut suggestions = suggester
        .suggestions(&args.document)
        .await
        .with_context(|| format!("failed to compute suggestions for {}", args.document))?;
    if args.new_only {
        suggestions.retain(|s| !s.already_classified);
    }

    tracing::info!(
        document = %args.document,
        suggestions = suggestions.len(),
        "computed suggestions"
    );
    Ok(suggestions)
}

/// Execute the suggest subcommand.
///
/// Returns exit code: 0 on success.
pub async fn run_suggest(args: &SuggestArgs, config: &CliConfig) -> Result<u8> {
    let suggestions = suggest(args, config).await?;
    println!("{}", serde_json::to_string_pretty(&suggestions)?);
    Ok(0)
}
