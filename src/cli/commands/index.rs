//! Index commands - ensure-index and seed

use crate::cli::output::{colors, print_bulk_summary, print_output};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use std::sync::Arc;

/// Arguments for the ensure-index command
#[derive(Args, Debug)]
pub struct IndexArgs {}

/// Arguments for the seed command
#[derive(Args, Debug)]
pub struct SeedArgs {
    /// Create the index first if it is missing
    #[arg(long)]
    pub ensure_index: bool,
}

/// Execute the ensure-index command
pub async fn execute(
    _args: IndexArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let status = services.company.ensure_index().await?;

    match format {
        OutputFormat::Human => {
            if status.created {
                println!(
                    "{} index {}",
                    colors::success("Created"),
                    colors::label(&status.index)
                );
            } else {
                println!(
                    "Index {} {}",
                    colors::label(&status.index),
                    colors::dim("already exists")
                );
            }
        }
        OutputFormat::Json => print_output(&status, format),
    }

    Ok(())
}

/// Execute the seed command
pub async fn execute_seed(
    args: SeedArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    if args.ensure_index {
        services.company.ensure_index().await?;
    }

    let summary = services.company.seed().await?;
    print_bulk_summary(&summary, format);

    if !summary.all_succeeded() {
        return Err(format!("{} record(s) rejected", summary.failed()).into());
    }

    Ok(())
}
