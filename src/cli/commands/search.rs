//! Search commands - search-all, search-range, filter

use crate::cli::output::print_companies;
use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use std::sync::Arc;

/// Arguments for the search-all command
#[derive(Args, Debug)]
pub struct SearchAllArgs {}

/// Arguments for the search-range command
#[derive(Args, Debug)]
pub struct RangeArgs {
    /// Lowest age, inclusive
    #[arg(allow_negative_numbers = true)]
    pub from: i32,

    /// Highest age, inclusive
    #[arg(allow_negative_numbers = true)]
    pub to: i32,
}

/// Arguments for the filter command
#[derive(Args, Debug)]
pub struct FilterArgs {
    /// Exact age
    #[arg(long)]
    pub age: i32,

    /// Exact designation (case-sensitive)
    #[arg(long)]
    pub designation: String,
}

/// Execute the search-all command
pub async fn execute_all(
    _args: SearchAllArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let companies = services.company.search_all().await?;
    print_companies(&companies, format);
    Ok(())
}

/// Execute the search-range command
pub async fn execute_range(
    args: RangeArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let companies = services.company.search_range(args.from, args.to).await?;
    print_companies(&companies, format);
    Ok(())
}

/// Execute the filter command
pub async fn execute_filter(
    args: FilterArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let companies = services
        .company
        .filter(args.age, &args.designation)
        .await?;
    print_companies(&companies, format);
    Ok(())
}
