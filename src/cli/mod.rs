//! CLI adapter for company search
//!
//! Operator command-line interface over the same company operations
//! the HTTP API exposes. This module is parallel to `http/` - both
//! depend on `core/` but not on each other.
//!
//! # Architecture
//!
//! ```text
//!              +------------------+
//!              |     core/        |
//!              |  (domain logic)  |
//!              +--------+---------+
//!                       |
//!          +------------+------------+
//!          |                         |
//!          v                         v
//! +------------------+      +------------------+
//! |      http/       |      |      cli/        |
//! | (axum adapter)   |      | (clap adapter)   |
//! +------------------+      +------------------+
//! ```

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

/// Company Search - operator tool
///
/// Manage the company index and query company records directly,
/// without going through the HTTP service.
#[derive(Parser, Debug)]
#[command(name = "company-cli")]
#[command(version)]
#[command(about = "Company index operator tool", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Elasticsearch host (overrides config and ELASTICSEARCH_HOST)
    #[arg(long, global = true)]
    pub es_host: Option<String>,

    /// Elasticsearch port (overrides config and ELASTICSEARCH_PORT)
    #[arg(long, global = true)]
    pub es_port: Option<u16>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Available CLI commands
///
/// Command names match the HTTP operations.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the company index if it does not exist
    #[command(name = "ensure-index")]
    EnsureIndex(commands::IndexArgs),

    /// Index the two demonstration records
    Seed(commands::SeedArgs),

    /// Save a company record
    Save(commands::SaveArgs),

    /// Show the stored document for a key
    Get(commands::GetArgs),

    /// Update fields of an existing record
    Update(commands::UpdateArgs),

    /// Delete a record by key
    Delete(commands::DeleteArgs),

    /// List every company
    #[command(name = "search-all")]
    SearchAll(commands::SearchAllArgs),

    /// Companies whose age lies in a range (first page)
    #[command(name = "search-range")]
    SearchRange(commands::RangeArgs),

    /// Companies matching age and designation exactly (first page)
    Filter(commands::FilterArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  company-cli completions bash > ~/.local/share/bash-completion/completions/company-cli
    ///   zsh:   company-cli completions zsh > ~/.zfunc/_company-cli
    ///   fish:  company-cli completions fish > ~/.config/fish/completions/company-cli.fish
    Completions(commands::CompletionsArgs),
}

/// Run the CLI with the provided arguments
pub async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::config::Config;
    use crate::core::services::Services;
    use std::sync::Arc;

    // Handle completions command early (doesn't need services)
    if let Commands::Completions(args) = cli.command {
        return commands::completions::execute(args);
    }

    // Load configuration
    let mut config = Config::load()?;
    if let Some(host) = cli.es_host {
        config.elasticsearch.host = host;
    }
    if let Some(port) = cli.es_port {
        config.elasticsearch.port = port;
    }
    config.validate()?;

    // Create services
    let services = Arc::new(Services::new(config)?);

    // Execute command
    match cli.command {
        Commands::EnsureIndex(args) => commands::index::execute(args, &services, cli.format).await,
        Commands::Seed(args) => commands::index::execute_seed(args, &services, cli.format).await,
        Commands::Save(args) => commands::record::execute_save(args, &services, cli.format).await,
        Commands::Get(args) => commands::record::execute_get(args, &services, cli.format).await,
        Commands::Update(args) => {
            commands::record::execute_update(args, &services, cli.format).await
        }
        Commands::Delete(args) => {
            commands::record::execute_delete(args, &services, cli.format).await
        }
        Commands::SearchAll(args) => {
            commands::search::execute_all(args, &services, cli.format).await
        }
        Commands::SearchRange(args) => {
            commands::search::execute_range(args, &services, cli.format).await
        }
        Commands::Filter(args) => {
            commands::search::execute_filter(args, &services, cli.format).await
        }
        Commands::ShowConfig(args) => commands::config::execute(args, &services, cli.format).await,
        Commands::Completions(_) => unreachable!(), // Handled above
    }
}
