//! Config command - show current configuration

use crate::cli::output::print_header;
use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    pub config_file: Option<String>,
    pub elasticsearch: EngineConfig,
    pub search: SearchConfig,
}

#[derive(Debug, Serialize)]
pub struct EngineConfig {
    pub url: String,
    pub index: String,
    pub timeout_sec: u64,
}

#[derive(Debug, Serialize)]
pub struct SearchConfig {
    pub timeout: String,
    pub page_size: usize,
}

/// Execute the config command
pub async fn execute(
    _args: ConfigArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = &services.config;

    let config_file = std::env::var("COMPANY_SEARCH_CONFIG").ok().or_else(|| {
        crate::core::config::Config::user_config_file()
            .filter(|path| path.exists())
            .map(|path| path.to_string_lossy().into_owned())
    });

    let response = ConfigResponse {
        config_file,
        elasticsearch: EngineConfig {
            url: config.elasticsearch.base_url(),
            index: config.elasticsearch.index.clone(),
            timeout_sec: config.elasticsearch.timeout_sec,
        },
        search: SearchConfig {
            timeout: config.search.timeout_value(),
            page_size: config.search.page_size,
        },
    };

    match format {
        OutputFormat::Human => {
            print_header("Configuration:");
            println!(
                "  config_file: {}",
                response.config_file.as_deref().unwrap_or("(defaults)")
            );
            println!("  elasticsearch:");
            println!("    url: {}", response.elasticsearch.url);
            println!("    index: {}", response.elasticsearch.index);
            println!("    timeout_sec: {}", response.elasticsearch.timeout_sec);
            println!("  search:");
            println!("    timeout: {}", response.search.timeout);
            println!("    page_size: {}", response.search.page_size);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
