//! Company search HTTP server entry point
//!
//! Starts the REST API server for company records.

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use company_search::core::config::Config;
use company_search::core::services::Services;
use company_search::http;

#[derive(Parser, Debug)]
#[command(name = "company-search")]
#[command(about = "HTTP API for company records stored in Elasticsearch")]
#[command(version)]
struct Args {
    /// Configuration file path (overrides COMPANY_SEARCH_CONFIG)
    #[arg(short, long)]
    config: Option<String>,

    /// Host to bind to
    #[arg(long, env = "COMPANY_SEARCH_HOST")]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "COMPANY_SEARCH_PORT")]
    port: Option<u16>,

    /// Elasticsearch host
    #[arg(long, env = "ELASTICSEARCH_HOST")]
    es_host: Option<String>,

    /// Elasticsearch port
    #[arg(long, env = "ELASTICSEARCH_PORT")]
    es_port: Option<u16>,

    /// Emit logs as JSON lines
    #[arg(long)]
    log_json: bool,
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "company_search=info,tower_http=debug".into());

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

fn load_config(args: &Args) -> company_search::Result<Config> {
    let mut config = match &args.config {
        Some(path) => {
            let mut config = Config::from_file(path)?;
            config.merge_env();
            config
        }
        None => Config::load()?,
    };

    // Command-line flags win over file and environment
    if let Some(host) = &args.host {
        config.server.host = host.clone();
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(host) = &args.es_host {
        config.elasticsearch.host = host.clone();
    }
    if let Some(port) = args.es_port {
        config.elasticsearch.port = port;
    }
    config.log.json |= args.log_json;

    config.validate()?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = load_config(&args)?;

    init_tracing(config.log.json);

    tracing::info!("Starting company search service");
    tracing::info!("Version: {}", env!("CARGO_PKG_VERSION"));

    config.log_config();

    // One engine client for the whole process
    let services = Arc::new(Services::new(config.clone())?);

    let app = http::app(services);

    // Bind to address and start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Listening on {}", addr);
    tracing::info!("Service ready - Health check at http://{}/health", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
