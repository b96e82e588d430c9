//! Company CLI - operator tool for the company index
//!
//! Talks to Elasticsearch directly using the same configuration as the
//! HTTP service.
//!
//! # Examples
//!
//! ```bash
//! # Create the index and load the demonstration records
//! company-cli seed --ensure-index
//!
//! # Companies aged 20 to 30
//! company-cli search-range 20 30
//!
//! # Exact match
//! company-cli filter --age 27 --designation Designation2
//!
//! # Raise a salary
//! company-cli update <id> --salary 150000
//! ```

use clap::Parser;
use company_search::cli::output::print_error;
use company_search::cli::{run, Cli};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
