//! Record commands - save, get, update, delete

use crate::cli::output::{colors, print_bulk_summary, print_output, print_success};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use crate::core::types::{Company, CompanyUpdate};
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the save command
#[derive(Args, Debug)]
pub struct SaveArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub age: i32,

    #[arg(long)]
    pub designation: String,

    /// Years of experience
    #[arg(long)]
    pub experience: i32,

    #[arg(long)]
    pub salary: i64,
}

/// Arguments for the get command
#[derive(Args, Debug)]
pub struct GetArgs {
    /// Document key
    pub id: String,
}

/// Arguments for the update command
///
/// Only the flags that are given are changed.
#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Document key
    pub id: String,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub age: Option<i32>,

    #[arg(long)]
    pub designation: Option<String>,

    #[arg(long)]
    pub experience: Option<i32>,

    #[arg(long)]
    pub salary: Option<i64>,
}

/// Arguments for the delete command
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Document key
    pub id: String,
}

/// Result of a single-document write
#[derive(Debug, Serialize)]
pub struct WriteOutput {
    pub id: String,
    pub result: String,
}

impl From<UpdateArgs> for CompanyUpdate {
    fn from(args: UpdateArgs) -> Self {
        Self {
            name: args.name,
            age: args.age,
            designation: args.designation,
            experience: args.experience,
            salary: args.salary,
        }
    }
}

/// Execute the save command
pub async fn execute_save(
    args: SaveArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let company = Company::new(
        args.name,
        args.age,
        args.designation,
        args.experience,
        args.salary,
    );

    let summary = services.company.save(&[company]).await?;
    print_bulk_summary(&summary, format);

    if !summary.all_succeeded() {
        return Err("Record rejected by the search engine".into());
    }

    Ok(())
}

/// Execute the get command
pub async fn execute_get(
    args: GetArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let source = services.company.read(&args.id).await?;

    match format {
        OutputFormat::Human => {
            println!("{} {}", colors::label("Document"), colors::doc_id(&args.id));
            match serde_json::from_str::<Company>(source.get()) {
                Ok(company) => {
                    println!("  name:        {}", company.name);
                    println!("  age:         {}", company.age);
                    println!("  designation: {}", company.designation);
                    println!("  experience:  {}", company.experience);
                    println!("  salary:      {}", company.salary);
                }
                // Not a well-formed company; show what is stored
                Err(_) => println!("{}", source.get()),
            }
        }
        OutputFormat::Json => println!("{}", source.get()),
    }

    Ok(())
}

/// Execute the update command
pub async fn execute_update(
    args: UpdateArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let id = args.id.clone();
    let update = CompanyUpdate::from(args);
    if !update.has_updates() {
        return Err(
            "Nothing to update: pass at least one of --name, --age, --designation, --experience, --salary"
                .into(),
        );
    }

    let written = services.company.update(&id, &update).await?;
    let output = WriteOutput {
        id: written.id,
        result: written.result,
    };

    match format {
        OutputFormat::Human => {
            print_success(&format!("Updated {} ({})", output.id, output.result))
        }
        OutputFormat::Json => print_output(&output, format),
    }

    Ok(())
}

/// Execute the delete command
pub async fn execute_delete(
    args: DeleteArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = services.company.delete(&args.id).await?;

    let output = WriteOutput {
        id: args.id,
        result,
    };

    match format {
        OutputFormat::Human => {
            if output.result == "not_found" {
                println!(
                    "{} {}",
                    colors::doc_id(&output.id),
                    colors::dim("not found, nothing deleted")
                );
            } else {
                print_success(&format!("Deleted {} ({})", output.id, output.result));
            }
        }
        OutputFormat::Json => print_output(&output, format),
    }

    Ok(())
}
