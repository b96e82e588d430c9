//! Output formatting for CLI commands
//!
//! Provides utilities for formatting command output in human-readable
//! or JSON formats. Supports colored output (respects NO_COLOR env var).

use crate::cli::OutputFormat;
use crate::core::types::{BulkSummary, Company};

/// Color scheme for CLI output
pub mod colors {
    use colored::{ColoredString, Colorize};

    /// Style for labels/headers
    pub fn label(s: &str) -> ColoredString {
        s.bold()
    }

    /// Style for document keys
    pub fn doc_id(s: &str) -> ColoredString {
        s.cyan()
    }

    /// Style for numbers/counts
    pub fn number(s: &str) -> ColoredString {
        s.yellow()
    }

    /// Style for success messages
    pub fn success(s: &str) -> ColoredString {
        s.green()
    }

    /// Style for warning messages
    pub fn warning(s: &str) -> ColoredString {
        s.yellow()
    }

    /// Style for error messages
    pub fn error(s: &str) -> ColoredString {
        s.red().bold()
    }

    /// Style for dim/secondary text
    pub fn dim(s: &str) -> ColoredString {
        s.dimmed()
    }
}

/// Format a salary with thousands separators
pub fn format_salary(salary: i64) -> String {
    let digits = salary.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if salary < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// One-line human summary of a company
pub fn format_company(company: &Company) -> String {
    format!(
        "{}  age {}  {}  {} yrs  salary {}",
        colors::label(&company.name),
        colors::number(&company.age.to_string()),
        company.designation,
        colors::number(&company.experience.to_string()),
        colors::number(&format_salary(company.salary)),
    )
}

/// Print a list of companies
pub fn print_companies(companies: &[Company], format: OutputFormat) {
    match format {
        OutputFormat::Human => {
            if companies.is_empty() {
                println!("{}", colors::dim("No companies found"));
                return;
            }
            for (rank, company) in companies.iter().enumerate() {
                println!("{:>3}. {}", rank + 1, format_company(company));
            }
            println!(
                "\n{} {}",
                colors::number(&companies.len().to_string()),
                colors::dim("result(s)")
            );
        }
        OutputFormat::Json => print_output(&companies, format),
    }
}

/// Print the outcome of a bulk write
pub fn print_bulk_summary(summary: &BulkSummary, format: OutputFormat) {
    match format {
        OutputFormat::Human => {
            for item in &summary.items {
                let id = item.id.as_deref().unwrap_or("-");
                match &item.error {
                    None => println!("  {} {}", colors::success("indexed"), colors::doc_id(id)),
                    Some(reason) => println!("  {} {}: {}", colors::error("rejected"), id, reason),
                }
            }
            if summary.all_succeeded() {
                print_success(&format!("Saved {} record(s)", summary.succeeded()));
            } else {
                print_warning(&format!(
                    "{} of {} record(s) rejected",
                    summary.failed(),
                    summary.items.len()
                ));
            }
        }
        OutputFormat::Json => print_output(summary, format),
    }
}

/// Print output based on format
pub fn print_output<T: serde::Serialize + ?Sized>(data: &T, format: OutputFormat) {
    match format {
        OutputFormat::Human => {
            // Human format should be handled by the caller
            // This is a fallback that just prints JSON
            if let Ok(json) = serde_json::to_string_pretty(data) {
                println!("{json}");
            }
        }
        OutputFormat::Json => {
            if let Ok(json) = serde_json::to_string_pretty(data) {
                println!("{json}");
            }
        }
    }
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{}", colors::success(message));
}

/// Print a warning message
pub fn print_warning(message: &str) {
    eprintln!("{}: {}", colors::warning("Warning"), message);
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{}: {}", colors::error("Error"), message);
}

/// Print a header/title
pub fn print_header(title: &str) {
    println!("{}", colors::label(title));
}
