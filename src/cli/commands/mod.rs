//! CLI command implementations
//!
//! Each command module handles argument parsing and execution for a specific CLI command.
//! Command names match the HTTP operations.

pub mod completions;
pub mod config;
pub mod index;
pub mod record;
pub mod search;

// Re-export argument types for use in mod.rs
pub use completions::CompletionsArgs;
pub use config::ConfigArgs;
pub use index::{IndexArgs, SeedArgs};
pub use record::{DeleteArgs, GetArgs, SaveArgs, UpdateArgs};
pub use search::{FilterArgs, RangeArgs, SearchAllArgs};
