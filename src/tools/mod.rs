/// MCP tools for routine tracking and prompt generation
///
/// This module contains all the MCP tools that external clients (like Claude)
/// can call to manage routines, log days, and assemble LLM prompts.

pub mod create;
pub mod feedback;
pub mod generate;
pub mod list;
pub mod log;
pub mod profile;
pub mod summarize;

// Re-export tool functions for easy access
pub use create::*;
pub use feedback::*;
pub use generate::*;
pub use list::*;
pub use log::*;
pub use profile::*;
pub use summarize::*;

use thiserror::Error;
use crate::domain::DomainError;
use crate::storage::StorageError;

/// Errors that can occur while executing a tool
#[derive(Error, Debug)]
pub enum ToolError {
    #[error("Validation error: {0}")]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("Invalid parameter: {0}")]
    InvalidParams(String),
}
