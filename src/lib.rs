/// Public library interface for the Routine Mentor MCP server
///
/// This module exports the main server implementation and public types
/// that can be used by other applications or tests.

use std::path::PathBuf;
use thiserror::Error;

// Internal modules
mod analytics;
mod domain;
mod mcp;
mod prompts;
mod storage;
mod tools;

// Re-export public modules and types
pub use analytics::{DEFAULT_HISTORY_WINDOW_DAYS, HistoricalStats, RoutineStat, aggregate_history};
pub use domain::*;
pub use prompts::*;
pub use storage::{MentorStorage, SqliteStorage, StorageError};
pub use tools::{
    CreateRoutineParams, DayLogEntryParams, DayLogParams, FeedbackPromptParams,
    GenerationPromptParams, ListRoutinesParams, SetProfileParams, SummaryPromptParams, ToolError,
    build_feedback, build_generation, build_summary, create_routine, list_routines, log_day,
    set_profile,
};

/// Errors that can occur during server operation
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Database error: {0}")]
    Database(#[from] storage::StorageError),

    #[error("Domain validation error: {0}")]
    Domain(#[from] domain::DomainError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Main routine mentor server that implements the MCP protocol
///
/// This server manages routine data through a SQLite database and provides
/// tools for logging daily performance and assembling the prompts sent to
/// the external LLM service.
pub struct RoutineMentorServer {
    storage: SqliteStorage,
    history_window_days: u32,
}

impl RoutineMentorServer {
    /// Create a new routine mentor server with the specified database path
    ///
    /// This will initialize the SQLite database with the required schema
    /// if it doesn't already exist. `history_window_days` is how many
    /// calendar days of history feed the feedback statistics.
    pub async fn new(db_path: PathBuf, history_window_days: u32) -> Result<Self, ServerError> {
        tracing::info!(
            "Initializing Routine Mentor server with database: {:?} (history window: {} days)",
            db_path,
            history_window_days
        );

        // Initialize storage layer
        let storage = SqliteStorage::new(db_path)?;

        Ok(Self {
            storage,
            history_window_days,
        })
    }

    /// Run the MCP server, handling JSON-RPC requests over stdin/stdout
    ///
    /// This method will block until the server is shut down or an error occurs.
    pub async fn run(self) -> Result<(), ServerError> {
        tracing::info!("Starting MCP server...");

        // Test database connectivity
        let routines = self.storage.list_routines(None, true)?;
        tracing::info!(
            "Server started successfully, found {} existing routines",
            routines.len()
        );

        // Create and run the MCP server
        let mut mcp_server = mcp::McpServer::new(self);
        mcp_server.run().await?;

        Ok(())
    }

    /// Get a reference to the storage layer (useful for testing)
    pub fn storage(&self) -> &SqliteStorage {
        &self.storage
    }

    /// Number of calendar days of history the feedback statistics cover
    pub fn history_window_days(&self) -> u32 {
        self.history_window_days
    }
}
