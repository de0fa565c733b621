/// MCP server implementation that handles JSON-RPC communication
///
/// This module implements the actual MCP server that:
/// 1. Reads JSON-RPC requests from stdin
/// 2. Processes tool calls against the routine mentor
/// 3. Sends JSON-RPC responses to stdout

use serde::Serialize;
use serde_json::{Value, json};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, error, info};

use crate::mcp::protocol::*;
use crate::tools::{self, ToolError};
use crate::{RoutineMentorServer, ServerError};

/// MCP server that handles communication with the client
pub struct McpServer {
    /// The underlying routine mentor server
    mentor: RoutineMentorServer,
    /// Whether the server has been initialized
    initialized: bool,
}

impl McpServer {
    /// Create a new MCP server
    pub fn new(mentor: RoutineMentorServer) -> Self {
        Self {
            mentor,
            initialized: false,
        }
    }

    /// Run the MCP server, handling JSON-RPC over stdin/stdout
    pub async fn run(&mut self) -> Result<(), ServerError> {
        info!("Starting MCP server, waiting for JSON-RPC requests...");

        let stdin = tokio::io::stdin();
        let mut reader = BufReader::new(stdin);
        let mut stdout = tokio::io::stdout();

        let mut line = String::new();

        loop {
            line.clear();

            // Read one line from stdin
            match reader.read_line(&mut line).await {
                Ok(0) => {
                    info!("MCP server shutting down (stdin closed)");
                    break;
                }
                Ok(_) => {
                    // Process the line
                    if let Some(response) = self.process_line(&line) {
                        let response_str = serde_json::to_string(&response)?;

                        // Write response + newline
                        stdout.write_all(response_str.as_bytes()).await?;
                        stdout.write_all(b"\n").await?;
                        stdout.flush().await?;

                        debug!("Sent response: {}", response_str);
                    }
                }
                Err(e) => {
                    error!("Failed to read from stdin: {}", e);
                    break;
                }
            }
        }

        Ok(())
    }

    /// Process a single line of JSON-RPC input
    fn process_line(&mut self, line: &str) -> Option<JsonRpcResponse> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        debug!("Processing request: {}", line);

        // Parse JSON-RPC request
        let request: JsonRpcRequest = match serde_json::from_str(line) {
            Ok(req) => req,
            Err(e) => {
                error!("Failed to parse JSON-RPC request: {}", e);
                return Some(JsonRpcResponse::error(
                    json!(null),
                    error_codes::PARSE_ERROR,
                    format!("Invalid JSON: {}", e),
                    None,
                ));
            }
        };

        Some(self.handle_request(request))
    }

    /// Handle a JSON-RPC request
    fn handle_request(&mut self, request: JsonRpcRequest) -> JsonRpcResponse {
        match request.method.as_str() {
            "initialize" => self.handle_initialize(request),
            "initialized" => {
                self.initialized = true;
                JsonRpcResponse::success(request.id, json!(null))
            }
            "tools/list" => self.handle_tools_list(request),
            "tools/call" => self.handle_tools_call(request),
            _ => JsonRpcResponse::error(
                request.id,
                error_codes::METHOD_NOT_FOUND,
                format!("Method '{}' not found", request.method),
                None,
            ),
        }
    }

    /// Handle MCP initialization request
    fn handle_initialize(&mut self, request: JsonRpcRequest) -> JsonRpcResponse {
        info!("MCP client connected");

        let result = InitializeResult {
            protocol_version: MCP_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: false,
                }),
            },
            server_info: ServerInfo {
                name: "Routine Mentor MCP".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        };

        JsonRpcResponse::success(request.id, serde_json::to_value(result).unwrap_or(json!(null)))
    }

    /// Handle tools/list request
    fn handle_tools_list(&mut self, request: JsonRpcRequest) -> JsonRpcResponse {
        let tools = vec![
            definition(
                "profile_set",
                "Set the user profile used to address the user in generated prompts",
                schemars::schema_for!(tools::SetProfileParams),
            ),
            definition(
                "routine_create",
                "Create a new routine to track",
                schemars::schema_for!(tools::CreateRoutineParams),
            ),
            definition(
                "routine_list",
                "List routines with optional category and active-only filtering",
                schemars::schema_for!(tools::ListRoutinesParams),
            ),
            definition(
                "day_log",
                "Record a day's self-report and per-routine results (re-logging a date replaces it)",
                schemars::schema_for!(tools::DayLogParams),
            ),
            definition(
                "feedback_prompt",
                "Assemble the mentor feedback prompt for a logged day from today's results and the historical window",
                schemars::schema_for!(tools::FeedbackPromptParams),
            ),
            definition(
                "routine_generation_prompt",
                "Assemble the prompt asking the LLM to design 4-7 new routines as strict JSON",
                schemars::schema_for!(tools::GenerationPromptParams),
            ),
            definition(
                "routine_summary_prompt",
                "Assemble the prompt asking the LLM for a short narrative summary of a proposed routine set",
                schemars::schema_for!(tools::SummaryPromptParams),
            ),
        ];

        JsonRpcResponse::success(request.id, json!({ "tools": tools }))
    }

    /// Handle tools/call request
    fn handle_tools_call(&mut self, request: JsonRpcRequest) -> JsonRpcResponse {
        let tool_params: ToolCallParams = match request.params {
            Some(params) => match serde_json::from_value(params) {
                Ok(p) => p,
                Err(e) => {
                    return JsonRpcResponse::error(
                        request.id,
                        error_codes::INVALID_PARAMS,
                        format!("Invalid parameters: {}", e),
                        None,
                    );
                }
            },
            None => {
                return JsonRpcResponse::error(
                    request.id,
                    error_codes::INVALID_PARAMS,
                    "Missing parameters".to_string(),
                    None,
                );
            }
        };

        let args = tool_params.arguments.unwrap_or_else(|| json!({}));
        let storage = self.mentor.storage();
        let window_days = self.mentor.history_window_days();

        let result = match tool_params.name.as_str() {
            "profile_set" => call_tool(args, |p| tools::set_profile(storage, p)),
            "routine_create" => call_tool(args, |p| tools::create_routine(storage, p)),
            "routine_list" => call_tool(args, |p| tools::list_routines(storage, p)),
            "day_log" => call_tool(args, |p| tools::log_day(storage, p)),
            "feedback_prompt" => call_tool(args, |p| tools::build_feedback(storage, window_days, p)),
            "routine_generation_prompt" => call_tool(args, |p| tools::build_generation(storage, p)),
            "routine_summary_prompt" => call_tool(args, |p| tools::build_summary(storage, p)),
            _ => ToolCallResult::error(format!("Unknown tool: {}", tool_params.name)),
        };

        JsonRpcResponse::success(request.id, serde_json::to_value(result).unwrap_or(json!(null)))
    }
}

/// Build a tool definition from a derived JSON schema
fn definition(name: &str, description: &str, schema: schemars::schema::RootSchema) -> ToolDefinition {
    ToolDefinition {
        name: name.to_string(),
        description: description.to_string(),
        input_schema: serde_json::to_value(schema).unwrap_or(json!({ "type": "object" })),
    }
}

/// Deserialize tool arguments, run the tool, and render its response as JSON
fn call_tool<P, R, F>(args: Value, run: F) -> ToolCallResult
where
    P: serde::de::DeserializeOwned,
    R: Serialize,
    F: FnOnce(P) -> Result<R, ToolError>,
{
    let params: P = match serde_json::from_value(args) {
        Ok(p) => p,
        Err(e) => return ToolCallResult::error(format!("Invalid parameters: {}", e)),
    };

    match run(params) {
        Ok(response) => match serde_json::to_string_pretty(&response) {
            Ok(text) => ToolCallResult::success(text),
            Err(e) => ToolCallResult::error(format!("Failed to serialize response: {}", e)),
        },
        Err(e) => ToolCallResult::error(e.to_string()),
    }
}
