//! MCP server implementation
//!
//! JSON-RPC over stdio. Framing is either one message per line or LSP-style
//! `Content-Length` headers; when not forced, the first message decides.

use std::sync::Arc;

use anyhow::{anyhow, Result};
use serde_json::{json, Value};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, error, info};

use crate::config::{is_tool_enabled, Config};
use crate::enhancer::PromptEnhancer;
use crate::tools::enhance_prompt::{EnhancePromptArgs, EnhancePromptToolDef, ENHANCE_PROMPT_TOOL};
use crate::tools::EnhancePromptTool;

use super::types::*;

/// MCP protocol revision this server speaks
pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// Maximum line length for Line mode (10MB)
const MAX_LINE_LENGTH: usize = 10 * 1024 * 1024;

/// Maximum header line length for LSP mode
const MAX_HEADER_LENGTH: usize = 1024;

/// Maximum number of header lines (including skipped blank lines)
pub const MAX_HEADER_COUNT: usize = 100;

/// Maximum LSP payload size (10MB)
const MAX_MESSAGE_SIZE: usize = 10 * 1024 * 1024;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TransportMode {
    Lsp,
    Line,
}

pub fn is_header_line(line: &str) -> bool {
    match line.split_once(':') {
        Some((name, _)) => {
            let name = name.trim();
            name.eq_ignore_ascii_case("content-length") || name.eq_ignore_ascii_case("content-type")
        }
        None => false,
    }
}

pub fn parse_content_length(line: &str) -> Result<Option<usize>> {
    let Some((name, value)) = line.split_once(':') else {
        return Ok(None);
    };

    if !name.trim().eq_ignore_ascii_case("content-length") {
        return Ok(None);
    }

    value
        .trim()
        .parse::<usize>()
        .map(Some)
        .map_err(|e| anyhow!("Invalid Content-Length header: {}", e))
}

/// Reads framed messages, detecting the framing on the first message when unset
pub struct MessageReader<R> {
    reader: R,
    mode: Option<TransportMode>,
}

impl<R: AsyncBufRead + Unpin> MessageReader<R> {
    pub fn new(reader: R, mode: Option<TransportMode>) -> Self {
        Self { reader, mode }
    }

    pub fn mode(&self) -> Option<TransportMode> {
        self.mode
    }

    /// Next message payload, or `None` at end of input
    pub async fn next_message(&mut self) -> Result<Option<String>> {
        match self.mode {
            Some(TransportMode::Line) => self.read_line_message().await,
            Some(TransportMode::Lsp) => self.read_lsp_message(None).await,
            None => {
                let Some(first) = self.read_non_empty_line(MAX_LINE_LENGTH).await? else {
                    return Ok(None);
                };

                if parse_content_length(&first)?.is_some() || is_header_line(&first) {
                    self.mode = Some(TransportMode::Lsp);
                    self.read_lsp_message(Some(first)).await
                } else {
                    self.mode = Some(TransportMode::Line);
                    Ok(Some(first))
                }
            }
        }
    }

    /// One raw line without its terminator; `None` at EOF
    async fn read_raw_line(&mut self, limit: usize) -> Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line).await? == 0 {
            return Ok(None);
        }
        if line.len() > limit {
            return Err(anyhow!(
                "Line length {} exceeds maximum allowed size of {} bytes",
                line.len(),
                limit
            ));
        }
        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }

    async fn read_non_empty_line(&mut self, limit: usize) -> Result<Option<String>> {
        while let Some(line) = self.read_raw_line(limit).await? {
            if !line.is_empty() {
                return Ok(Some(line));
            }
        }
        Ok(None)
    }

    async fn read_line_message(&mut self) -> Result<Option<String>> {
        self.read_non_empty_line(MAX_LINE_LENGTH).await
    }

    async fn read_lsp_message(&mut self, first_line: Option<String>) -> Result<Option<String>> {
        let mut content_length: Option<usize> = None;
        let mut pending = first_line;
        let mut seen_header = false;

        for _ in 0..MAX_HEADER_COUNT {
            let line = match pending.take() {
                Some(line) => line,
                None => match self.read_raw_line(MAX_HEADER_LENGTH).await? {
                    Some(line) => line,
                    None => return Ok(None),
                },
            };

            if line.is_empty() {
                // Blank lines before the first header are noise; after it they end the block
                if seen_header {
                    let length = content_length
                        .ok_or_else(|| anyhow!("Missing Content-Length header in LSP message"))?;
                    return self.read_body(length).await.map(Some);
                }
                continue;
            }

            seen_header = true;
            if let Some(len) = parse_content_length(&line)? {
                content_length = Some(len);
            }
        }

        Err(anyhow!(
            "Too many header lines or skipped blank lines (limit {})",
            MAX_HEADER_COUNT
        ))
    }

    async fn read_body(&mut self, length: usize) -> Result<String> {
        if length > MAX_MESSAGE_SIZE {
            return Err(anyhow!(
                "Content-Length {} exceeds maximum allowed size of {} bytes",
                length,
                MAX_MESSAGE_SIZE
            ));
        }

        let mut buf = vec![0u8; length];
        self.reader.read_exact(&mut buf).await?;
        String::from_utf8(buf).map_err(|e| anyhow!("Invalid UTF-8 payload: {}", e))
    }
}

/// Frame `payload` for `mode` and flush it
pub async fn write_message<W: AsyncWrite + Unpin>(
    writer: &mut W,
    mode: TransportMode,
    payload: &str,
) -> Result<()> {
    let mut buffer = Vec::with_capacity(payload.len() + 32);

    match mode {
        TransportMode::Line => {
            buffer.extend_from_slice(payload.as_bytes());
            buffer.push(b'\n');
        }
        TransportMode::Lsp => {
            buffer.extend_from_slice(format!("Content-Length: {}\r\n\r\n", payload.len()).as_bytes());
            buffer.extend_from_slice(payload.as_bytes());
        }
    }

    writer.write_all(&buffer).await?;
    writer.flush().await?;
    Ok(())
}

/// MCP Server
pub struct McpServer {
    config: Arc<Config>,
    enhancer: Arc<PromptEnhancer>,
    transport_mode: Option<TransportMode>,
}

impl McpServer {
    pub fn new(
        config: Arc<Config>,
        enhancer: Arc<PromptEnhancer>,
        transport_mode: Option<TransportMode>,
    ) -> Self {
        Self {
            config,
            enhancer,
            transport_mode,
        }
    }

    /// Run the MCP server on stdin/stdout
    pub async fn run(&self) -> Result<()> {
        let reader = BufReader::new(tokio::io::stdin());
        let mut stdout = tokio::io::stdout();
        self.serve(reader, &mut stdout).await
    }

    /// Serve requests from `reader` until EOF, writing responses to `writer`
    pub async fn serve<R, W>(&self, reader: R, writer: &mut W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut messages = MessageReader::new(reader, self.transport_mode);

        info!("MCP server started, waiting for requests...");

        loop {
            let message = match messages.next_message().await {
                Ok(Some(message)) => message,
                Ok(None) => break,
                Err(e) => {
                    error!("Failed to read message: {}", e);
                    continue;
                }
            };

            debug!("Received: {}", message);

            let response = match serde_json::from_str::<JsonRpcRequest>(&message) {
                Ok(request) => self.handle_request(request),
                Err(e) => {
                    error!("Failed to parse request: {}", e);
                    Some(JsonRpcResponse::error(
                        None,
                        -32700,
                        format!("Parse error: {}", e),
                    ))
                }
            };

            if let Some(resp) = response {
                let resp_json = serde_json::to_string(&resp)?;
                debug!("Sending: {}", resp_json);
                let mode = messages.mode().unwrap_or(TransportMode::Line);
                write_message(writer, mode, &resp_json).await?;
            }
        }

        info!("Input closed, MCP server stopping");
        Ok(())
    }

    /// Handle a JSON-RPC request. Notifications (no id) get no response.
    pub fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        if request.id.is_none() {
            debug!("Received notification: {}", request.method);
            return None;
        }

        match request.method.as_str() {
            "initialize" => Some(self.handle_initialize(request.id)),
            "tools/list" => Some(self.handle_list_tools(request.id)),
            "tools/call" => Some(self.handle_call_tool(request.id, request.params)),
            "ping" => Some(JsonRpcResponse::success(request.id, json!({}))),
            _ => Some(JsonRpcResponse::error(
                request.id,
                -32601,
                format!("Method not found: {}", request.method),
            )),
        }
    }

    fn handle_initialize(&self, id: Option<Value>) -> JsonRpcResponse {
        let result = InitializeResult {
            protocol_version: PROTOCOL_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {}),
            },
            server_info: ServerInfo {
                name: "prompt-enhancer".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        };

        to_response(id, result)
    }

    fn handle_list_tools(&self, id: Option<Value>) -> JsonRpcResponse {
        let mut tools = Vec::new();

        if is_tool_enabled() {
            tools.push(Tool {
                name: ENHANCE_PROMPT_TOOL.name.to_string(),
                description: ENHANCE_PROMPT_TOOL.description.to_string(),
                input_schema: EnhancePromptToolDef::get_input_schema(),
            });
        }

        to_response(id, ListToolsResult { tools })
    }

    fn handle_call_tool(&self, id: Option<Value>, params: Option<Value>) -> JsonRpcResponse {
        let Some(params) = params else {
            return JsonRpcResponse::error(id, -32602, "Missing params".to_string());
        };

        let call_params: CallToolParams = match serde_json::from_value(params) {
            Ok(p) => p,
            Err(e) => {
                return JsonRpcResponse::error(id, -32602, format!("Invalid params: {}", e));
            }
        };

        if call_params.name != ENHANCE_PROMPT_TOOL.name {
            return JsonRpcResponse::error(
                id,
                -32602,
                format!("Unknown tool: {}", call_params.name),
            );
        }

        if !is_tool_enabled() {
            return JsonRpcResponse::error(
                id,
                -32602,
                format!("Tool '{}' is disabled", ENHANCE_PROMPT_TOOL.name),
            );
        }

        let args: EnhancePromptArgs = match call_params.arguments {
            Some(args) => match serde_json::from_value(args) {
                Ok(a) => a,
                Err(e) => {
                    return JsonRpcResponse::error(id, -32602, format!("Invalid arguments: {}", e));
                }
            },
            None => EnhancePromptArgs::default(),
        };

        let tool = EnhancePromptTool::new(self.config.clone(), self.enhancer.clone());
        let result = tool.execute(args);

        to_response(
            id,
            CallToolResult {
                content: vec![TextContent::new(result.text)],
            },
        )
    }
}

fn to_response<T: serde::Serialize>(id: Option<Value>, result: T) -> JsonRpcResponse {
    match serde_json::to_value(result) {
        Ok(value) => JsonRpcResponse::success(id, value),
        Err(e) => JsonRpcResponse::error(id, -32603, format!("Internal error: {}", e)),
    }
}
