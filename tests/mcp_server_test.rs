//! Tests for mcp server module

use std::sync::Arc;

use prompt_enhancer::config::{Config, ConfigOptions};
use prompt_enhancer::enhancer::{EnhancementResult, PromptEnhancer};
use prompt_enhancer::mcp::types::{JsonRpcRequest, JsonRpcResponse};
use prompt_enhancer::mcp::{
    is_header_line, parse_content_length, write_message, McpServer, MessageReader, TransportMode,
};
use serde_json::{json, Value};

fn test_server() -> McpServer {
    let config = Config::new(ConfigOptions::default()).unwrap();
    McpServer::new(config, Arc::new(PromptEnhancer::default()), None)
}

fn request(id: Option<Value>, method: &str, params: Option<Value>) -> JsonRpcRequest {
    JsonRpcRequest {
        jsonrpc: "2.0".to_string(),
        id,
        method: method.to_string(),
        params,
    }
}

// ========================================================================
// Framing helpers
// ========================================================================

#[test]
fn test_is_header_line() {
    assert!(is_header_line("Content-Length: 123"));
    assert!(is_header_line("content-type: application/vscode-jsonrpc"));
    assert!(!is_header_line(""));
    assert!(!is_header_line("X-Custom-Header: value"));
    assert!(!is_header_line("{\"jsonrpc\":\"2.0\"}"));
}

#[test]
fn test_parse_content_length() {
    assert_eq!(parse_content_length("Content-Length: 123").unwrap(), Some(123));
    assert_eq!(parse_content_length("CONTENT-LENGTH:  789  ").unwrap(), Some(789));
    assert_eq!(parse_content_length("Content-Type: text/plain").unwrap(), None);
    assert_eq!(parse_content_length("no colon here").unwrap(), None);
    assert!(parse_content_length("Content-Length: abc").is_err());
    assert!(parse_content_length("Content-Length: -1").is_err());
}

#[tokio::test]
async fn test_reader_detects_line_mode() {
    let input: &[u8] = b"\n{\"a\":1}\n{\"b\":2}\n";
    let mut reader = MessageReader::new(input, None);

    assert_eq!(reader.next_message().await.unwrap().as_deref(), Some("{\"a\":1}"));
    assert_eq!(reader.mode(), Some(TransportMode::Line));
    assert_eq!(reader.next_message().await.unwrap().as_deref(), Some("{\"b\":2}"));
    assert_eq!(reader.next_message().await.unwrap(), None);
}

#[tokio::test]
async fn test_reader_detects_lsp_mode() {
    let body = "{\"jsonrpc\":\"2.0\"}";
    let input = format!(
        "Content-Length: {}\r\nContent-Type: application/json\r\n\r\n{}",
        body.len(),
        body
    );
    let mut reader = MessageReader::new(input.as_bytes(), None);

    assert_eq!(reader.next_message().await.unwrap().as_deref(), Some(body));
    assert_eq!(reader.mode(), Some(TransportMode::Lsp));
    assert_eq!(reader.next_message().await.unwrap(), None);
}

#[tokio::test]
async fn test_reader_lsp_missing_content_length() {
    let input: &[u8] = b"Content-Type: application/json\r\n\r\n{}";
    let mut reader = MessageReader::new(input, Some(TransportMode::Lsp));
    assert!(reader.next_message().await.is_err());
}

#[tokio::test]
async fn test_write_message_framing() {
    let mut line = Vec::new();
    write_message(&mut line, TransportMode::Line, "{}").await.unwrap();
    assert_eq!(line, b"{}\n");

    let mut lsp = Vec::new();
    write_message(&mut lsp, TransportMode::Lsp, "{}").await.unwrap();
    assert_eq!(lsp, b"Content-Length: 2\r\n\r\n{}");
}

// ========================================================================
// Request handling
// ========================================================================

#[test]
fn test_notification_gets_no_response() {
    let server = test_server();
    assert!(server
        .handle_request(request(None, "notifications/initialized", None))
        .is_none());
}

#[test]
fn test_initialize() {
    let server = test_server();
    let response = server
        .handle_request(request(Some(json!(1)), "initialize", Some(json!({}))))
        .unwrap();
    let result = response.result.unwrap();
    assert_eq!(result["protocolVersion"], "2024-11-05");
    assert_eq!(result["serverInfo"]["name"], "prompt-enhancer");
    assert!(result["capabilities"]["tools"].is_object());
}

#[test]
fn test_unknown_method() {
    let server = test_server();
    let response = server
        .handle_request(request(Some(json!(2)), "resources/list", None))
        .unwrap();
    assert_eq!(response.error.unwrap().code, -32601);
}

#[test]
fn test_tools_list() {
    let server = test_server();
    let response = server
        .handle_request(request(Some(json!(3)), "tools/list", None))
        .unwrap();
    let tools = &response.result.unwrap()["tools"];
    assert_eq!(tools[0]["name"], "enhance_prompt");
    assert_eq!(tools[0]["inputSchema"]["required"][0], "prompt");
}

#[test]
fn test_tools_call_enhance_prompt() {
    let server = test_server();
    let params = json!({
        "name": "enhance_prompt",
        "arguments": {"prompt": "Create a database", "context_boost": true}
    });
    let response = server
        .handle_request(request(Some(json!(4)), "tools/call", Some(params)))
        .unwrap();

    let text = response.result.unwrap()["content"][0]["text"]
        .as_str()
        .unwrap()
        .to_string();
    let result: EnhancementResult = serde_json::from_str(&text).unwrap();
    assert!(result.enhanced_prompt.contains("Context Boost Applied:"));
    assert!(result.context_boost_applied);
    assert_eq!(result.style, "professional");
}

#[test]
fn test_tools_call_missing_prompt() {
    let server = test_server();
    let params = json!({"name": "enhance_prompt", "arguments": {}});
    let response = server
        .handle_request(request(Some(json!(5)), "tools/call", Some(params)))
        .unwrap();
    assert_eq!(
        response.result.unwrap()["content"][0]["text"],
        "Error: prompt is required"
    );
}

#[test]
fn test_tools_call_errors() {
    let server = test_server();

    let missing = server
        .handle_request(request(Some(json!(6)), "tools/call", None))
        .unwrap();
    assert_eq!(missing.error.unwrap().code, -32602);

    let unknown = server
        .handle_request(request(
            Some(json!(7)),
            "tools/call",
            Some(json!({"name": "search_context"})),
        ))
        .unwrap();
    assert!(unknown.error.unwrap().message.contains("Unknown tool"));

    let bad_args = server
        .handle_request(request(
            Some(json!(8)),
            "tools/call",
            Some(json!({"name": "enhance_prompt", "arguments": {"prompt": 42}})),
        ))
        .unwrap();
    assert!(bad_args.error.unwrap().message.contains("Invalid arguments"));
}

#[tokio::test]
async fn test_serve_line_session() {
    let server = test_server();
    let input = concat!(
        "{\"jsonrpc\":\"2.0\",\"id\":1,\"method\":\"ping\"}\n",
        "{\"jsonrpc\":\"2.0\",\"method\":\"notifications/initialized\"}\n",
        "not json\n",
    );
    let mut output = Vec::new();

    server.serve(input.as_bytes(), &mut output).await.unwrap();

    let output = String::from_utf8(output).unwrap();
    let responses: Vec<JsonRpcResponse> = output
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(responses.len(), 2);
    assert_eq!(responses[0].id, Some(json!(1)));
    assert_eq!(responses[1].error.as_ref().unwrap().code, -32700);
}
