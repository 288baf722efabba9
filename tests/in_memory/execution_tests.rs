//! Client tool execution through the agent contract.

use super::helpers::{SEARCH_URL, TestContext, context, find_tool};
use mcp_toolbridge::{
    agent::{
        domain::{CompletionMessage, ToolCall},
        ports::ClientTool,
    },
    tool_registry::domain::McpMethod,
};
use rstest::rstest;
use serde_json::json;

fn search_call(arguments: serde_json::Value) -> Vec<CompletionMessage> {
    vec![
        CompletionMessage::user("find rust"),
        CompletionMessage::assistant("").with_tool_call(ToolCall::new(
            "call-9",
            "search_query",
            arguments,
        )),
    ]
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn execution_returns_flattened_content(context: TestContext) {
    context
        .transport
        .set_response(
            SEARCH_URL,
            McpMethod::ToolsCall,
            json!({"result": {"content": [{"text": "hit 1"}, {"text": "hit 2"}]}}),
        )
        .expect("script should be stored");
    let tools = context.builder.build().await;
    let search = find_tool(&tools, "search_query").expect("search tool should be registered");

    let response = search.execute(&search_call(json!({"q": "rust"}))).await;

    assert_eq!(response.call_id, "call-9");
    assert_eq!(response.tool_name, "search_query");
    assert_eq!(response.content, "hit 1\nhit 2");
    assert_eq!(response.metadata.get("mcp_server"), Some(&json!("search")));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn execution_uses_rotated_credentials(context: TestContext) {
    context
        .transport
        .set_response(
            SEARCH_URL,
            McpMethod::ToolsCall,
            json!({"result": {"content": [{"text": "ok"}]}}),
        )
        .expect("script should be stored");
    let tools = context.builder.build().await;
    let search = find_tool(&tools, "search_query").expect("search tool should be registered");

    context.environment.set_var("SEARCH_KEY", "key-2");
    search.execute(&search_call(json!({}))).await;

    let requests = context
        .transport
        .requests()
        .expect("requests should be readable");
    let call_request = requests
        .iter()
        .find(|request| request.payload.method == McpMethod::ToolsCall)
        .expect("tools/call should be sent");
    assert_eq!(
        call_request.headers.get("X-Api-Key").map(String::as_str),
        Some("key-2")
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn execution_reports_server_errors_as_content(context: TestContext) {
    context
        .transport
        .set_response(
            SEARCH_URL,
            McpMethod::ToolsCall,
            json!({"jsonrpc": "2.0", "id": 1, "error": {"code": -32602, "message": "missing q"}}),
        )
        .expect("script should be stored");
    let tools = context.builder.build().await;
    let search = find_tool(&tools, "search_query").expect("search tool should be registered");

    let response = search.execute(&search_call(json!("{}"))).await;

    assert_eq!(response.content, "Error: missing q");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn execution_schema_matches_discovered_definition(context: TestContext) {
    let tools = context.builder.build().await;
    let read = find_tool(&tools, "fs_read").expect("read tool should be registered");

    let schema = serde_json::to_value(read.schema()).expect("schema should serialise");

    assert_eq!(
        schema,
        json!({
            "type": "function",
            "function": {
                "name": "fs_read",
                "description": "Reads a file",
                "parameters": {"type": "object"}
            }
        })
    );
}
