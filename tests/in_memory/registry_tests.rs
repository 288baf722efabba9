//! Registry building across scripted MCP servers.

use super::helpers::{FS_URL, SEARCH_URL, TestContext, context};
use mcp_toolbridge::{
    agent::ports::ClientTool,
    tool_registry::{domain::McpMethod, services::DEFAULT_CONFIG_VARIABLE},
};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn build_applies_whitelists_per_server(context: TestContext) {
    let tools = context.builder.build().await;

    let names: Vec<&str> = tools.iter().map(ClientTool::name).collect();
    assert_eq!(names, ["fs_read", "search_query"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn build_discovers_each_server_once_in_order(context: TestContext) {
    context.builder.build().await;

    let requests = context
        .transport
        .requests()
        .expect("requests should be readable");
    let targets: Vec<(&str, McpMethod)> = requests
        .iter()
        .map(|request| (request.url.as_str(), request.payload.method))
        .collect();
    assert_eq!(
        targets,
        [(FS_URL, McpMethod::ToolsList), (SEARCH_URL, McpMethod::ToolsList)]
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn discovery_resolves_header_placeholders(context: TestContext) {
    context.builder.build().await;

    let requests = context
        .transport
        .requests()
        .expect("requests should be readable");
    let search_request = requests
        .iter()
        .find(|request| request.url == SEARCH_URL)
        .expect("search server should be queried");
    assert_eq!(
        search_request.headers.get("X-Api-Key").map(String::as_str),
        Some("key-1")
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn rebuilding_picks_up_configuration_changes(context: TestContext) {
    assert_eq!(context.builder.build().await.len(), 2);

    context.environment.set_var(DEFAULT_CONFIG_VARIABLE, "not json");

    assert!(context.builder.build().await.is_empty());
}
