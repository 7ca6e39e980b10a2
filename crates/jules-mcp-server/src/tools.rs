use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use jules_api::JulesClient;
use parking_lot::RwLock;
use serde_json::Value;

use crate::mcp::types::{McpError, TOOL_NOT_FOUND};

/// A trait for a tool that can be executed by the MCP server.
#[async_trait]
pub trait Tool: Send + Sync {
    async fn execute(&self, client: &JulesClient, params: Value) -> Result<Value, McpError>;
}

/// A container for all registered tools.
pub struct ToolBox {
    client: JulesClient,
    tools: RwLock<HashMap<String, Arc<dyn Tool>>>,
}

impl ToolBox {
    /// Creates a new `ToolBox`.
    pub fn new(client: JulesClient) -> Self {
        Self {
            client,
            tools: RwLock::new(HashMap::new()),
        }
    }

    /// Adds a tool to the toolbox.
    pub fn add_tool(&self, name: &str, tool: Arc<dyn Tool>) {
        self.tools.write().insert(name.to_string(), tool);
    }

    /// Registered tool names, sorted.
    pub fn tool_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.tools.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Runs a tool by name with the given parameters.
    pub async fn run_tool(&self, name: &str, params: Value) -> Result<Value, McpError> {
        let tool = {
            let tools = self.tools.read();
            tools.get(name).cloned()
        };

        match tool {
            Some(tool) => tool.execute(&self.client, params).await,
            None => Err(McpError::new(
                TOOL_NOT_FOUND,
                format!("Tool not found: {name}"),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jules_api::Config;

    struct Echo;

    #[async_trait]
    impl Tool for Echo {
        async fn execute(&self, _client: &JulesClient, params: Value) -> Result<Value, McpError> {
            Ok(params)
        }
    }

    fn toolbox() -> ToolBox {
        let client = JulesClient::new(Config::new("test-key")).unwrap();
        ToolBox::new(client)
    }

    #[tokio::test]
    async fn dispatches_to_registered_tool() {
        let toolbox = toolbox();
        toolbox.add_tool("echo", Arc::new(Echo));

        let params = serde_json::json!({ "hello": "world" });
        let result = toolbox.run_tool("echo", params.clone()).await.unwrap();
        assert_eq!(result, params);
        assert_eq!(toolbox.tool_names(), ["echo"]);
    }

    #[tokio::test]
    async fn unknown_tool_is_reported() {
        let toolbox = toolbox();
        let err = toolbox
            .run_tool("nope", Value::Null)
            .await
            .unwrap_err();
        assert_eq!(err.code, TOOL_NOT_FOUND);
    }
}
