use async_trait::async_trait;
use jules_api::JulesClient;
use serde::Deserialize;
use serde_json::Value;

use crate::mcp::types::McpError;
use crate::tools::Tool;

// --- ListSources Tool ---

#[derive(Debug, Deserialize)]
struct ListSourcesParams {
    page_token: Option<String>,
}

pub struct ListSources;

#[async_trait]
impl Tool for ListSources {
    async fn execute(&self, client: &JulesClient, params: Value) -> Result<Value, McpError> {
        let params: ListSourcesParams =
            serde_json::from_value(params).map_err(McpError::invalid_params)?;

        let response = client
            .list_sources(params.page_token.as_deref())
            .await
            .map_err(McpError::upstream)?;

        serde_json::to_value(response).map_err(McpError::internal)
    }
}

// --- GetSource Tool ---

#[derive(Debug, Deserialize)]
struct GetSourceParams {
    source_id: String,
}

pub struct GetSource;

#[async_trait]
impl Tool for GetSource {
    async fn execute(&self, client: &JulesClient, params: Value) -> Result<Value, McpError> {
        let params: GetSourceParams =
            serde_json::from_value(params).map_err(McpError::invalid_params)?;

        let source = client
            .get_source(&params.source_id)
            .await
            .map_err(McpError::upstream)?;

        serde_json::to_value(source).map_err(McpError::internal)
    }
}
