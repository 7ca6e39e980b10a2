use async_trait::async_trait;
use jules_api::{types::SendMessageRequest, JulesClient};
use serde::Deserialize;
use serde_json::Value;

use crate::mcp::types::McpError;
use crate::tools::Tool;

// --- ListActivities Tool ---

#[derive(Debug, Deserialize)]
struct ListActivitiesParams {
    session_id: String,
    page_size: Option<u32>,
    page_token: Option<String>,
}

pub struct ListActivities;

#[async_trait]
impl Tool for ListActivities {
    async fn execute(&self, client: &JulesClient, params: Value) -> Result<Value, McpError> {
        let params: ListActivitiesParams =
            serde_json::from_value(params).map_err(McpError::invalid_params)?;

        let response = client
            .list_activities(
                &params.session_id,
                params.page_size,
                params.page_token.as_deref(),
            )
            .await
            .map_err(McpError::upstream)?;

        serde_json::to_value(response).map_err(McpError::internal)
    }
}

// --- SendMessage Tool ---

#[derive(Debug, Deserialize)]
struct SendMessageParams {
    session_id: String,
    prompt: String,
}

pub struct SendMessage;

#[async_trait]
impl Tool for SendMessage {
    async fn execute(&self, client: &JulesClient, params: Value) -> Result<Value, McpError> {
        let params: SendMessageParams =
            serde_json::from_value(params).map_err(McpError::invalid_params)?;

        let request = SendMessageRequest::new(params.prompt);
        client
            .send_message(&params.session_id, &request)
            .await
            .map_err(McpError::upstream)?;

        Ok(Value::Null)
    }
}
