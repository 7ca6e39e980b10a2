use async_trait::async_trait;
use jules_api::JulesClient;
use serde::Deserialize;
use serde_json::Value;

use crate::mcp::types::McpError;
use crate::tools::Tool;

// --- ApprovePlan Tool ---

#[derive(Debug, Deserialize)]
struct ApprovePlanParams {
    session_id: String,
}

pub struct ApprovePlan;

#[async_trait]
impl Tool for ApprovePlan {
    async fn execute(&self, client: &JulesClient, params: Value) -> Result<Value, McpError> {
        let params: ApprovePlanParams =
            serde_json::from_value(params).map_err(McpError::invalid_params)?;

        client
            .approve_plan(&params.session_id)
            .await
            .map_err(McpError::upstream)?;

        Ok(Value::Null)
    }
}
