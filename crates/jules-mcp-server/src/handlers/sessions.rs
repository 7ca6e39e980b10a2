use async_trait::async_trait;
use jules_api::{
    types::{CreateSessionRequest, SourceContext},
    JulesClient,
};
use serde::Deserialize;
use serde_json::Value;

use crate::mcp::types::McpError;
use crate::tools::Tool;

// --- CreateSession Tool ---

#[derive(Debug, Deserialize)]
struct CreateSessionParams {
    source: String,
    prompt: String,
    title: String,
    starting_branch: Option<String>,
    #[serde(default)]
    require_plan_approval: bool,
}

pub struct CreateSession;

#[async_trait]
impl Tool for CreateSession {
    async fn execute(&self, client: &JulesClient, params: Value) -> Result<Value, McpError> {
        let params: CreateSessionParams =
            serde_json::from_value(params).map_err(McpError::invalid_params)?;

        let mut source_context = SourceContext::new(params.source);
        if let Some(branch) = params.starting_branch {
            source_context = source_context.with_starting_branch(branch);
        }
        let mut request = CreateSessionRequest::new(params.prompt, source_context, params.title);
        if params.require_plan_approval {
            request = request.with_plan_approval();
        }

        let session = client
            .create_session(&request)
            .await
            .map_err(McpError::upstream)?;

        serde_json::to_value(session).map_err(McpError::internal)
    }
}

// --- ListSessions Tool ---

#[derive(Debug, Deserialize)]
struct ListSessionsParams {
    page_size: Option<u32>,
    page_token: Option<String>,
}

pub struct ListSessions;

#[async_trait]
impl Tool for ListSessions {
    async fn execute(&self, client: &JulesClient, params: Value) -> Result<Value, McpError> {
        let params: ListSessionsParams =
            serde_json::from_value(params).map_err(McpError::invalid_params)?;

        let response = client
            .list_sessions(params.page_size, params.page_token.as_deref())
            .await
            .map_err(McpError::upstream)?;

        serde_json::to_value(response).map_err(McpError::internal)
    }
}

// --- GetSession Tool ---

#[derive(Debug, Deserialize)]
struct GetSessionParams {
    session_id: String,
}

pub struct GetSession;

#[async_trait]
impl Tool for GetSession {
    async fn execute(&self, client: &JulesClient, params: Value) -> Result<Value, McpError> {
        let params: GetSessionParams =
            serde_json::from_value(params).map_err(McpError::invalid_params)?;

        let session = client
            .get_session(&params.session_id)
            .await
            .map_err(McpError::upstream)?;

        serde_json::to_value(session).map_err(McpError::internal)
    }
}
