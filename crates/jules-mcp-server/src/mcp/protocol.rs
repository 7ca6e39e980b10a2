use anyhow::Result;
use serde_json::Value;

use crate::mcp::types::{McpError, McpMessage, McpPayload, McpResponse};

pub struct McpProtocol;

impl McpProtocol {
    pub fn serialize(message: &McpMessage) -> Result<String> {
        Ok(serde_json::to_string(message)?)
    }

    pub fn deserialize(data: &str) -> Result<McpMessage> {
        Ok(serde_json::from_str(data)?)
    }

    pub fn create_response(id: String, result: Result<Value, McpError>) -> McpMessage {
        let payload = match result {
            Ok(value) => McpPayload::Response(McpResponse {
                result: Some(value),
                error: None,
            }),
            Err(error) => McpPayload::Response(McpResponse {
                result: None,
                error: Some(error),
            }),
        };
        McpMessage { id, payload }
    }
}
