use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const UPSTREAM_ERROR: i32 = -32000;
pub const TOOL_NOT_FOUND: i32 = -32601;
pub const INVALID_PARAMS: i32 = -32602;
pub const INTERNAL_ERROR: i32 = -32603;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct McpMessage {
    pub id: String,
    #[serde(flatten)]
    pub payload: McpPayload,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
#[serde(rename_all = "snake_case")]
pub enum McpPayload {
    Request(McpRequest),
    Response(McpResponse),
    Notification(McpNotification),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct McpRequest {
    pub tool_name: String,
    pub params: Value,
}

/// Exactly one of `result`/`error` is set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct McpResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<McpError>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct McpError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl McpError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    pub fn invalid_params(error: impl std::fmt::Display) -> Self {
        Self::new(INVALID_PARAMS, error.to_string())
    }

    pub fn upstream(error: impl std::fmt::Display) -> Self {
        Self::new(UPSTREAM_ERROR, error.to_string())
    }

    pub fn internal(error: impl std::fmt::Display) -> Self {
        Self::new(INTERNAL_ERROR, error.to_string())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct McpNotification {
    pub event: String,
    pub params: Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_request_line() {
        let line = r#"{"id":"req-1","type":"request","tool_name":"jules_get_session","params":{"session_id":"s-1"}}"#;
        let msg: McpMessage = serde_json::from_str(line).unwrap();
        assert_eq!(msg.id, "req-1");
        match msg.payload {
            McpPayload::Request(req) => {
                assert_eq!(req.tool_name, "jules_get_session");
                assert_eq!(req.params["session_id"], "s-1");
            }
            other => panic!("expected request, got {other:?}"),
        }
    }

    #[test]
    fn error_responses_carry_code_and_message() {
        let msg = McpMessage {
            id: "req-1".into(),
            payload: McpPayload::Response(McpResponse {
                result: None,
                error: Some(McpError::new(TOOL_NOT_FOUND, "Tool not found: nope")),
            }),
        };
        let json: Value = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["type"], "response");
        assert_eq!(json["error"]["code"], TOOL_NOT_FOUND);
        assert!(json.get("result").is_none());
    }
}
