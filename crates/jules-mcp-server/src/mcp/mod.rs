pub mod protocol;
pub mod transport;
pub mod types;

pub use protocol::McpProtocol;
pub use transport::StdioTransport;
pub use types::{McpError, McpMessage, McpNotification, McpPayload, McpRequest, McpResponse};
