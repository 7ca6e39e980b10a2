//! Jules MCP Server
//!
//! MCP server providing tools for interacting with the Jules API.

pub mod config;
pub mod handlers;
pub mod mcp;
pub mod server;
pub mod tools;

// Re-exports
pub use config::Config;
pub use server::JulesMcpServer;
