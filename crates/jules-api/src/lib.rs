//! Jules API client library
//!
//! This crate provides a Rust client for the Jules API, enabling programmatic
//! access to Jules's AI coding agent capabilities: listing connected sources,
//! creating and inspecting sessions, approving plans, sending messages, and
//! paging through session activities.

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod pagination;
pub mod retry;
pub mod types;

// Re-exports
pub use client::{JulesClient, TimeoutPolicy};
pub use config::Config;
pub use error::JulesError;
pub use types::{
    Activity, CreateSessionRequest, ListActivitiesResponse, ListSessionsResponse,
    ListSourcesResponse, SendMessageRequest, Session, Source, SourceContext,
};

pub type Result<T> = std::result::Result<T, JulesError>;

#[cfg(test)]
mod tests;
