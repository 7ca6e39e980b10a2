//! Type exports

pub mod activity;
pub mod session;
pub mod source;

pub use activity::{Activity, ListActivitiesResponse, SendMessageRequest};
pub use session::{
    CreateSessionRequest, GithubRepoContext, ListSessionsResponse, Session, SourceContext,
};
pub use source::{GithubRepo, ListSourcesResponse, Source};
