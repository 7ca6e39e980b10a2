use serde::{Deserialize, Serialize};

/// Additional context for GitHub-backed sources.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GithubRepoContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starting_branch: Option<String>,
}

/// Names the source a session works against.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceContext {
    /// Resource name of an existing [`Source`](crate::types::Source).
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_repo_context: Option<GithubRepoContext>,
}

impl SourceContext {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            github_repo_context: None,
        }
    }

    pub fn with_starting_branch(mut self, branch: impl Into<String>) -> Self {
        self.github_repo_context = Some(GithubRepoContext {
            starting_branch: Some(branch.into()),
        });
        self
    }
}

/// A continuous unit of work created against a source. Created server-side;
/// immutable from the client's perspective once returned.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub name: String,
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_context: Option<SourceContext>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionRequest {
    pub prompt: String,
    pub source_context: SourceContext,
    pub title: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub require_plan_approval: bool,
}

impl CreateSessionRequest {
    /// All required fields up front; the plan-approval flag defaults to off.
    pub fn new(
        prompt: impl Into<String>,
        source_context: SourceContext,
        title: impl Into<String>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            source_context,
            title: title.into(),
            require_plan_approval: false,
        }
    }

    pub fn with_plan_approval(mut self) -> Self {
        self.require_plan_approval = true;
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListSessionsResponse {
    pub sessions: Vec<Session>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

fn is_false(value: &bool) -> bool {
    !*value
}
