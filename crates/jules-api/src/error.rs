use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Every failure the client surfaces, classified into three kinds.
#[derive(Error, Debug)]
pub enum JulesError {
    /// Missing or invalid credential, or an unusable client configuration.
    /// Raised at construction time, before any network call.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Network failure, timeout, or non-2xx HTTP status.
    #[error("transport error{}: {message}", fmt_status(.status))]
    Transport {
        status: Option<StatusCode>,
        message: String,
        #[source]
        source: Option<reqwest::Error>,
    },

    /// A 2xx response body that is not valid JSON or does not match the
    /// expected schema.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl JulesError {
    /// HTTP status carried by a transport error, if the server answered.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Transport { status, .. } => *status,
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(
            self,
            Self::Transport { source: Some(source), .. } if source.is_timeout()
        )
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }

    /// Transport error for a non-2xx response, with the message pulled from
    /// the body where possible.
    pub(crate) fn from_status(status: StatusCode, body: &str) -> Self {
        Self::Transport {
            status: Some(status),
            message: status_message(status, body),
            source: None,
        }
    }
}

impl From<reqwest::Error> for JulesError {
    fn from(error: reqwest::Error) -> Self {
        Self::Transport {
            status: error.status(),
            message: error.to_string(),
            source: Some(error),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<ErrorBodyFields>,
}

#[derive(Debug, Deserialize)]
struct ErrorBodyFields {
    message: Option<String>,
}

/// Prefer the API's own `error.message`, then the status' canonical reason,
/// then the raw body.
fn status_message(status: StatusCode, body: &str) -> String {
    if let Ok(ErrorBody { error: Some(fields) }) = serde_json::from_str::<ErrorBody>(body) {
        if let Some(message) = fields.message.filter(|m| !m.is_empty()) {
            return message;
        }
    }

    if body.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string()
    } else {
        body.to_string()
    }
}

fn fmt_status(status: &Option<StatusCode>) -> String {
    match status {
        Some(status) => format!(" (HTTP {status})"),
        None => String::new(),
    }
}
