//! Retry policy for [`TimeoutPolicy::UntilReady`](crate::TimeoutPolicy).

use std::time::Duration;

use crate::error::JulesError;

/// Delay between attempts.
pub const RETRY_INTERVAL: Duration = Duration::from_secs(1);

/// Upper bound on any single attempt inside the retry loop.
pub const ATTEMPT_TIMEOUT: Duration = Duration::from_secs(60);

/// Transport-level failures are retryable, a 404 included: callers in this
/// mode are polling for a resource the server is still materializing.
/// Decode failures are terminal — a schema mismatch will not improve on
/// retry.
pub(crate) fn is_retryable(error: &JulesError) -> bool {
    matches!(error, JulesError::Transport { .. })
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn transport_failures_are_retryable() {
        assert!(is_retryable(&JulesError::from_status(
            StatusCode::NOT_FOUND,
            ""
        )));
        assert!(is_retryable(&JulesError::from_status(
            StatusCode::SERVICE_UNAVAILABLE,
            ""
        )));
    }

    #[test]
    fn decode_failures_are_terminal() {
        let decode = serde_json::from_str::<crate::types::Session>("not json").unwrap_err();
        assert!(!is_retryable(&JulesError::Decode(decode)));
        assert!(!is_retryable(&JulesError::Configuration("no key".into())));
    }
}
