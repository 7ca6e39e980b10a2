//! Credential resolution for the Jules API client.
//!
//! Resolution is a plain function over an explicit value and an environment
//! lookup passed in by the caller, so tests can exercise every branch without
//! touching process-wide state.

use crate::{error::JulesError, Result};

/// Environment variable consulted when no explicit key is given.
pub const API_KEY_ENV_VAR: &str = "JULES_API_KEY";

/// Header carrying the API key on every request.
pub(crate) const API_KEY_HEADER: &str = "X-Goog-Api-Key";

/// Resolve the API key from an explicit value or an environment lookup.
///
/// The explicit value wins when present; otherwise `env` is consulted for
/// [`API_KEY_ENV_VAR`]. Empty strings count as absent.
pub fn resolve_api_key<F>(explicit: Option<String>, env: F) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    explicit
        .filter(|key| !key.is_empty())
        .or_else(|| env(API_KEY_ENV_VAR).filter(|key| !key.is_empty()))
        .ok_or_else(|| {
            JulesError::Configuration(format!(
                "API key must be provided or set as {API_KEY_ENV_VAR} environment variable"
            ))
        })
}

/// [`resolve_api_key`] wired to the process environment.
pub fn resolve_api_key_from_env(explicit: Option<String>) -> Result<String> {
    resolve_api_key(explicit, |name| std::env::var(name).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn explicit_key_wins_over_environment() {
        let key = resolve_api_key(Some("explicit".into()), |_| Some("from-env".into())).unwrap();
        assert_eq!(key, "explicit");
    }

    #[test]
    fn falls_back_to_environment() {
        let key = resolve_api_key(None, |name| {
            assert_eq!(name, API_KEY_ENV_VAR);
            Some("from-env".into())
        })
        .unwrap();
        assert_eq!(key, "from-env");
    }

    #[test]
    fn missing_everywhere_is_a_configuration_error() {
        let err = resolve_api_key(None, no_env).unwrap_err();
        assert!(matches!(err, JulesError::Configuration(_)));
    }

    #[test]
    fn empty_strings_count_as_absent() {
        let err = resolve_api_key(Some(String::new()), |_| Some(String::new())).unwrap_err();
        assert!(matches!(err, JulesError::Configuration(_)));
    }
}
