//! Environment variable expansion for configuration strings.

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references in `value`.
///
/// `field` names the config field for error messages.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    shellexpand::env(value)
        .map(std::borrow::Cow::into_owned)
        .map_err(|e| ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}} not set", e.var_name),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_unchanged() {
        assert_eq!(
            expand_env("127.0.0.1", "server.host").unwrap(),
            "127.0.0.1"
        );
    }

    #[test]
    fn test_default_used_when_unset() {
        let value = expand_env("${CAMPUS_TEST_SURELY_UNSET_VAR:-staging}", "site.environment");

        assert_eq!(value.unwrap(), "staging");
    }

    #[test]
    fn test_missing_required_var() {
        let err = expand_env("${CAMPUS_TEST_SURELY_UNSET_VAR}", "server.host").unwrap_err();

        let msg = err.to_string();
        assert!(msg.contains("server.host"), "got: {msg}");
        assert!(msg.contains("CAMPUS_TEST_SURELY_UNSET_VAR"), "got: {msg}");
    }
}
