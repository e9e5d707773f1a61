//! Endpoint Identifier Validation
//!
//! An endpoint identifier is a lowercase letter followed by one or more
//! lowercase letters, digits, or hyphens. Identifiers are extracted from
//! request paths of the form `/endpoints/<identifier>`; anything else is
//! rejected. Note the rule requires at least two characters.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::DomainError;

/// Anchored pattern an endpoint path must match
pub const IDENTIFIER_PATTERN: &str = "^/endpoints/([a-z][-a-z0-9]+)$";

static PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(IDENTIFIER_PATTERN).expect("identifier pattern compiles"));

/// Extract the endpoint identifier from a request path
///
/// Returns the captured identifier exactly as given, with no case-folding
/// or trimming.
///
/// # Errors
/// Returns `DomainError::InvalidIdentifier` when the path does not match
/// the anchored pattern.
pub fn extract_identifier(path: &str) -> Result<&str, DomainError> {
    PATTERN
        .captures(path)
        .and_then(|captures| captures.get(1))
        .map(|capture| capture.as_str())
        .ok_or_else(|| DomainError::InvalidIdentifier {
            path: path.to_string(),
            pattern: IDENTIFIER_PATTERN,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_valid_identifiers() {
        for identifier in ["my-service", "ab", "a1", "x-9", "web-frontend-01"] {
            let path = format!("/endpoints/{identifier}");
            assert_eq!(extract_identifier(&path).unwrap(), identifier);
        }
    }

    #[test]
    fn rejects_invalid_identifiers() {
        for path in [
            "/endpoints/a",
            "/endpoints/Not_Valid",
            "/endpoints/1abc",
            "/endpoints/-abc",
            "/endpoints/ABC",
            "/endpoints/",
            "/endpoints",
            "/endpoints/abc/def",
            "/other/my-service",
            "",
        ] {
            assert!(
                extract_identifier(path).is_err(),
                "expected {path:?} to be rejected"
            );
        }
    }

    #[test]
    fn identifier_is_returned_as_given() {
        // No trimming or folding on the capture
        assert_eq!(
            extract_identifier("/endpoints/my-service").unwrap(),
            "my-service"
        );
    }

    #[test]
    fn error_carries_path_and_pattern() {
        let err = extract_identifier("/endpoints/Not_Valid").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("/endpoints/Not_Valid"));
        assert!(message.contains(IDENTIFIER_PATTERN));
    }
}
