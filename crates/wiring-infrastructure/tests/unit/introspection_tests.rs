//! Signature Introspection Tests

use wiring_domain::RoutineId;
use wiring_domain::ports::ParameterNameIntrospector;
use wiring_infrastructure::introspection::SignatureIntrospector;

fn names(identity: &str) -> Option<Vec<String>> {
    SignatureIntrospector.parameter_names(&RoutineId::new(identity))
}

#[test]
fn test_selector_identity() {
    assert_eq!(
        names("initWithUrl:timeout:"),
        Some(vec!["url".to_string(), "timeout".to_string()])
    );
    assert_eq!(
        names("clientWithBaseURL:"),
        Some(vec!["baseURL".to_string()])
    );
}

#[test]
fn test_selector_without_marker_is_not_derivable() {
    assert_eq!(names("setValue:"), None);
    assert_eq!(names("initWith:"), None);
}

#[test]
fn test_call_identity() {
    assert_eq!(
        names("new(url, timeout)"),
        Some(vec!["url".to_string(), "timeout".to_string()])
    );
    assert_eq!(
        names("with_pool(&self, pool: Pool, mut retries: u8)"),
        Some(vec!["pool".to_string(), "retries".to_string()])
    );
}

#[test]
fn test_zero_argument_identities() {
    assert_eq!(names("init"), Some(vec![]));
    assert_eq!(names("new()"), Some(vec![]));
    assert_eq!(names("default"), Some(vec![]));
}

#[test]
fn test_malformed_identities() {
    assert_eq!(names(""), None);
    assert_eq!(names("new(url"), None);
}
