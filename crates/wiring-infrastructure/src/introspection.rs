//! Signature-based parameter-name introspection
//!
//! Two identity shapes are understood:
//!
//! | Shape | Example | Names |
//! |-------|---------|-------|
//! | selector | `initWithUrl:timeout:` | `["url", "timeout"]` |
//! | call | `new(url, timeout: Duration)` | `["url", "timeout"]` |
//!
//! Identities with neither a `:` nor parentheses take no arguments.

use wiring_domain::RoutineId;
use wiring_domain::constants::SELECTOR_WITH_MARKER;
use wiring_domain::ports::ParameterNameIntrospector;

/// Derives parameter names from the routine identity itself
#[derive(Debug, Clone, Copy, Default)]
pub struct SignatureIntrospector;

impl ParameterNameIntrospector for SignatureIntrospector {
    fn parameter_names(&self, routine: &RoutineId) -> Option<Vec<String>> {
        let identity = routine.as_str().trim();
        if identity.is_empty() {
            return None;
        }

        if let Some(open) = identity.find('(') {
            return call_parameter_names(&identity[open + 1..]);
        }
        if identity.contains(':') {
            return selector_parameter_names(identity);
        }
        Some(Vec::new())
    }
}

/// `url, timeout: Duration)` → `["url", "timeout"]`
fn call_parameter_names(arguments: &str) -> Option<Vec<String>> {
    let inner = arguments.strip_suffix(')')?;
    let names = inner
        .split(',')
        .map(|argument| {
            let pattern = argument.split(':').next().unwrap_or_default().trim();
            pattern.trim_start_matches('&').trim_start_matches("mut ").trim()
        })
        .filter(|name| !name.is_empty() && *name != "self")
        .map(str::to_string)
        .collect();
    Some(names)
}

/// `initWithUrl:timeout:` → `["url", "timeout"]`
fn selector_parameter_names(selector: &str) -> Option<Vec<String>> {
    let mut pieces = selector.split(':').filter(|piece| !piece.is_empty());

    let first = pieces.next()?;
    let (_, head) = first.rsplit_once(SELECTOR_WITH_MARKER)?;
    if head.is_empty() {
        return None;
    }

    let mut names = vec![lower_first(head)];
    names.extend(pieces.map(str::to_string));
    Some(names)
}

fn lower_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
