//! Session-scoped state: the growable employee-name list.
//!
//! The list survives re-renders within one user session and nothing else.
//! It is an explicit context object: the hosting layer keeps it alive between
//! renders (however it scopes sessions) and passes it into
//! [`build_record`](crate::record::build_record). The library never reaches
//! into ambient global storage, and it assumes the host serializes requests
//! per session.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionState {
    pub employee_names: Vec<String>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an employee name to the session list.
    ///
    /// Empty or whitespace-only names are a no-op and return `false`. Names
    /// are stored untrimmed and duplicates are kept.
    pub fn append_employee_name(&mut self, name: &str) -> bool {
        if name.trim().is_empty() {
            return false;
        }
        self.employee_names.push(name.to_string());
        true
    }
}

/// List-in/list-out form of [`SessionState::append_employee_name`], for
/// callers that treat the session list as an owned value.
pub fn append_employee_name(mut names: Vec<String>, name: &str) -> Vec<String> {
    if !name.trim().is_empty() {
        names.push(name.to_string());
    }
    names
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_ignores_empty_and_whitespace() {
        let mut session = SessionState::new();
        assert!(!session.append_employee_name(""));
        assert!(!session.append_employee_name("   "));
        assert!(!session.append_employee_name("\t\n"));
        assert!(session.employee_names.is_empty());
    }

    #[test]
    fn test_append_preserves_order() {
        let mut session = SessionState::new();
        assert!(session.append_employee_name("Alex"));
        assert!(!session.append_employee_name(""));
        assert!(session.append_employee_name("Sam"));
        assert_eq!(session.employee_names, vec!["Alex", "Sam"]);
    }

    #[test]
    fn test_append_keeps_duplicates_untrimmed() {
        let mut session = SessionState::new();
        session.append_employee_name("Alex");
        session.append_employee_name("Alex");
        session.append_employee_name("  Sam  ");
        assert_eq!(session.employee_names, vec!["Alex", "Alex", "  Sam  "]);
    }

    #[test]
    fn test_value_form_matches_method() {
        let names = append_employee_name(vec!["Alex".into()], "Sam");
        assert_eq!(names, vec!["Alex", "Sam"]);

        let unchanged = append_employee_name(vec!["Alex".into()], "  ");
        assert_eq!(unchanged, vec!["Alex"]);
    }

    #[test]
    fn test_serde_round_trip() {
        let mut session = SessionState::new();
        session.append_employee_name("Alex");
        session.append_employee_name("Sam");

        let json = serde_json::to_string(&session).unwrap();
        let restored: SessionState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, session);
    }

    #[test]
    fn test_deserialize_missing_field_defaults_empty() {
        let restored: SessionState = serde_json::from_str("{}").unwrap();
        assert!(restored.employee_names.is_empty());
    }
}
