// Fetch-lifecycle state machine.
// Loading is the initial state; Ready and Failed are both terminal for the
// activation. There is no retry: one fetch per session.

use crate::api::User;
use crate::error::Result;

/// Fixed user-facing message for any load failure. The underlying cause is
/// recorded to diagnostics, never shown here.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch users. Please try again later.";

/// Status of the one startup fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Loading,
    Ready,
    Failed(String),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, LoadState::Ready)
    }

    /// Collapse a fetch outcome into the terminal state, returning the
    /// payload on success and the underlying cause on failure so the caller
    /// can record it for diagnostics.
    pub fn resolve(outcome: Result<Vec<User>>) -> (Self, Vec<User>, Option<String>) {
        match outcome {
            Ok(users) => (LoadState::Ready, users, None),
            Err(cause) => (
                LoadState::Failed(FETCH_FAILED_MESSAGE.to_string()),
                Vec::new(),
                Some(cause.to_string()),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RosterError;

    fn sample_users() -> Vec<User> {
        let user: User =
            serde_json::from_str(crate::api::types::tests::SAMPLE_USER_JSON).unwrap();
        let mut second = user.clone();
        second.id = 2;
        second.name = "Ervin Howell".to_string();
        vec![user, second]
    }

    #[test]
    fn test_initial_state_is_loading() {
        assert!(LoadState::default().is_loading());
    }

    #[test]
    fn test_resolve_success_preserves_payload_order() {
        let users = sample_users();
        let (state, loaded, cause) = LoadState::resolve(Ok(users.clone()));
        assert!(state.is_ready());
        assert_eq!(loaded, users);
        assert!(cause.is_none());
    }

    #[test]
    fn test_resolve_failure_yields_fixed_message_and_empty_collection() {
        let err = RosterError::Status {
            status: 503,
            url: "https://jsonplaceholder.typicode.com/users".to_string(),
        };
        let (state, loaded, cause) = LoadState::resolve(Err(err));
        assert_eq!(state, LoadState::Failed(FETCH_FAILED_MESSAGE.to_string()));
        assert!(loaded.is_empty());
        // The raw cause is preserved for diagnostics, not for display.
        assert!(cause.unwrap().contains("503"));
    }
}
