//! Dashboard state store.
//!
//! One plain field per entity, each set independently. The `apply_*` methods
//! encode how a settled request changes the store; they are the only place
//! those rules live, so the TUI controller and the headless probe share them.

mod draft;
mod error_register;
mod operation;

pub use draft::{DraftField, DraftUser};
pub use error_register::{ErrorRecord, ErrorRegister};
pub use operation::Operation;

use crate::error::ApiError;
use crate::models::{HealthSnapshot, User};

#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    /// Last successful health probe; `None` means disconnected
    pub health: Option<HealthSnapshot>,
    /// Users in server order, locally created ones appended
    pub users: Vec<User>,
    /// Cached copy of the server-side counter
    pub counter: u64,
    /// True while a users fetch is outstanding
    pub loading: bool,
    /// Shared error banner
    pub error: ErrorRegister,
    /// Add-user form contents
    pub draft: DraftUser,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_connected(&self) -> bool {
        self.health.is_some()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.message()
    }

    pub fn apply_health(&mut self, result: Result<HealthSnapshot, ApiError>) {
        match result {
            Ok(snapshot) => {
                self.health = Some(snapshot);
                self.error.clear();
            }
            Err(_) => {
                self.health = None;
                self.error.record_failure(Operation::FetchHealth);
            }
        }
    }

    pub fn begin_users_fetch(&mut self) {
        self.loading = true;
    }

    /// Settle a users fetch. Clears `loading` on every path; a failure keeps
    /// the previous list.
    pub fn apply_users(&mut self, result: Result<Vec<User>, ApiError>) {
        self.loading = false;
        match result {
            Ok(users) => self.users = users,
            Err(_) => {
                self.error.record_failure(Operation::FetchUsers);
            }
        }
    }

    /// Counter fetch failures never reach the banner.
    pub fn apply_counter(&mut self, result: Result<u64, ApiError>) {
        if let Ok(value) = result {
            self.counter = value;
        }
    }

    /// `Ok(None)` is a success response without a counter: bump the cached
    /// value instead.
    pub fn apply_increment(&mut self, result: Result<Option<u64>, ApiError>) {
        match result {
            Ok(Some(value)) => self.counter = value,
            Ok(None) => self.counter = self.counter.saturating_add(1),
            Err(_) => {
                self.error.record_failure(Operation::IncrementCounter);
            }
        }
    }

    /// Append the created user and reset the form, or keep the form for a
    /// retry.
    pub fn apply_user_added(&mut self, result: Result<User, ApiError>) {
        match result {
            Ok(user) => {
                self.users.push(user);
                self.draft.clear();
            }
            Err(_) => {
                self.error.record_failure(Operation::AddUser);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::HttpError;

    fn refused() -> ApiError {
        ApiError::Transport(HttpError::ConnectionFailed("refused".to_string()))
    }

    #[test]
    fn test_health_success_clears_error() {
        let mut state = DashboardState::new();
        state.error.record_failure(Operation::AddUser);

        state.apply_health(Ok(HealthSnapshot::new("connected", 3.0)));

        assert!(state.is_connected());
        assert_eq!(state.error_message(), None);
    }

    #[test]
    fn test_health_failure_disconnects() {
        let mut state = DashboardState::new();
        state.apply_health(Ok(HealthSnapshot::new("connected", 3.0)));

        state.apply_health(Err(refused()));

        assert!(!state.is_connected());
        assert_eq!(state.error_message(), Some("Failed to connect to API"));
    }

    #[test]
    fn test_users_failure_keeps_list_and_clears_loading() {
        let mut state = DashboardState::new();
        state.users = vec![User::new(1, "Ana", "a@x.com")];
        state.begin_users_fetch();
        assert!(state.loading);

        state.apply_users(Err(refused()));

        assert!(!state.loading);
        assert_eq!(state.users.len(), 1);
        assert_eq!(state.error_message(), Some("Failed to fetch users"));
    }

    #[test]
    fn test_users_success_replaces_list() {
        let mut state = DashboardState::new();
        state.users = vec![User::new(1, "Ana", "a@x.com")];
        state.begin_users_fetch();

        state.apply_users(Ok(vec![]));

        assert!(!state.loading);
        assert!(state.users.is_empty());
    }

    #[test]
    fn test_counter_failure_is_silent() {
        let mut state = DashboardState::new();
        state.counter = 4;
        state.error.record_failure(Operation::FetchUsers);
        let writes = state.error.writes();

        state.apply_counter(Err(refused()));

        assert_eq!(state.counter, 4);
        assert_eq!(state.error.writes(), writes);
        assert_eq!(state.error_message(), Some("Failed to fetch users"));
    }

    #[test]
    fn test_increment_rules() {
        let mut state = DashboardState::new();
        state.counter = 41;

        state.apply_increment(Ok(Some(7)));
        assert_eq!(state.counter, 7);

        state.apply_increment(Ok(None));
        assert_eq!(state.counter, 8);

        state.apply_increment(Err(refused()));
        assert_eq!(state.counter, 8);
        assert_eq!(state.error_message(), Some("Failed to increment counter"));
    }

    #[test]
    fn test_user_added_appends_and_clears_draft() {
        let mut state = DashboardState::new();
        state.users = vec![User::new(1, "Ana", "a@x.com")];
        state.draft = DraftUser::new("Bo", "b@x.com");

        state.apply_user_added(Ok(User::new(2, "Bo", "b@x.com")));

        assert_eq!(state.users.last(), Some(&User::new(2, "Bo", "b@x.com")));
        assert_eq!(state.draft, DraftUser::default());
    }

    #[test]
    fn test_user_add_failure_keeps_draft() {
        let mut state = DashboardState::new();
        state.draft = DraftUser::new("Bo", "b@x.com");

        state.apply_user_added(Err(ApiError::Rejected));

        assert!(state.users.is_empty());
        assert_eq!(state.draft, DraftUser::new("Bo", "b@x.com"));
        assert_eq!(state.error_message(), Some("Failed to add user"));
    }
}
