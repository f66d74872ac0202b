//! Message handling for the App.

use tracing::{info, warn};

use super::{App, AppMessage};

impl App {
    /// Apply a request settlement to the store.
    /// Every message changes something visible, so the app is marked dirty.
    pub fn handle_message(&mut self, msg: AppMessage) {
        self.mark_dirty();

        let operation = msg.operation();
        match msg {
            AppMessage::HealthFetched(result) => {
                match &result {
                    Ok(snapshot) => info!(
                        redis = %snapshot.backing_store,
                        uptime = snapshot.uptime_secs,
                        "API connected"
                    ),
                    Err(e) => warn!(%operation, error = %e, "API health check failed"),
                }
                self.state.apply_health(result);
            }
            AppMessage::UsersFetched(result) => {
                match &result {
                    Ok(users) => info!(count = users.len(), "users loaded"),
                    Err(e) => warn!(%operation, error = %e, "failed to fetch users"),
                }
                self.state.apply_users(result);
            }
            AppMessage::CounterFetched(result) => {
                if let Err(e) = &result {
                    warn!(%operation, error = %e, "Counter not available");
                }
                self.state.apply_counter(result);
            }
            AppMessage::CounterIncremented(result) => {
                match &result {
                    Ok(Some(value)) => info!(counter = value, "counter incremented"),
                    Ok(None) => warn!("increment response carried no counter; bumping local copy"),
                    Err(e) => warn!(%operation, error = %e, "failed to increment counter"),
                }
                self.state.apply_increment(result);
            }
            AppMessage::UserAdded(result) => {
                match &result {
                    Ok(user) => info!(id = %user.id, "user added"),
                    Err(e) => warn!(%operation, error = %e, "failed to add user"),
                }
                self.state.apply_user_added(result);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::DashboardApi;
    use crate::adapters::mock::MockHttpClient;
    use crate::error::ApiError;
    use crate::models::{HealthSnapshot, User};
    use crate::state::Operation;
    use crate::traits::HttpError;
    use std::sync::Arc;

    fn app() -> App {
        App::new(Arc::new(DashboardApi::new(
            "http://dash.test",
            Arc::new(MockHttpClient::new()),
        )))
    }

    fn refused() -> ApiError {
        ApiError::Transport(HttpError::ConnectionFailed("refused".to_string()))
    }

    #[test]
    fn test_later_failure_owns_the_banner() {
        let mut app = app();

        app.handle_message(AppMessage::UsersFetched(Err(refused())));
        app.handle_message(AppMessage::CounterIncremented(Err(refused())));

        assert_eq!(app.state.error.operation(), Some(Operation::IncrementCounter));
        assert_eq!(app.state.error_message(), Some("Failed to increment counter"));
    }

    #[test]
    fn test_health_success_after_failure_clears_banner() {
        let mut app = app();
        app.handle_message(AppMessage::UserAdded(Err(ApiError::Rejected)));

        app.handle_message(AppMessage::HealthFetched(Ok(HealthSnapshot::new("connected", 1.0))));

        assert!(app.state.is_connected());
        assert_eq!(app.state.error_message(), None);
    }

    #[test]
    fn test_counter_failure_leaves_banner_alone() {
        let mut app = app();
        app.handle_message(AppMessage::HealthFetched(Err(refused())));
        let before = app.state.error.current().cloned();

        app.handle_message(AppMessage::CounterFetched(Err(refused())));

        assert_eq!(app.state.error.current().cloned(), before);
    }

    #[test]
    fn test_messages_mark_dirty() {
        let mut app = app();
        app.needs_redraw = false;

        app.handle_message(AppMessage::UsersFetched(Ok(vec![User::new(1, "Ana", "a@x.com")])));

        assert!(app.needs_redraw);
        assert_eq!(app.state.users.len(), 1);
    }
}
