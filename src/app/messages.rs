//! AppMessage enum for async communication within the application.

use crate::error::ApiError;
use crate::models::{HealthSnapshot, User};

/// Settlement of a spawned backend request. Tasks never touch the store
/// directly; the event loop applies these in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum AppMessage {
    /// `GET /health` settled
    HealthFetched(Result<HealthSnapshot, ApiError>),
    /// `GET /users` settled
    UsersFetched(Result<Vec<User>, ApiError>),
    /// `GET /counter` settled
    CounterFetched(Result<u64, ApiError>),
    /// `POST /counter/increment` settled
    CounterIncremented(Result<Option<u64>, ApiError>),
    /// `POST /users` settled
    UserAdded(Result<User, ApiError>),
}

impl AppMessage {
    /// The operation this message settles.
    pub fn operation(&self) -> crate::state::Operation {
        use crate::state::Operation;
        match self {
            AppMessage::HealthFetched(_) => Operation::FetchHealth,
            AppMessage::UsersFetched(_) => Operation::FetchUsers,
            AppMessage::CounterFetched(_) => Operation::FetchCounter,
            AppMessage::CounterIncremented(_) => Operation::IncrementCounter,
            AppMessage::UserAdded(_) => Operation::AddUser,
        }
    }
}
