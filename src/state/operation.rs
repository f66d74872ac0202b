//! The backend operations the dashboard performs, and the fixed banner
//! message each one writes on failure.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    FetchHealth,
    FetchUsers,
    FetchCounter,
    IncrementCounter,
    AddUser,
}

impl Operation {
    pub const ALL: [Operation; 5] = [
        Operation::FetchHealth,
        Operation::FetchUsers,
        Operation::FetchCounter,
        Operation::IncrementCounter,
        Operation::AddUser,
    ];

    /// User-facing failure text. `None` means failures of this operation are
    /// logged but never shown.
    pub fn failure_message(self) -> Option<&'static str> {
        match self {
            Operation::FetchHealth => Some("Failed to connect to API"),
            Operation::FetchUsers => Some("Failed to fetch users"),
            Operation::FetchCounter => None,
            Operation::IncrementCounter => Some("Failed to increment counter"),
            Operation::AddUser => Some("Failed to add user"),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Operation::FetchHealth => "fetch_health",
            Operation::FetchUsers => "fetch_users",
            Operation::FetchCounter => "fetch_counter",
            Operation::IncrementCounter => "increment_counter",
            Operation::AddUser => "add_user",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
