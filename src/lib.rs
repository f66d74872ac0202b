//! devdash - a terminal dashboard for the DevOps learning API
//!
//! Shows API health, a shared counter and the user list, with a form for
//! adding users. This library exposes modules for use in integration tests
//! and benchmarks.

pub mod adapters;
pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod health_check;
pub mod logging;
pub mod models;
pub mod state;
pub mod terminal;
pub mod traits;
pub mod ui;
