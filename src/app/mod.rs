//! Application state and logic for the TUI.
//!
//! [`App`] owns the [`DashboardState`] and is its only writer. Backend calls
//! run on spawned tokio tasks which report back through [`AppMessage`]s; the
//! event loop feeds those to [`App::handle_message`]. This keeps every store
//! write on the event loop without any locking.

mod handlers;
mod input;
mod messages;
mod settle;
mod types;

pub use messages::AppMessage;
pub use settle::SettleGuard;
pub use types::Focus;

use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::api::DashboardApi;
use crate::state::DashboardState;

/// Main application state
pub struct App {
    /// The dashboard store rendered every frame
    pub state: DashboardState,
    /// Current keyboard focus
    pub focus: Focus,
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Set whenever visible state changes; cleared after a draw
    pub needs_redraw: bool,
    /// Tick counter for animations (loading spinner)
    pub tick_count: u64,
    /// Receiver for settlement messages (taken by the event loop)
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender for settlement messages (cloned into request tasks)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Backend client shared across request tasks
    pub api: Arc<DashboardApi>,
    mounted: bool,
}

impl App {
    pub fn new(api: Arc<DashboardApi>) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            state: DashboardState::new(),
            focus: Focus::default(),
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
            message_rx: Some(message_rx),
            message_tx,
            api,
            mounted: false,
        }
    }

    /// Base URL the dashboard talks to.
    pub fn api_url(&self) -> &str {
        self.api.base_url()
    }

    /// Get a clone of the message sender for passing to async tasks
    pub fn message_sender(&self) -> mpsc::UnboundedSender<AppMessage> {
        self.message_tx.clone()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Initial load: health, users and counter, each on its own task with no
    /// ordering and no join. Runs once; later calls return `false`.
    pub fn mount(&mut self) -> bool {
        if self.mounted {
            return false;
        }
        self.mounted = true;
        info!(api_url = %self.api_url(), "mounting dashboard");

        self.fetch_health();
        self.fetch_users();
        self.fetch_counter();
        true
    }

    pub fn fetch_health(&self) {
        let guard = SettleGuard::new(self.message_sender(), AppMessage::HealthFetched);
        let api = Arc::clone(&self.api);
        tokio::spawn(async move {
            guard.settle(api.health().await);
        });
    }

    /// Raises `loading` before the request leaves; the settlement clears it.
    pub fn fetch_users(&mut self) {
        self.state.begin_users_fetch();
        self.mark_dirty();

        let guard = SettleGuard::new(self.message_sender(), AppMessage::UsersFetched);
        let api = Arc::clone(&self.api);
        tokio::spawn(async move {
            guard.settle(api.users().await);
        });
    }

    pub fn fetch_counter(&self) {
        let guard = SettleGuard::new(self.message_sender(), AppMessage::CounterFetched);
        let api = Arc::clone(&self.api);
        tokio::spawn(async move {
            guard.settle(api.counter().await);
        });
    }

    /// Always allowed, even while a previous increment is in flight.
    pub fn increment_counter(&self) {
        let guard = SettleGuard::new(self.message_sender(), AppMessage::CounterIncremented);
        let api = Arc::clone(&self.api);
        tokio::spawn(async move {
            guard.settle(api.increment_counter().await);
        });
    }

    /// Submit the draft. An incomplete draft is ignored: no request, no
    /// state change. Returns whether a request was issued.
    pub fn add_user(&mut self) -> bool {
        if !self.state.draft.is_complete() {
            debug!("add_user ignored: draft incomplete");
            return false;
        }

        let draft = self.state.draft.clone();
        let guard = SettleGuard::new(self.message_sender(), AppMessage::UserAdded);
        let api = Arc::clone(&self.api);
        tokio::spawn(async move {
            guard.settle(api.create_user(&draft).await);
        });
        true
    }

    /// Mark the app as needing a redraw
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Advance animations. Only the loading spinner moves, so idle ticks do
    /// not force a redraw.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.state.loading {
            self.mark_dirty();
        }
    }
}
