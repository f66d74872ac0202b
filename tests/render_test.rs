//! Rendering tests using ratatui's TestBackend.
//!
//! Drives an `App` through real settlements and checks what lands on
//! screen.

mod common;

use common::*;
use devdash::adapters::mock::MockResponse;
use devdash::app::{App, Focus};
use devdash::state::DraftUser;
use devdash::traits::Method;
use devdash::ui;
use ratatui::{backend::TestBackend, Terminal};
use serde_json::json;

fn draw(app: &App, width: u16, height: u16) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| ui::render(f, app)).unwrap();

    let buffer = terminal.backend().buffer();
    (0..height)
        .map(|y| (0..width).map(|x| buffer[(x, y)].symbol()).collect())
        .collect()
}

fn contains(screen: &[String], needle: &str) -> bool {
    screen.iter().any(|row| row.contains(needle))
}

#[tokio::test]
async fn test_mounted_dashboard_screen() {
    let client = healthy_client();
    let (mut app, mut rx) = app_with(&client);
    app.mount();
    settle(&mut app, &mut rx, 3).await;

    let screen = draw(&app, 110, 32);

    assert!(contains(&screen, "DevOps Learning Dashboard"));
    assert!(contains(&screen, "● Connected"));
    assert!(contains(&screen, "API: http://dash.test"));
    assert!(contains(&screen, "Redis: connected"));
    assert!(contains(&screen, "Uptime: 126s"));
    assert!(contains(&screen, "Users (1)"));
    assert!(contains(&screen, "API URL: http://dash.test"));

    let row = screen.iter().find(|row| row.contains("Ana")).unwrap();
    assert!(row.contains("a@x.com"));

    // Counter panel lives in the left column
    let counter_shown = screen.iter().any(|row| {
        let left: String = row.chars().take(45).collect();
        left.trim_matches(|c: char| c == '│' || c.is_whitespace()) == "3"
    });
    assert!(counter_shown);
}

#[tokio::test]
async fn test_loading_indicator_while_users_pending() {
    let client = healthy_client();
    let (mut app, _rx) = app_with(&client);

    app.fetch_users();
    let screen = draw(&app, 110, 32);

    assert!(contains(&screen, "Loading..."));
    assert!(!contains(&screen, "No users found"));
}

#[tokio::test]
async fn test_unreachable_api_screen() {
    let client = unreachable_client();
    let (mut app, mut rx) = app_with(&client);
    app.mount();
    settle(&mut app, &mut rx, 3).await;

    let screen = draw(&app, 110, 32);

    assert!(contains(&screen, "● Disconnected"));
    assert!(contains(&screen, "Cannot connect to API at http://dash.test"));
    assert!(contains(&screen, "No users found"));
    let message = app.state.error_message().unwrap();
    assert!(contains(&screen, message));
}

#[tokio::test]
async fn test_typing_shows_in_form() {
    let client = healthy_client();
    let (mut app, _rx) = app_with(&client);
    app.focus = Focus::Email;
    app.handle_paste("bo@x.com");

    let screen = draw(&app, 110, 32);

    assert!(contains(&screen, "bo@x.com\u{2588}"));
    assert!(contains(&screen, "Enter to add user"));
}

#[tokio::test]
async fn test_failure_while_connected_shows_banner() {
    let client = healthy_client();
    client.set_method_response(
        Method::Post,
        &url("/users"),
        MockResponse::json(200, json!({"success": false})),
    );
    let (mut app, mut rx) = app_with(&client);
    app.mount();
    settle(&mut app, &mut rx, 3).await;

    app.state.draft = DraftUser::new("Bo", "b@x.com");
    app.add_user();
    settle(&mut app, &mut rx, 1).await;

    let screen = draw(&app, 110, 32);

    assert!(contains(&screen, "● Connected"));
    assert!(contains(&screen, "! Failed to add user"));
    assert_eq!(
        screen.iter().filter(|row| row.contains("Failed to add user")).count(),
        1
    );
}
