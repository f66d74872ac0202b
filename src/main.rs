use devdash::api::DashboardApi;
use devdash::app::{App, AppMessage};
use devdash::cli::{parse_args, run_cli_command, USAGE};
use devdash::config::DashboardConfig;
use devdash::logging::init_file_logging;
use devdash::terminal::{setup_panic_hook, TerminalManager};
use devdash::ui;

use color_eyre::Result;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use ratatui::Terminal;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{error, info};

/// Animation tick (loading spinner)
const TICK_RATE: Duration = Duration::from_millis(100);

fn main() -> Result<()> {
    color_eyre::install()?;

    // Handle CLI flags before any TUI initialization
    let command = match parse_args(std::env::args()) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("Error: {}\n\n{}", e, USAGE);
            std::process::exit(2);
        }
    };
    if let Some(result) = run_cli_command(&command) {
        if let Err(e) = result {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
        std::process::exit(0);
    }

    let config = DashboardConfig::resolve(command.api_url())?;
    let log_path = init_file_logging(&config)?;
    info!(
        version = env!("CARGO_PKG_VERSION"),
        api_url = %config.api_url,
        log_file = %log_path.display(),
        "starting dashboard"
    );

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;
    let api = Arc::new(DashboardApi::with_reqwest(config.api_url.clone()));
    let mut app = App::new(api);

    let mut term_manager = TerminalManager::new()?;
    let result = runtime.block_on(run_app(term_manager.terminal(), &mut app));

    // Restore terminal before any error is printed
    term_manager.restore()?;

    match &result {
        Ok(()) => info!("dashboard exited"),
        Err(e) => error!(error = %e, "dashboard exited with error"),
    }
    result
}

/// Main event loop.
///
/// Multiplexes terminal events, request settlements and the animation tick.
/// Only this loop mutates `app`, so store writes are serialized.
async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    // Create async event stream for keyboard input
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    app.mount();

    loop {
        // Draw the UI only when needed
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }

        if app.should_quit {
            return Ok(());
        }

        let timeout = tokio::time::sleep(TICK_RATE);

        tokio::select! {
            _ = timeout => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) => app.handle_key(key),
                    Some(Ok(Event::Paste(text))) => app.handle_paste(&text),
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        error!(error = %e, "terminal event stream failed");
                        return Err(e.into());
                    }
                    // Stream closed; nothing more can reach us
                    None => return Ok(()),
                }
            }

            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }
        }
    }
}
