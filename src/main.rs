//! Leadgen TUI binary: terminal setup and the event loop

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use leadgen_tui::app::App;
use leadgen_tui::config::TuiConfig;
use leadgen_tui::controller::SubmissionController;
use leadgen_tui::sink::{LeadSink, WebhookClient};
use leadgen_tui::state::FormStore;
use leadgen_tui::ui;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "leadgen_tui=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = TuiConfig::load()?;
    let client = WebhookClient::from_config(&config)?;
    tracing::info!(endpoint = %client.endpoint(), "posting leads to webhook");

    let store = Arc::new(FormStore::new());
    let controller = Arc::new(SubmissionController::new(store, client));
    let mut app = App::new(controller);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

async fn run_app<B, S>(terminal: &mut Terminal<B>, app: &mut App<S>) -> Result<()>
where
    B: ratatui::backend::Backend,
    S: LeadSink + 'static,
{
    loop {
        // Pick up store and submission changes before drawing
        app.sync();

        terminal.draw(|frame| ui::draw(frame, app))?;

        // Poll faster while a submission is in flight so the result shows promptly
        let poll_duration = if app.submission.is_submitting() {
            std::time::Duration::from_millis(16)
        } else {
            std::time::Duration::from_millis(100)
        };

        if event::poll(poll_duration)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key)?;
                }
            }
        }

        // Let the spawned submission make progress between frames
        tokio::task::yield_now().await;

        if app.should_quit() {
            return Ok(());
        }
    }
}
