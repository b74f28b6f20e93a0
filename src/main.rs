// roster: terminal browser for a remote user directory.
// One fetch per session, performed on a background task so the loading state
// renders while the request is in flight. The event loop drains the fetch
// outcome, handles input, and keeps mouse capture scoped to the detail view.

mod api;
mod app;
mod diagnostics;
mod error;
mod state;
mod ui;

use std::io::{self, stdout};
use std::time::Duration;

use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc;

use crate::api::{ApiClient, User};
use crate::app::App;
use crate::error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen, DisableMouseCapture);
        default_hook(info);
    }));

    // Spawn the one startup fetch.
    let (fetch_tx, fetch_rx) = mpsc::channel::<Result<Vec<User>>>(1);
    let fetch_handle = tokio::spawn(async move {
        let outcome = match ApiClient::new() {
            Ok(client) => client.fetch_users().await,
            Err(e) => Err(e),
        };
        let _ = fetch_tx.send(outcome).await;
    });

    let mut app = App::new();

    // Setup terminal
    enable_raw_mode()?;
    let mut out = stdout();
    execute!(out, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(out);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app, fetch_rx);

    // Cancel an in-flight fetch so nothing runs past teardown.
    fetch_handle.abort();

    // Restore terminal. Mouse capture is released unconditionally in case
    // the app exited while the detail view was open.
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

/// Main event loop.
fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    mut fetch_rx: mpsc::Receiver<Result<Vec<User>>>,
) -> Result<()> {
    let mut mouse_captured = false;

    while !app.should_quit {
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Drain the fetch outcome (non-blocking).
        while let Ok(outcome) = fetch_rx.try_recv() {
            app.on_fetch_outcome(outcome);
        }

        if event::poll(Duration::from_millis(100))? {
            app.on_event(&event::read()?);
        }

        // Mouse events are captured only while the detail view is open, and
        // released on every close path.
        let want_capture = app.directory.detail_open();
        if want_capture != mouse_captured {
            if want_capture {
                execute!(terminal.backend_mut(), EnableMouseCapture)?;
            } else {
                execute!(terminal.backend_mut(), DisableMouseCapture)?;
            }
            mouse_captured = want_capture;
        }
    }

    Ok(())
}
