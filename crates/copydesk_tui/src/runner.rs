//! TUI runner - main loop and studio integration.

use crate::{Action, App, Event, EventHandler, StatusKind, StatusNotifier};
use copydesk_error::{CopydeskResult, TuiError, TuiErrorKind, TuiResult};
use copydesk_interface::{TabularStore, TextGenerator};
use copydesk_studio::Studio;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{info, instrument};

type StudioTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Run the interactive studio until the user quits.
///
/// `notifier` must be the notifier the studio's generator reports to, so that
/// rate-limit notices reach the status bar while a submission is running.
#[instrument(skip_all)]
pub async fn run_studio<G, S>(
    studio: &Studio<G, S>,
    mut app: App,
    notifier: StatusNotifier,
) -> CopydeskResult<()>
where
    G: TextGenerator,
    S: TabularStore,
{
    let mut terminal = setup_terminal()?;
    let result = run_loop(&mut terminal, studio, &mut app, &notifier).await;
    restore_terminal(&mut terminal)?;
    result
}

fn setup_terminal() -> TuiResult<StudioTerminal> {
    enable_raw_mode().map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalSetup(format!(
            "Failed to enable raw mode: {}",
            e
        )))
    })?;
    let mut stdout = io::stdout();
    undo_on_error(
        execute!(stdout, EnterAlternateScreen),
        "Failed to setup terminal",
        || {
            let _ = disable_raw_mode();
        },
    )?;

    undo_on_error(
        Terminal::new(CrosstermBackend::new(stdout)),
        "Failed to create terminal",
        || {
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            let _ = disable_raw_mode();
        },
    )
}

/// Run `undo` before turning a failed setup step into a [`TuiError`].
fn undo_on_error<T>(result: io::Result<T>, context: &str, undo: impl FnOnce()) -> TuiResult<T> {
    result.map_err(|e| {
        undo();
        TuiError::new(TuiErrorKind::TerminalSetup(format!("{}: {}", context, e)))
    })
}

fn restore_terminal(terminal: &mut StudioTerminal) -> TuiResult<()> {
    disable_raw_mode().map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalRestore(format!(
            "Failed to disable raw mode: {}",
            e
        )))
    })?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen).map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalRestore(format!(
            "Failed to cleanup terminal: {}",
            e
        )))
    })?;
    terminal.show_cursor().map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalRestore(format!(
            "Failed to show cursor: {}",
            e
        )))
    })
}

fn draw(terminal: &mut StudioTerminal, app: &App) -> TuiResult<()> {
    terminal
        .draw(|f| crate::ui::draw(f, app))
        .map(|_| ())
        .map_err(|e| TuiError::new(TuiErrorKind::Draw(e.to_string())))
}

async fn run_loop<G, S>(
    terminal: &mut StudioTerminal,
    studio: &Studio<G, S>,
    app: &mut App,
    notifier: &StatusNotifier,
) -> CopydeskResult<()>
where
    G: TextGenerator,
    S: TabularStore,
{
    let events = EventHandler::new(250);

    app.set_history(studio.recent_history().await);

    while !app.should_quit {
        draw(terminal, app)?;

        let Some(Event::Key(key)) = events.next()? else {
            continue;
        };
        let Some(action) = app.handle_key(key) else {
            continue;
        };

        match action {
            Action::Submit(form) => {
                app.begin_submission();
                draw(terminal, app)?;

                let outcome = {
                    let submission = studio.submit(&form);
                    tokio::pin!(submission);
                    let mut ticker = tokio::time::interval(events.tick_rate());
                    loop {
                        tokio::select! {
                            outcome = &mut submission => break outcome,
                            _ = ticker.tick() => {
                                if let Some(notice) = notifier.drain().pop() {
                                    app.push_notice(notice);
                                }
                                draw(terminal, app)?;
                            }
                        }
                    }
                };
                notifier.drain();

                info!(success = outcome.is_success(), "Submission finished");
                app.apply_outcome(outcome);
                app.set_history(studio.recent_history().await);
            }
            Action::Export(index) => match app.variant_for_export(index) {
                Some((request, variant)) => match studio.export(request, variant) {
                    Ok(path) => {
                        let message = format!("Saved {}", path.display());
                        app.set_status(StatusKind::Success, message);
                    }
                    Err(err) => app.set_status(StatusKind::Error, err.to_string()),
                },
                None => app.set_status(StatusKind::Warning, "Nothing to export"),
            },
            Action::RefreshHistory => {
                app.set_history(studio.recent_history().await);
                app.set_status(StatusKind::Info, "History reloaded");
            }
        }
    }

    Ok(())
}
