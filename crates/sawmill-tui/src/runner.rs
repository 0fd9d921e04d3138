//! Main TUI runner - terminal lifecycle and event loop

use std::path::PathBuf;

use sawmill_core::prelude::*;

use crate::app::{App, Message};
use crate::{event, render};

/// Install a panic hook that restores the terminal before the panic
/// message is printed
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));
}

/// Run the viewer on the given log file until the user quits.
///
/// The terminal is restored on every exit path: normal quit, error, and
/// panic (via the hook).
pub fn run(log_path: PathBuf, entries_to_show: usize) -> Result<()> {
    install_panic_hook();

    let mut term = ratatui::init();
    let mut app = App::new(log_path, entries_to_show);

    // Parse once on startup so the viewer doesn't open empty
    app.update(Message::Reparse);

    let result = run_loop(&mut term, &mut app);
    ratatui::restore();

    if result.is_ok() {
        info!("viewer exited");
    }
    result
}

fn run_loop(term: &mut ratatui::DefaultTerminal, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        term.draw(|frame| render::view(frame, app))
            .map_err(|e| Error::terminal(e.to_string()))?;

        if let Some(msg) = event::poll()? {
            app.update(msg);
        }
    }
    Ok(())
}
