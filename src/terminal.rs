//! Raw-mode terminal setup and teardown for the TUI.

use std::io::{self, Stdout};
use std::panic;

use crossterm::{
    ExecutableCommand,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

pub type ArcadeTerminal = Terminal<CrosstermBackend<Stdout>>;

pub fn init() -> io::Result<ArcadeTerminal> {
    install_panic_hook();
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    tracing::debug!("terminal entered raw mode");
    Terminal::new(CrosstermBackend::new(io::stdout()))
}

pub fn restore() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    tracing::debug!("terminal restored");
    Ok(())
}

/// Leave raw mode before the default hook prints, so panics stay readable.
fn install_panic_hook() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = io::stdout().execute(LeaveAlternateScreen);
        tracing::error!(%info, "panic while the terminal was in raw mode");
        previous(info);
    }));
}
