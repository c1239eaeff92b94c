use std::io::{self, Stdout, stdout};

use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::error::Result;

pub type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Raw mode on an alternate screen, with bracketed paste so a file path can
/// be pasted into the import prompt in one event.
pub fn setup_terminal() -> Result<AppTerminal> {
    enable_raw_mode()?;
    let mut out = stdout();
    crossterm::execute!(out, EnterAlternateScreen, EnableBracketedPaste)?;
    Ok(Terminal::new(CrosstermBackend::new(out))?)
}

pub fn restore_terminal(terminal: &mut AppTerminal) -> Result<()> {
    leave(terminal.backend_mut())?;
    terminal.show_cursor()?;
    Ok(())
}

fn leave(out: &mut impl io::Write) -> io::Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(out, DisableBracketedPaste, LeaveAlternateScreen)
}

/// Puts the terminal back before the previous hook prints the panic.
pub fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = leave(&mut stdout());
        previous(info);
    }));
}
