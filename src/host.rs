//! Helpers for programs embedding the picker
//!
//! The picker itself never touches terminal modes or exits the process.
//! Hosts use [`TerminalSession`] to own the screen for one run and
//! [`handle_cancel`] to turn a cancelled outcome into a process exit.

use std::io::{self, Stderr, Write};
use std::panic;
use std::sync::atomic::{AtomicBool, Ordering};

use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::crossterm::cursor::Show;
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};

use crate::error::PickerError;
use crate::input::TerminalInput;
use crate::picker::{Outcome, Picker};

/// Exit status used when the user cancels
pub const CANCEL_EXIT_CODE: i32 = 0;

static SESSION_ACTIVE: AtomicBool = AtomicBool::new(false);

/// Leave the alternate screen, show the cursor and disable raw mode
pub fn restore_terminal<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, LeaveAlternateScreen, Show)?;
    disable_raw_mode()
}

/// Chain a hook that restores the terminal before the current panic hook
///
/// Call after `color_eyre::install()` so the report prints on the normal
/// screen. Does nothing to the terminal unless a [`TerminalSession`] is live.
pub fn install_panic_hook() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        if SESSION_ACTIVE.swap(false, Ordering::SeqCst) {
            let _ = restore_terminal(&mut io::stderr());
        }
        previous(info);
    }));
}

/// Full-screen terminal drawn on stderr, restored on drop
///
/// Drawing on stderr keeps stdout free for the selection, so the host can be
/// used inside command substitution.
pub struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stderr>>,
}

impl TerminalSession {
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stderr = io::stderr();
        if let Err(e) = execute!(stderr, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e);
        }

        match Terminal::new(CrosstermBackend::new(stderr)) {
            Ok(terminal) => {
                SESSION_ACTIVE.store(true, Ordering::SeqCst);
                Ok(Self { terminal })
            }
            Err(e) => {
                let _ = execute!(io::stderr(), LeaveAlternateScreen);
                let _ = disable_raw_mode();
                Err(e)
            }
        }
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<CrosstermBackend<Stderr>> {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if SESSION_ACTIVE.swap(false, Ordering::SeqCst) {
            let _ = restore_terminal(self.terminal.backend_mut());
        }
    }
}

/// Run `picker` interactively against the real terminal
pub fn pick_interactive<T, R>(picker: Picker<T, R>) -> Result<Outcome<T, R>, PickerError> {
    let mut session = TerminalSession::enter()?;
    picker.run(session.terminal_mut(), &mut TerminalInput)
}

/// Call `exit` with [`CANCEL_EXIT_CODE`] if the user cancelled
///
/// Returns the outcome untouched otherwise. Hosts pass
/// `std::process::exit` to keep the classic "escape quits" behavior.
pub fn handle_cancel<T, R>(
    outcome: Outcome<T, R>,
    exit: impl FnOnce(i32),
) -> Option<Outcome<T, R>> {
    if outcome.is_cancelled() {
        log::debug!("Cancelled, exiting with status {}", CANCEL_EXIT_CODE);
        exit(CANCEL_EXIT_CODE);
        None
    } else {
        Some(outcome)
    }
}

/// Text a host prints for a finished session
pub fn format_selection<R: ToString>(outcome: &Outcome<String, R>, index_only: bool) -> Option<String> {
    match outcome {
        Outcome::Selected { index, .. } if index_only => Some(index.to_string()),
        Outcome::Selected { option, .. } => Some(option.clone()),
        Outcome::Custom(result) => Some(result.to_string()),
        Outcome::Cancelled => None,
    }
}

#[cfg(test)]
#[path = "host_tests.rs"]
mod host_tests;
