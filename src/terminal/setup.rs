//! Raw escape-sequence setup and teardown used by the terminal manager.

use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

pub fn enter_tui_mode<W: Write>(writer: &mut W) -> io::Result<()> {
    execute!(writer, EnterAlternateScreen)
}

/// Leave raw mode and the alternate screen and show the cursor.
///
/// Errors are ignored so this is safe to call more than once, including
/// from a panic hook.
pub fn leave_tui_mode<W: Write>(writer: &mut W) {
    let _ = disable_raw_mode();
    let _ = execute!(writer, LeaveAlternateScreen, Show);
    let _ = writer.flush();
}

/// Best-effort restore of stdout.
pub(crate) fn emergency_restore() {
    leave_tui_mode(&mut io::stdout());
}
