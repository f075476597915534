//! Ctrl+C handling for the password prompt.
//!
//! The hidden prompt turns terminal echo off, and a default SIGINT would
//! leave it that way. The handler puts the terminal back the way it was
//! before the prompt, says goodbye and exits cleanly.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};

static INTERRUPTED: AtomicBool = AtomicBool::new(false);

pub const EXIT_MESSAGE: &str = "Exiting.";

/// Records the interrupt and prints the exit notice.
pub fn on_interrupt<W: Write>(flag: &AtomicBool, out: &mut W) -> io::Result<()> {
    flag.store(true, Ordering::SeqCst);
    writeln!(out)?;
    writeln!(out, "{}", EXIT_MESSAGE)?;
    out.flush()
}

pub fn interrupted() -> bool {
    INTERRUPTED.load(Ordering::SeqCst)
}

/// Installs the Ctrl+C handler. Must run before the prompt disables echo.
pub fn install() -> Result<(), ctrlc::Error> {
    terminal::save();
    ctrlc::set_handler(|| {
        terminal::restore();
        let _ = on_interrupt(&INTERRUPTED, &mut io::stdout());
        std::process::exit(0);
    })
}

#[cfg(unix)]
mod terminal {
    use std::sync::OnceLock;

    static SAVED: OnceLock<libc::termios> = OnceLock::new();

    /// Snapshots the stdin terminal attributes, if stdin is a terminal.
    pub fn save() {
        // SAFETY: termios is plain data; tcgetattr fills it or fails.
        let mut attrs: libc::termios = unsafe { std::mem::zeroed() };
        if unsafe { libc::tcgetattr(libc::STDIN_FILENO, &mut attrs) } == 0 {
            let _ = SAVED.set(attrs);
        }
    }

    pub fn restore() {
        if let Some(attrs) = SAVED.get() {
            // SAFETY: attrs came from tcgetattr on the same descriptor.
            unsafe {
                libc::tcsetattr(libc::STDIN_FILENO, libc::TCSANOW, attrs);
            }
        }
    }
}

#[cfg(not(unix))]
mod terminal {
    pub fn save() {}

    pub fn restore() {}
}
