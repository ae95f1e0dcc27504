// SPDX-License-Identifier: MIT
//! User-facing terminal surface: prefixed progress lines and the
//! pause-before-exit that keeps diagnostics visible when the launcher was
//! started by double-click and the window would otherwise vanish.

use std::fmt::Display;
use std::io::IsTerminal as _;

use crate::error::BootstrapError;

pub fn info(msg: impl Display) {
    println!("[INFO] {msg}");
}

/// Print the error and its remediation hint on stderr.
pub fn error(err: &BootstrapError) {
    eprintln!("[ERROR] {err}");
    if let Some(hint) = err.remediation() {
        eprintln!("[ERROR] fix: {hint}");
    }
}

/// Block on a single keypress — but only when a human is attached.
/// Non-interactive callers (CI, scripts, pipes) fall straight through.
pub fn pause_for_ack() {
    if !std::io::stdin().is_terminal() {
        return;
    }
    eprintln!("Press any key to exit...");
    if crossterm::terminal::enable_raw_mode().is_err() {
        return;
    }
    loop {
        match crossterm::event::read() {
            Ok(crossterm::event::Event::Key(_)) | Err(_) => break,
            Ok(_) => continue,
        }
    }
    let _ = crossterm::terminal::disable_raw_mode();
}
