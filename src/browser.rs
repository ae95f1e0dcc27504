// SPDX-License-Identifier: MIT
//! Best-effort browser open. The opener runs in a detached child process
//! with a built-in delay so it fires after the server has come up — and
//! survives the exec handoff, which a thread would not. Its outcome is
//! never awaited or checked.

use std::process::{Command, Stdio};

use tracing::debug;

/// Schedule a browser open for `url` after roughly `delay_secs` seconds.
/// Spawn failures are swallowed: not opening a browser is cosmetic.
pub fn schedule_open(url: &str, delay_secs: u32) {
    let result = opener_command(url, delay_secs)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn();
    match result {
        Ok(child) => {
            // Deliberately not waited on.
            drop(child);
            debug!(url, delay_secs, "browser open scheduled");
        }
        Err(e) => debug!(url, err = %e, "browser open not scheduled"),
    }
}

#[cfg(target_os = "macos")]
fn opener_command(url: &str, delay_secs: u32) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg("-c")
        .arg(format!("sleep {delay_secs}; open '{url}'"));
    cmd
}

#[cfg(all(unix, not(target_os = "macos")))]
fn opener_command(url: &str, delay_secs: u32) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg("-c")
        .arg(format!("sleep {delay_secs}; xdg-open '{url}'"));
    cmd
}

#[cfg(windows)]
fn opener_command(url: &str, delay_secs: u32) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.arg("/C").arg(format!(
        "timeout /T {delay_secs} /NOBREAK >nul & start \"\" {url}"
    ));
    cmd
}
