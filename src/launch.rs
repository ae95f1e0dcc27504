// SPDX-License-Identifier: MIT
//! The final handoff: build the server command from a validated context
//! and replace the launcher process with it. On Unix this is a true exec,
//! so the server inherits the terminal and signal context directly and
//! the shell observes the server's exit code, not the launcher's.

use std::ffi::OsString;
use std::path::PathBuf;

use crate::browser;
use crate::config::{BootstrapContext, APP_SPEC};
use crate::error::BootstrapError;

/// Delay before the detached opener points the browser at the server.
const BROWSER_DELAY_SECS: u32 = 2;

/// Everything needed to start the server. Built by the pipeline, executed
/// by `main` — keeping the handoff inspectable right up to the exec.
#[derive(Debug)]
pub struct LaunchPlan {
    pub program: PathBuf,
    pub args: Vec<OsString>,
    pub cwd: PathBuf,
    pub host: String,
    pub port: u16,
    pub url: String,
}

impl LaunchPlan {
    pub fn new(ctx: &BootstrapContext) -> Self {
        let args: Vec<OsString> = vec![
            "-m".into(),
            "uvicorn".into(),
            APP_SPEC.into(),
            "--host".into(),
            ctx.host.clone().into(),
            "--port".into(),
            ctx.port.to_string().into(),
        ];
        Self {
            program: ctx.interpreter.command.clone(),
            args,
            cwd: ctx.backend_dir.clone(),
            host: ctx.host.clone(),
            port: ctx.port,
            url: ctx.url(),
        }
    }

    /// Schedule the browser open, then hand the process over to the
    /// server. Returns only if the handoff itself failed.
    pub fn execute(self) -> BootstrapError {
        browser::schedule_open(&self.url, BROWSER_DELAY_SECS);
        self.exec()
    }

    #[cfg(unix)]
    fn exec(self) -> BootstrapError {
        use std::os::unix::process::CommandExt as _;
        let err = std::process::Command::new(&self.program)
            .args(&self.args)
            .current_dir(&self.cwd)
            .exec();
        // exec only returns on failure.
        BootstrapError::LaunchFailed {
            detail: err.to_string(),
        }
    }

    #[cfg(windows)]
    fn exec(self) -> BootstrapError {
        // No exec on Windows: run the server as a child, mirror its exit
        // code, and never resume our own continuation.
        let status = std::process::Command::new(&self.program)
            .args(&self.args)
            .current_dir(&self.cwd)
            .status();
        match status {
            Ok(status) => std::process::exit(status.code().unwrap_or(1)),
            Err(e) => BootstrapError::LaunchFailed {
                detail: e.to_string(),
            },
        }
    }
}
