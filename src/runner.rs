// SPDX-License-Identifier: MIT
//! Subprocess seam. Every probe and install the pipeline performs goes
//! through [`CommandRunner`], so tests can script interpreter behavior
//! without a real Python installation.

use std::ffi::OsString;
use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

use tracing::debug;

/// Outcome of a finished subprocess.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub success: bool,
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// A successful run with no captured output (passthrough mode).
    pub fn ok() -> Self {
        Self {
            success: true,
            code: Some(0),
            stdout: String::new(),
            stderr: String::new(),
        }
    }
}

/// Runs external commands for the bootstrap stages.
pub trait CommandRunner {
    /// Run to completion with stdout/stderr captured. Used for probes
    /// (`--version`, `-m pip --version`, import checks).
    fn capture(
        &self,
        program: &Path,
        args: &[OsString],
        cwd: Option<&Path>,
    ) -> io::Result<CommandOutput>;

    /// Run to completion with stdio inherited from the launcher, so the
    /// user sees live output. Used for the dependency install.
    fn passthrough(
        &self,
        program: &Path,
        args: &[OsString],
        cwd: Option<&Path>,
    ) -> io::Result<CommandOutput>;
}

/// Production runner backed by `std::process::Command`.
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn capture(
        &self,
        program: &Path,
        args: &[OsString],
        cwd: Option<&Path>,
    ) -> io::Result<CommandOutput> {
        debug!(program = %program.display(), ?args, "probe");
        let mut cmd = Command::new(program);
        cmd.args(args).stdin(Stdio::null());
        if let Some(dir) = cwd {
            cmd.current_dir(dir);
        }
        let out = cmd.output()?;
        Ok(CommandOutput {
            success: out.status.success(),
            code: out.status.code(),
            stdout: String::from_utf8_lossy(&out.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&out.stderr).into_owned(),
        })
    }

    fn passthrough(
        &self,
        program: &Path,
        args: &[OsString],
        cwd: Option<&Path>,
    ) -> io::Result<CommandOutput> {
        debug!(program = %program.display(), ?args, "run");
        let mut cmd = Command::new(program);
        cmd.args(args);
        if let Some(dir) = cwd {
            cmd.current_dir(dir);
        }
        let status = cmd.status()?;
        Ok(CommandOutput {
            success: status.success(),
            code: status.code(),
            stdout: String::new(),
            stderr: String::new(),
        })
    }
}

/// Render a command line the user can paste into a shell. Arguments with
/// whitespace are quoted; this is for display, not re-parsing.
pub fn render_command(program: &Path, args: &[OsString]) -> String {
    let mut parts = vec![quote(&program.display().to_string())];
    parts.extend(args.iter().map(|a| quote(&a.to_string_lossy())));
    parts.join(" ")
}

fn quote(s: &str) -> String {
    if s.chars().any(char::is_whitespace) {
        format!("\"{s}\"")
    } else {
        s.to_string()
    }
}
