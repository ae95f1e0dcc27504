// SPDX-License-Identifier: MIT
//! Interpreter discovery. Project-local virtual environments win over
//! anything on PATH; the first candidate that exists and answers a
//! `--version` probe is selected.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::BootstrapError;
use crate::runner::CommandRunner;

/// One entry in the fixed-priority interpreter search order.
#[derive(Debug, Clone)]
pub struct InterpreterCandidate {
    /// Absolute venv path, or a bare command resolved on PATH.
    pub command: PathBuf,
    /// True for project-local virtual environments. Controls whether the
    /// dependency install later needs `--user` scoping.
    pub isolated: bool,
}

/// The selected interpreter, plus its identity string for diagnostics.
#[derive(Debug, Clone)]
pub struct Interpreter {
    pub command: PathBuf,
    pub isolated: bool,
    pub version: String,
}

/// The fixed search order: backend venv, project venv, `python3`, `python`.
pub fn candidates(project_root: &Path, backend_dir: &Path) -> Vec<InterpreterCandidate> {
    vec![
        InterpreterCandidate {
            command: venv_python(backend_dir),
            isolated: true,
        },
        InterpreterCandidate {
            command: venv_python(project_root),
            isolated: true,
        },
        InterpreterCandidate {
            command: PathBuf::from("python3"),
            isolated: false,
        },
        InterpreterCandidate {
            command: PathBuf::from("python"),
            isolated: false,
        },
    ]
}

/// Interpreter path inside a venv rooted at `dir`.
fn venv_python(dir: &Path) -> PathBuf {
    #[cfg(windows)]
    {
        dir.join(".venv").join("Scripts").join("python.exe")
    }
    #[cfg(not(windows))]
    {
        dir.join(".venv").join("bin").join("python")
    }
}

/// Select the first candidate that exists and is invocable, or fail with
/// [`BootstrapError::NoInterpreter`]. The accepted interpreter's version
/// string is captured for the startup diagnostic line.
pub fn resolve(
    project_root: &Path,
    backend_dir: &Path,
    runner: &dyn CommandRunner,
) -> Result<Interpreter, BootstrapError> {
    let version_args: Vec<OsString> = vec!["--version".into()];
    for cand in candidates(project_root, backend_dir) {
        // Venv paths are absolute; skip absent ones without spawning.
        if cand.isolated && !cand.command.is_file() {
            debug!(path = %cand.command.display(), "venv interpreter absent, skipping");
            continue;
        }
        match runner.capture(&cand.command, &version_args, None) {
            Ok(out) if out.success => {
                // Older Pythons print the version to stderr.
                let version = first_line(&out.stdout)
                    .or_else(|| first_line(&out.stderr))
                    .unwrap_or_else(|| "unknown version".to_string());
                return Ok(Interpreter {
                    command: cand.command,
                    isolated: cand.isolated,
                    version,
                });
            }
            Ok(out) => {
                debug!(path = %cand.command.display(), code = ?out.code, "version probe failed");
            }
            Err(e) => {
                debug!(path = %cand.command.display(), err = %e, "interpreter not invocable");
            }
        }
    }
    Err(BootstrapError::NoInterpreter)
}

fn first_line(s: &str) -> Option<String> {
    let line = s.lines().next()?.trim();
    if line.is_empty() {
        None
    } else {
        Some(line.to_string())
    }
}
