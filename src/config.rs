// SPDX-License-Identifier: MIT
//! Fixed launch constants and the per-run bootstrap context.
//!
//! Everything here is a script-time constant: no flags, no environment
//! variables, no config file. Edit the source to change the port.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};

use crate::python::Interpreter;

/// Address the server binds to. Loopback only — this is a local tool.
pub const HOST: &str = "127.0.0.1";
/// Port the server binds to.
pub const PORT: u16 = 8000;

/// Backend directory, relative to the project root.
pub const BACKEND_DIR: &str = "backend";
/// Server entry-point file, relative to the backend directory.
pub const ENTRY_POINT: &str = "app.py";
/// uvicorn application spec (`module:object`).
pub const APP_SPEC: &str = "app:app";
/// Dependency manifest, relative to the backend directory.
pub const MANIFEST: &str = "requirements.txt";
/// Question bank produced by the PDF importer, relative to the backend directory.
pub const DATA_ARTIFACT: &str = "data/passages.json";
/// Module whose importability proves the server dependencies are installed.
pub const SERVER_CAPABILITY: &str = "uvicorn";

/// Immutable per-run state, built once after interpreter resolution and
/// read by every later stage.
#[derive(Debug)]
pub struct BootstrapContext {
    pub project_root: PathBuf,
    pub backend_dir: PathBuf,
    pub host: String,
    pub port: u16,
    pub interpreter: Interpreter,
}

impl BootstrapContext {
    pub fn new(project_root: PathBuf, host: &str, port: u16, interpreter: Interpreter) -> Self {
        let backend_dir = project_root.join(BACKEND_DIR);
        Self {
            project_root,
            backend_dir,
            host: host.to_string(),
            port,
            interpreter,
        }
    }

    /// Absolute path to the server entry-point file.
    pub fn entry_point(&self) -> PathBuf {
        self.backend_dir.join(ENTRY_POINT)
    }

    /// Absolute path to the dependency manifest.
    pub fn manifest(&self) -> PathBuf {
        self.backend_dir.join(MANIFEST)
    }

    /// Absolute path to the question bank artifact.
    pub fn data_artifact(&self) -> PathBuf {
        self.backend_dir.join(DATA_ARTIFACT)
    }

    /// The URL the browser is pointed at once the server is up.
    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

/// Locate the project root: the current directory when it already contains
/// `backend/`, otherwise the directory the launcher binary itself lives in
/// (double-click launches start with an arbitrary cwd).
pub fn locate_project_root() -> Result<PathBuf> {
    let cwd = std::env::current_dir().context("cannot determine current directory")?;
    if cwd.join(BACKEND_DIR).is_dir() {
        return Ok(cwd);
    }
    let exe = std::env::current_exe().context("cannot determine launcher location")?;
    let exe_dir = exe
        .parent()
        .map(Path::to_path_buf)
        .context("launcher has no parent directory")?;
    if exe_dir.join(BACKEND_DIR).is_dir() {
        return Ok(exe_dir);
    }
    // Neither location has a backend/ — keep the cwd and let the
    // entry-point precondition report the actionable error.
    Ok(cwd)
}
