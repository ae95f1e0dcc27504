// SPDX-License-Identifier: MIT
//! Fatal bootstrap errors. Every variant signals a condition that needs a
//! human action; none are retried by the launcher itself.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    #[error("no usable Python interpreter found")]
    NoInterpreter,

    #[error("pip is not available for {interpreter}")]
    NoPackageManager { interpreter: String },

    #[error("server entry point not found: {path}")]
    MissingEntryPoint { path: PathBuf },

    #[error("question bank not found: {path}")]
    MissingDataArtifact { path: PathBuf },

    #[error("the server application failed to import:\n{detail}")]
    ApplicationImportFailed { detail: String },

    #[error("port {port} is already in use")]
    PortInUse { port: u16 },

    #[error("dependency install failed (exit code {})", .code.map_or_else(|| "unknown".to_string(), |c| c.to_string()))]
    DependencyInstallFailed {
        /// The exact command line the user can re-run manually.
        command: String,
        code: Option<i32>,
    },

    #[error("failed to start the server: {detail}")]
    LaunchFailed { detail: String },
}

impl BootstrapError {
    /// The exact human action that fixes this error, where one exists.
    pub fn remediation(&self) -> Option<String> {
        match self {
            Self::NoInterpreter => Some(
                "install Python 3 (https://www.python.org/downloads/) or create a \
                 virtual environment at backend/.venv"
                    .to_string(),
            ),
            Self::NoPackageManager { interpreter } => Some(format!(
                "reinstall Python with pip included, or run: {interpreter} -m ensurepip --upgrade"
            )),
            Self::MissingEntryPoint { .. } => Some(
                "run the launcher from the project root (the directory containing backend/)"
                    .to_string(),
            ),
            Self::MissingDataArtifact { .. } => Some(
                "generate the question bank first with the PDF importer: \
                 python importers/pdf_bank_importer.py <exam.pdf> (from the backend directory)"
                    .to_string(),
            ),
            Self::ApplicationImportFailed { .. } => Some(
                "fix the import error above, or reinstall dependencies: \
                 python -m pip install -r backend/requirements.txt"
                    .to_string(),
            ),
            Self::PortInUse { port } => Some(format!(
                "stop the process listening on port {port}, or change PORT in src/config.rs"
            )),
            Self::DependencyInstallFailed { command, .. } => {
                Some(format!("re-run the install manually: {command}"))
            }
            Self::LaunchFailed { .. } => None,
        }
    }

    /// Process exit code for this failure. Distinct per kind so scripts can
    /// tell them apart; a failed install propagates the installer's own code.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NoInterpreter => 2,
            Self::NoPackageManager { .. } => 3,
            Self::MissingEntryPoint { .. } => 4,
            Self::MissingDataArtifact { .. } => 5,
            Self::ApplicationImportFailed { .. } => 6,
            Self::DependencyInstallFailed { code, .. } => code.unwrap_or(7),
            Self::PortInUse { .. } => 8,
            Self::LaunchFailed { .. } => 9,
        }
    }
}
