// SPDX-License-Identifier: MIT
//! The bootstrap pipeline: resolver → preconditions → provisioner →
//! port guard → launch plan. Strictly sequential; the first failing stage
//! aborts the run. No stage mutates anything persistent before the
//! provisioner, and the provisioner itself is idempotent, so there is
//! nothing to roll back.

use std::path::Path;

use crate::config::BootstrapContext;
use crate::error::BootstrapError;
use crate::launch::LaunchPlan;
use crate::port::PortProbe;
use crate::runner::CommandRunner;
use crate::term;
use crate::{deps, preflight, python};

/// Run stages 1–4 and return the validated launch plan for stage 5.
pub fn run(
    project_root: &Path,
    host: &str,
    port: u16,
    runner: &dyn CommandRunner,
    port_probe: &dyn PortProbe,
) -> Result<LaunchPlan, BootstrapError> {
    let backend_dir = project_root.join(crate::config::BACKEND_DIR);

    let interpreter = python::resolve(project_root, &backend_dir, runner)?;
    term::info(format!(
        "using {} ({})",
        interpreter.command.display(),
        interpreter.version
    ));

    let ctx = BootstrapContext::new(project_root.to_path_buf(), host, port, interpreter);

    preflight::run(preflight::standard_checks(&ctx, runner))?;
    term::info("preconditions ok");

    if deps::ensure_server_dependency(&ctx, runner)? {
        term::info("server dependencies installed");
    } else {
        term::info("server dependencies already satisfied");
    }

    port_probe.check(&ctx.host, ctx.port)?;

    Ok(LaunchPlan::new(&ctx))
}
