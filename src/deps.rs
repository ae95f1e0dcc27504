// SPDX-License-Identifier: MIT
//! Idempotent dependency provisioning. The server capability is probed by
//! import each run — never cached — and the manifest is installed at most
//! once per run, only when the probe fails.

use std::ffi::OsString;

use tracing::debug;

use crate::config::{BootstrapContext, SERVER_CAPABILITY};
use crate::error::BootstrapError;
use crate::runner::{render_command, CommandRunner};
use crate::term;

/// Ensure the server capability is importable. Returns `true` when an
/// install was performed, `false` when dependencies were already present.
pub fn ensure_server_dependency(
    ctx: &BootstrapContext,
    runner: &dyn CommandRunner,
) -> Result<bool, BootstrapError> {
    if capability_importable(ctx, runner) {
        debug!(
            capability = SERVER_CAPABILITY,
            "already importable, skipping install"
        );
        return Ok(false);
    }

    let mut args: Vec<OsString> = vec!["-m".into(), "pip".into(), "install".into()];
    if !ctx.interpreter.isolated {
        // System interpreter: stay in user scope so no admin rights are needed.
        args.push("--user".into());
    }
    args.push("-r".into());
    args.push(ctx.manifest().into_os_string());

    let command = render_command(&ctx.interpreter.command, &args);
    term::info(format!("installing server dependencies: {command}"));

    match runner.passthrough(&ctx.interpreter.command, &args, Some(&ctx.backend_dir)) {
        Ok(out) if out.success => Ok(true),
        Ok(out) => Err(BootstrapError::DependencyInstallFailed {
            command,
            code: out.code,
        }),
        Err(e) => {
            debug!(err = %e, "installer failed to spawn");
            Err(BootstrapError::DependencyInstallFailed {
                command,
                code: None,
            })
        }
    }
}

fn capability_importable(ctx: &BootstrapContext, runner: &dyn CommandRunner) -> bool {
    let args: Vec<OsString> = vec!["-c".into(), format!("import {SERVER_CAPABILITY}").into()];
    matches!(
        runner.capture(&ctx.interpreter.command, &args, Some(&ctx.backend_dir)),
        Ok(out) if out.success
    )
}
