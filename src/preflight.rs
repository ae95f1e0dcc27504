// SPDX-License-Identifier: MIT
//! Pre-flight precondition checks, run strictly in declared order.
//!
//! Unlike a diagnostic report that evaluates everything, bootstrap aborts
//! on the first failure: the ordering goes from cheapest and most general
//! to most expensive and most specific, so the user always gets the most
//! actionable error first and no work is wasted on a doomed run.

use std::ffi::OsString;

use tracing::debug;

use crate::config::BootstrapContext;
use crate::error::BootstrapError;
use crate::runner::CommandRunner;

/// A single boolean gate. The probe owns its failure value, including the
/// remediation hint carried by the error variant.
pub struct Precondition<'a> {
    pub name: &'static str,
    #[allow(clippy::type_complexity)]
    pub probe: Box<dyn Fn() -> Result<(), BootstrapError> + 'a>,
}

/// Evaluate checks in order; the first failure aborts and later probes
/// never run.
pub fn run(checks: Vec<Precondition<'_>>) -> Result<(), BootstrapError> {
    for check in checks {
        debug!(check = check.name, "preflight");
        (check.probe)()?;
        debug!(check = check.name, "preflight ok");
    }
    Ok(())
}

/// The standard bootstrap sequence:
/// 1. pip answers an invocation probe,
/// 2. the server entry point exists,
/// 3. the question bank artifact exists,
/// 4. the application module imports cleanly from the backend directory.
pub fn standard_checks<'a>(
    ctx: &'a BootstrapContext,
    runner: &'a dyn CommandRunner,
) -> Vec<Precondition<'a>> {
    vec![
        Precondition {
            name: "pip available",
            probe: Box::new(move || {
                let args: Vec<OsString> = vec!["-m".into(), "pip".into(), "--version".into()];
                let ok = matches!(
                    runner.capture(&ctx.interpreter.command, &args, None),
                    Ok(out) if out.success
                );
                if ok {
                    Ok(())
                } else {
                    Err(BootstrapError::NoPackageManager {
                        interpreter: ctx.interpreter.command.display().to_string(),
                    })
                }
            }),
        },
        Precondition {
            name: "entry point exists",
            probe: Box::new(move || {
                let path = ctx.entry_point();
                if path.is_file() {
                    Ok(())
                } else {
                    Err(BootstrapError::MissingEntryPoint { path })
                }
            }),
        },
        Precondition {
            name: "question bank exists",
            probe: Box::new(move || {
                let path = ctx.data_artifact();
                if path.is_file() {
                    Ok(())
                } else {
                    Err(BootstrapError::MissingDataArtifact { path })
                }
            }),
        },
        Precondition {
            name: "application imports",
            probe: Box::new(move || {
                // A dynamic load probe, not a syntax check: broken deps or
                // a bad app.py surface here, before a port is claimed.
                let args: Vec<OsString> = vec!["-c".into(), "import app".into()];
                match runner.capture(&ctx.interpreter.command, &args, Some(&ctx.backend_dir)) {
                    Ok(out) if out.success => Ok(()),
                    Ok(out) => Err(BootstrapError::ApplicationImportFailed {
                        detail: out.stderr.trim_end().to_string(),
                    }),
                    Err(e) => Err(BootstrapError::ApplicationImportFailed {
                        detail: e.to_string(),
                    }),
                }
            }),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn first_failure_masks_later_checks() {
        let later_ran = Cell::new(false);
        let checks = vec![
            Precondition {
                name: "passes",
                probe: Box::new(|| Ok(())),
            },
            Precondition {
                name: "fails",
                probe: Box::new(|| Err(BootstrapError::PortInUse { port: 1 })),
            },
            Precondition {
                name: "never reached",
                probe: Box::new(|| {
                    later_ran.set(true);
                    Ok(())
                }),
            },
        ];
        let err = run(checks).unwrap_err();
        assert!(matches!(err, BootstrapError::PortInUse { port: 1 }));
        assert!(!later_ran.get(), "checks after a failure must not run");
    }

    #[test]
    fn all_passing_checks_run_in_order() {
        let order = std::cell::RefCell::new(Vec::new());
        let checks = vec![
            Precondition {
                name: "a",
                probe: Box::new(|| {
                    order.borrow_mut().push("a");
                    Ok(())
                }),
            },
            Precondition {
                name: "b",
                probe: Box::new(|| {
                    order.borrow_mut().push("b");
                    Ok(())
                }),
            },
        ];
        run(checks).unwrap();
        assert_eq!(*order.borrow(), vec!["a", "b"]);
    }
}
