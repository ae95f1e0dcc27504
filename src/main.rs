// SPDX-License-Identifier: MIT
//! examboot entry point. Behavior is fixed — no flags, no environment
//! configuration; clap only provides `--help`/`--version`.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use examboot::port::TcpBindProbe;
use examboot::runner::SystemRunner;
use examboot::{config, pipeline, term};

#[derive(Parser)]
#[command(
    name = "examboot",
    about = "One-click local launcher for the exam practice server",
    version
)]
struct Args {}

fn main() {
    let _args = Args::parse();

    // Diagnostics go to stderr and stay quiet by default; the [INFO]
    // progress lines on stdout are the user-facing surface.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let project_root = match config::locate_project_root() {
        Ok(root) => root,
        Err(e) => {
            eprintln!("[ERROR] {e:#}");
            term::pause_for_ack();
            std::process::exit(1);
        }
    };

    term::info(format!("project root: {}", project_root.display()));

    let plan = match pipeline::run(
        &project_root,
        config::HOST,
        config::PORT,
        &SystemRunner,
        &TcpBindProbe,
    ) {
        Ok(plan) => plan,
        Err(e) => {
            term::error(&e);
            term::pause_for_ack();
            std::process::exit(e.exit_code());
        }
    };

    term::info(format!("starting server at {}", plan.url));

    // Replaces the process image on success; only a failed handoff returns.
    let err = plan.execute();
    term::error(&err);
    term::pause_for_ack();
    std::process::exit(err.exit_code());
}
