// SPDX-License-Identifier: MIT
//! examboot — bootstraps the local exam practice server.
//!
//! The binary resolves a Python interpreter, validates preconditions,
//! provisions server dependencies once, confirms the port is free, and
//! replaces itself with the uvicorn server process. Every stage is a
//! plain function over an immutable [`BootstrapContext`]; the pipeline
//! is wired together in [`pipeline::run`].

pub mod browser;
pub mod config;
pub mod deps;
pub mod error;
pub mod launch;
pub mod pipeline;
pub mod port;
pub mod preflight;
pub mod python;
pub mod runner;
pub mod term;

pub use config::BootstrapContext;
pub use error::BootstrapError;
