// SPDX-License-Identifier: MIT
//! Port availability guard. A best-effort advisory check: we bind and
//! immediately release the target address. The real authority is the
//! server's own bind, which the launcher does not intercept.

use std::net::TcpListener;

use tracing::warn;

use crate::error::BootstrapError;

/// Seam for the TCP listen probe, so pipeline tests can observe whether
/// and when the guard ran.
pub trait PortProbe {
    fn check(&self, host: &str, port: u16) -> Result<(), BootstrapError>;
}

/// Production probe backed by a throwaway `TcpListener::bind`.
pub struct TcpBindProbe;

impl PortProbe for TcpBindProbe {
    fn check(&self, host: &str, port: u16) -> Result<(), BootstrapError> {
        match TcpListener::bind((host, port)) {
            Ok(listener) => {
                drop(listener);
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::AddrInUse => {
                Err(BootstrapError::PortInUse { port })
            }
            Err(e) => {
                // Unexpected bind failure (odd host config, permissions).
                // Advisory check only: let the server's own bind decide.
                warn!(host, port, err = %e, "port probe inconclusive");
                Ok(())
            }
        }
    }
}
