//! The central **abstraction** for device access.
//!
//! This module defines the unified interface that concrete transports (such
//! as the [`ssh`] adapter) must implement. It standardizes the lifecycle of
//! a device session: establishment, command execution, and liveness.
//!
//! **Architectural Note:**
//! The walker depends strictly on these traits rather than on a concrete
//! transport. This keeps the traversal logic testable against scripted
//! sessions and leaves the wire mechanism swappable.

use std::net::IpAddr;

use wayfindr_common::config::WalkConfig;
use wayfindr_common::error::SessionError;

pub mod ssh;

/// An authenticated command-execution channel to one switch.
///
/// Dropping a session closes the underlying channel; the walker holds at
/// most one live session and replaces it on every hop.
pub trait Session {
    /// Runs a CLI command on the device and returns its raw output.
    fn execute(&mut self, command: &str) -> Result<String, SessionError>;

    /// Whether the channel still responds.
    fn is_alive(&mut self) -> bool;

    /// The address this session is connected to.
    fn peer_addr(&self) -> IpAddr;
}

/// Opens sessions to switches.
pub trait SessionTransport {
    fn connect(
        &self,
        host: IpAddr,
        config: &WalkConfig,
    ) -> Result<Box<dyn Session>, SessionError>;
}
