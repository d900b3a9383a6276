//! Failure modes of a device session.
//!
//! Both variants are fatal to the walk in progress: nothing is retried, and
//! the walker degrades to returning the path accumulated so far.

use std::net::IpAddr;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    /// Session establishment failed; no session exists for the host.
    #[error("failed to connect to {host}: {reason}")]
    Connect { host: IpAddr, reason: String },

    /// Command execution failed on an established session.
    #[error("command failed on {host}: {reason}")]
    Transport { host: IpAddr, reason: String },
}

impl SessionError {
    pub fn connect(host: IpAddr, reason: impl ToString) -> Self {
        SessionError::Connect {
            host,
            reason: reason.to_string(),
        }
    }

    pub fn transport(host: IpAddr, reason: impl ToString) -> Self {
        SessionError::Transport {
            host,
            reason: reason.to_string(),
        }
    }
}
