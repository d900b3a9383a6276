//! Candidate liveness checking.
//!
//! Before the walker commits to a next hop it sends exactly one echo request
//! with a bounded wait; a host that does not answer is skipped for the rest
//! of the pass.

use std::net::IpAddr;
use std::process::{Command, Stdio};
use std::time::Duration;

use tracing::debug;

/// Answers whether a candidate hop responds to a single echo request.
pub trait LivenessProbe {
    fn is_alive(&self, addr: IpAddr) -> bool;
}

/// Shells out to the system `ping` utility.
pub struct SystemPing {
    timeout: Duration,
}

impl SystemPing {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl LivenessProbe for SystemPing {
    fn is_alive(&self, addr: IpAddr) -> bool {
        let mut cmd = Command::new("ping");
        if cfg!(windows) {
            cmd.args(["-n", "1", "-w"])
                .arg(self.timeout.as_millis().to_string());
        } else {
            cmd.args(["-c", "1", "-W"])
                .arg(self.timeout.as_secs().max(1).to_string());
        }

        match cmd
            .arg(addr.to_string())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
        {
            Ok(status) if status.success() => true,
            Ok(_) => {
                debug!("{addr} did not answer the probe");
                false
            }
            Err(e) => {
                debug!("ping invocation failed: {e}");
                false
            }
        }
    }
}
