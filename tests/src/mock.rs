//! Scripted stand-ins for the session transport and the liveness probe.
//!
//! Each transport serves canned LLDP detail output keyed by host address,
//! so a whole walk can be replayed without touching the network.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::net::IpAddr;

use wayfindr_common::config::WalkConfig;
use wayfindr_common::error::SessionError;
use wayfindr_core::probe::LivenessProbe;
use wayfindr_core::session::{Session, SessionTransport};

pub fn addr(s: &str) -> IpAddr {
    s.parse().expect("test addresses are well-formed")
}

#[derive(Default)]
pub struct ScriptedTransport {
    outputs: HashMap<IpAddr, String>,
    refused: HashSet<IpAddr>,
    pub connects: RefCell<Vec<IpAddr>>,
}

impl ScriptedTransport {
    pub fn with_output(mut self, host: &str, output: &str) -> Self {
        self.outputs.insert(addr(host), output.to_string());
        self
    }

    pub fn refusing(mut self, host: &str) -> Self {
        self.refused.insert(addr(host));
        self
    }
}

impl SessionTransport for ScriptedTransport {
    fn connect(
        &self,
        host: IpAddr,
        _config: &WalkConfig,
    ) -> Result<Box<dyn Session>, SessionError> {
        self.connects.borrow_mut().push(host);
        if self.refused.contains(&host) {
            return Err(SessionError::connect(host, "connection refused"));
        }
        let output = self.outputs.get(&host).cloned().unwrap_or_default();
        Ok(Box::new(ScriptedSession { peer: host, output }))
    }
}

struct ScriptedSession {
    peer: IpAddr,
    output: String,
}

impl Session for ScriptedSession {
    fn execute(&mut self, _command: &str) -> Result<String, SessionError> {
        Ok(self.output.clone())
    }

    fn is_alive(&mut self) -> bool {
        true
    }

    fn peer_addr(&self) -> IpAddr {
        self.peer
    }
}

pub struct ScriptedProbe {
    down: HashSet<IpAddr>,
}

impl ScriptedProbe {
    pub fn all_alive() -> Self {
        Self {
            down: HashSet::new(),
        }
    }

    pub fn down(hosts: &[&str]) -> Self {
        Self {
            down: hosts.iter().map(|h| addr(h)).collect(),
        }
    }
}

impl LivenessProbe for ScriptedProbe {
    fn is_alive(&self, addr: IpAddr) -> bool {
        !self.down.contains(&addr)
    }
}
