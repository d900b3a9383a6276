//! # Path Walker
//!
//! Orchestrates the hop-by-hop traversal from a starting switch toward the
//! core. Each pass inspects the current hop's neighbors, checks whether the
//! core is among them, and otherwise advances to the first eligible neighbor
//! that answers a ping.
//!
//! The walk never fails hard: every error degrades to returning the path
//! accumulated so far, and the caller decides what an empty path means.

use std::net::IpAddr;

use tracing::{debug, info, warn};

use wayfindr_common::config::WalkConfig;
use wayfindr_common::neighbor::NeighborRecord;

use crate::inspector;
use crate::probe::LivenessProbe;
use crate::session::{Session, SessionTransport};

pub struct PathWalker<'a> {
    transport: &'a dyn SessionTransport,
    probe: &'a dyn LivenessProbe,
    config: &'a WalkConfig,
}

impl<'a> PathWalker<'a> {
    pub fn new(
        transport: &'a dyn SessionTransport,
        probe: &'a dyn LivenessProbe,
        config: &'a WalkConfig,
    ) -> Self {
        Self {
            transport,
            probe,
            config,
        }
    }

    /// Walks LLDP neighbors from `start` toward the core switch.
    ///
    /// Returns the ordered hop addresses visited after `start`; neither the
    /// start nor the core's own address is included. An empty path means the
    /// walk could not get past the starting switch.
    pub fn walk(&self, start: IpAddr) -> Vec<IpAddr> {
        let mut path: Vec<IpAddr> = Vec::new();

        let mut session = match self.transport.connect(start, self.config) {
            Ok(session) => session,
            Err(e) => {
                warn!("{e}");
                return path;
            }
        };

        loop {
            let records =
                match inspector::inspect(session.as_mut(), self.config.device_profile) {
                    Ok(records) => records,
                    Err(e) => {
                        warn!("{e}");
                        return path;
                    }
                };

            if self.core_reached(&records) {
                info!(
                    "{} reached via {}",
                    self.config.core_sysname,
                    session.peer_addr()
                );
                return path;
            }

            match self.advance(&records, start, &mut path) {
                Advance::Moved(next) => session = next,
                Advance::Aborted => return path,
                Advance::Stalled => {
                    debug!("no further progress from {}", session.peer_addr());
                    return path;
                }
            }

            if !session.is_alive() {
                debug!("session to {} went dead", session.peer_addr());
                return path;
            }
        }
    }

    fn core_reached(&self, records: &[NeighborRecord]) -> bool {
        records
            .iter()
            .any(|r| r.sysname.as_deref() == Some(self.config.core_sysname.as_str()))
    }

    /// Picks the first eligible neighbor that answers a ping and connects to
    /// it, appending the hop to `path`.
    fn advance(
        &self,
        records: &[NeighborRecord],
        start: IpAddr,
        path: &mut Vec<IpAddr>,
    ) -> Advance {
        for record in records {
            if !self.eligible(record, start, path) {
                continue;
            }
            if !self.probe.is_alive(record.addr) {
                debug!("candidate {} is down, skipping", record.addr);
                continue;
            }

            path.push(record.addr);
            info!("advancing to {}", record.addr);
            return match self.transport.connect(record.addr, self.config) {
                Ok(session) => Advance::Moved(session),
                Err(e) => {
                    warn!("{e}");
                    Advance::Aborted
                }
            };
        }

        Advance::Stalled
    }

    /// A candidate must sit inside the target network, differ from the
    /// starting address, and not have been visited already.
    fn eligible(&self, record: &NeighborRecord, start: IpAddr, path: &[IpAddr]) -> bool {
        record.addr != start
            && !path.contains(&record.addr)
            && record
                .addr
                .to_string()
                .starts_with(&self.config.target_prefix)
    }
}

/// Outcome of one selection pass.
enum Advance {
    /// A live candidate was found and connected to.
    Moved(Box<dyn Session>),
    /// A candidate was appended but connecting to it failed; the walk ends
    /// with the path as recorded.
    Aborted,
    /// No eligible live candidate in this pass.
    Stalled,
}
