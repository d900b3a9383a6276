//! # Neighbor Inspector
//!
//! Turns the free-text output of a "show neighbors" command into a list of
//! [`NeighborRecord`]s.
//!
//! The LLDP detail output of a ProCurve-class switch interleaves `SysName`
//! and `Address` lines, one pair per remote device, among a lot of other
//! fields. The parser scans line by line, holding the most recent sysname
//! until an address line completes the pair. Addresses that fail to parse,
//! are not private, or belong to the inspected switch itself produce no
//! record and are skipped without disturbing the pending state.

use std::net::IpAddr;

use tracing::debug;

use wayfindr_common::config::DeviceProfile;
use wayfindr_common::error::SessionError;
use wayfindr_common::neighbor::NeighborRecord;
use wayfindr_common::utils::ip;

use crate::session::Session;

/// Line-to-line parse state: the sysname waiting to be paired with the next
/// valid address.
#[derive(Default)]
struct ParseState {
    pending_sysname: Option<String>,
}

/// Queries the device behind `session` for its LLDP neighbors.
pub fn inspect(
    session: &mut dyn Session,
    profile: DeviceProfile,
) -> Result<Vec<NeighborRecord>, SessionError> {
    let output = session.execute(profile.neighbor_command())?;
    Ok(parse_neighbors(&output, session.peer_addr()))
}

/// Extracts neighbor records from raw device output.
///
/// Keeps only addresses that parse, are private, and differ from
/// `own_addr`, preserving their order of appearance.
pub fn parse_neighbors(output: &str, own_addr: IpAddr) -> Vec<NeighborRecord> {
    let mut records = Vec::new();
    let mut state = ParseState::default();

    for line in output.lines() {
        let line = line.trim();
        if let Some(rest) = line.strip_prefix("SysName") {
            state.pending_sysname = parse_field_value(rest).map(str::to_string);
        } else if let Some(rest) = line.strip_prefix("Address") {
            let Some(value) = parse_field_value(rest) else {
                continue;
            };
            let addr: IpAddr = match value.parse() {
                Ok(addr) => addr,
                Err(_) => {
                    // Pending sysname stays put for the next address line.
                    debug!("ignoring unparsable address field: {value}");
                    continue;
                }
            };
            if ip::is_private(&addr) && addr != own_addr {
                records.push(NeighborRecord {
                    sysname: state.pending_sysname.take(),
                    addr,
                });
            }
        }
    }

    records
}

/// Returns the text after the first colon separator, or `None` when the
/// separator or the value is missing.
fn parse_field_value(rest: &str) -> Option<&str> {
    let (_, value) = rest.split_once(':')?;
    let value = value.trim();
    (!value.is_empty()).then_some(value)
}
