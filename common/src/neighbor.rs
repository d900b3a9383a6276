//! # Neighbor Model
//!
//! One remote device advertised over LLDP, as parsed from a switch's
//! neighbor-detail output. Records are transient; they live only for the
//! duration of a single inspection pass.

use std::net::IpAddr;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NeighborRecord {
    /// Advertised system name; absent when the device output carried an
    /// address with no preceding SysName line.
    pub sysname: Option<String>,
    /// Private management address of the neighbor.
    pub addr: IpAddr,
}
