//! # Walk Configuration
//!
//! Everything the walk needs to know about the switches it visits: login
//! credentials, the CLI dialect spoken by the devices, the management network
//! the walk stays inside, and the system name marking the terminal core.
//!
//! Defaults reproduce the fleet this tool was written for (HP ProCurve
//! access switches on `10.200.70.0/24` with a core named `WPSWCORE`), but
//! every field can be overridden from the command line.

use std::str::FromStr;
use std::time::Duration;

/// Remote CLI dialect of the switches being walked.
///
/// Determines which neighbor-detail command is issued on each hop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceProfile {
    HpProcurve,
}

impl DeviceProfile {
    /// The "show neighbors" command for this dialect.
    pub fn neighbor_command(&self) -> &'static str {
        match self {
            DeviceProfile::HpProcurve => "show lldp info remote-device detail",
        }
    }
}

impl FromStr for DeviceProfile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "hp-procurve" => Ok(DeviceProfile::HpProcurve),
            _ => Err(format!("unknown device type: {s}")),
        }
    }
}

/// Parameters governing a single walk toward the core.
#[derive(Clone, Debug)]
pub struct WalkConfig {
    /// Login user, reused on every hop.
    pub username: String,
    /// Login password, reused on every hop.
    pub password: String,
    pub device_profile: DeviceProfile,
    /// Dotted address prefix of the management network; neighbors outside
    /// it are never considered as next hops.
    pub target_prefix: String,
    /// System name that marks the terminal core switch.
    pub core_sysname: String,
    /// Bound on the wait for a single echo reply.
    pub ping_timeout: Duration,
    /// Bound on the wait for a session to establish.
    pub connect_timeout: Duration,
    /// Suppresses progress output when set.
    pub quiet: bool,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            username: "admin".to_string(),
            password: "admin".to_string(),
            device_profile: DeviceProfile::HpProcurve,
            target_prefix: "10.200.70".to_string(),
            core_sysname: "WPSWCORE".to_string(),
            ping_timeout: Duration::from_secs(1),
            connect_timeout: Duration::from_secs(10),
            quiet: false,
        }
    }
}
