pub mod walk;

use std::net::IpAddr;
use std::time::Duration;

use clap::Parser;
use wayfindr_common::config::{DeviceProfile, WalkConfig};

#[derive(Parser)]
#[command(name = "wayfindr")]
#[command(about = "Walks LLDP neighbors from a switch to the network core.")]
pub struct CommandLine {
    /// Starting switch address; prompted for interactively when omitted
    pub start: Option<IpAddr>,

    /// Login user for every hop
    #[arg(long, default_value = "admin")]
    pub username: String,

    /// Login password for every hop
    #[arg(long, default_value = "admin")]
    pub password: String,

    /// CLI dialect of the switches
    #[arg(long = "device-type", default_value = "hp-procurve")]
    pub device_profile: DeviceProfile,

    /// Management network prefix the walk stays inside
    #[arg(long, default_value = "10.200.70")]
    pub prefix: String,

    /// System name of the terminal core switch
    #[arg(long, default_value = "WPSWCORE")]
    pub core: String,

    /// Seconds to wait for one echo reply
    #[arg(long, default_value_t = 1)]
    pub ping_timeout: u64,

    /// Seconds to wait for a session to establish
    #[arg(long, default_value_t = 10)]
    pub connect_timeout: u64,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn to_config(&self) -> WalkConfig {
        WalkConfig {
            username: self.username.clone(),
            password: self.password.clone(),
            device_profile: self.device_profile,
            target_prefix: self.prefix.clone(),
            core_sysname: self.core.clone(),
            ping_timeout: Duration::from_secs(self.ping_timeout),
            connect_timeout: Duration::from_secs(self.connect_timeout),
            quiet: self.quiet,
        }
    }
}
