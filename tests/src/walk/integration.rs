//! End-to-end walk scenarios against scripted device output.
//!
//! These reproduce the operational cases the tool was built around: a clean
//! two-switch path to the core, an unreachable starting switch, and a
//! candidate hop that is advertised but does not answer pings.

use std::net::IpAddr;

use wayfindr_common::config::WalkConfig;
use wayfindr_core::walker::PathWalker;

use crate::mock::{addr, ScriptedProbe, ScriptedTransport};

/// A realistic slice of ProCurve `show lldp info remote-device detail`
/// output advertising a single remote device.
fn lldp_detail(sysname: &str, address: &str) -> String {
    format!(
        "\
 Local Port   : 1
  ChassisType  : mac-address
  ChassisId    : 00 1f 28 39 ab ff
  PortType     : local
  PortId       : 26
  SysName      : {sysname}
  System Descr : ProCurve J9085A Switch 2610-24
  PortDescr    : 26
  System Capabilities Supported  : bridge, router
  System Capabilities Enabled    : bridge

  Remote Management Address
     Type    : ipv4
     Address : {address}
"
    )
}

fn run(transport: &ScriptedTransport, probe: &ScriptedProbe, start: &str) -> Vec<IpAddr> {
    let config = WalkConfig::default();
    PathWalker::new(transport, probe, &config).walk(addr(start))
}

#[test]
fn walk_reaches_core_through_one_hop() {
    let transport = ScriptedTransport::default()
        .with_output("10.200.70.5", &lldp_detail("SW1", "10.200.70.9"))
        .with_output("10.200.70.9", &lldp_detail("WPSWCORE", "10.200.70.1"));
    let probe = ScriptedProbe::all_alive();

    let path = run(&transport, &probe, "10.200.70.5");

    assert_eq!(path, vec![addr("10.200.70.9")]);
    assert_eq!(
        *transport.connects.borrow(),
        vec![addr("10.200.70.5"), addr("10.200.70.9")],
        "exactly one session per visited switch"
    );
}

#[test]
fn unreachable_start_yields_empty_path() {
    let transport = ScriptedTransport::default().refusing("10.200.70.5");
    let probe = ScriptedProbe::all_alive();

    let path = run(&transport, &probe, "10.200.70.5");

    assert!(path.is_empty());
}

#[test]
fn advertised_but_unpingable_candidate_ends_walk() {
    let transport = ScriptedTransport::default()
        .with_output("10.200.70.5", &lldp_detail("SW1", "10.200.70.9"));
    let probe = ScriptedProbe::down(&["10.200.70.9"]);

    let path = run(&transport, &probe, "10.200.70.5");

    assert!(path.is_empty());
    assert_eq!(
        *transport.connects.borrow(),
        vec![addr("10.200.70.5")],
        "no session may be opened to a host that failed the probe"
    );
}

#[test]
fn walk_chains_multiple_hops_in_order() {
    let transport = ScriptedTransport::default()
        .with_output("10.200.70.5", &lldp_detail("SW1", "10.200.70.9"))
        .with_output("10.200.70.9", &lldp_detail("SW2", "10.200.70.13"))
        .with_output("10.200.70.13", &lldp_detail("WPSWCORE", "10.200.70.1"));
    let probe = ScriptedProbe::all_alive();

    let path = run(&transport, &probe, "10.200.70.5");

    assert_eq!(path, vec![addr("10.200.70.9"), addr("10.200.70.13")]);
}

#[test]
fn switch_with_no_neighbors_ends_walk() {
    let transport = ScriptedTransport::default()
        .with_output("10.200.70.5", &lldp_detail("SW1", "10.200.70.9"));
    // 10.200.70.9 has no scripted output: the inspection yields nothing.
    let probe = ScriptedProbe::all_alive();

    let path = run(&transport, &probe, "10.200.70.5");

    assert_eq!(path, vec![addr("10.200.70.9")]);
}
