//! actions - action lists for one direction of one tunnel

use crate::imsi::compact_imsi;
use anyhow::Result;
use openflow::{Action, MacAddress, OxmField};
use std::net::Ipv4Addr;

/// Downlink encapsulation: stamp the egress tunnel id and tunnel
/// destination, and carry the subscriber identity to later tables.
pub fn encapsulation_actions(out_tei: u32, enb_ip: Ipv4Addr, imsi: &str) -> Result<Vec<Action>> {
    Ok(vec![
        Action::SetField(OxmField::TunnelId(out_tei as u64)),
        Action::SetField(OxmField::TunnelIpv4Dst(enb_ip)),
        Action::SetField(OxmField::Metadata(compact_imsi(imsi)?)),
    ])
}

/// Uplink decapsulation: the tunnel port has already stripped the GTP
/// header, so only the ethernet addresses are rewritten before the packet
/// heads for the uplink, plus the subscriber identity stamp.
pub fn decapsulation_actions(
    gtp_port_mac: MacAddress,
    uplink_mac: MacAddress,
    imsi: &str,
) -> Result<Vec<Action>> {
    Ok(vec![
        Action::SetField(OxmField::EthSrc(gtp_port_mac)),
        Action::SetField(OxmField::EthDst(uplink_mac)),
        Action::SetField(OxmField::Metadata(compact_imsi(imsi)?)),
    ])
}
