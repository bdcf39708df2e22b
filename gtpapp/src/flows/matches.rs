//! matches - match predicates for one direction of one tunnel

use crate::BearerFilter;
use anyhow::{Result, ensure};
use openflow::{ETH_TYPE_IPV4, OFPP_LOCAL, OxmField};
use std::net::Ipv4Addr;

/// Uplink traffic is identified by the GTP switch port it arrives on plus
/// the tunnel id.  TEID 0 is a valid tunnel id and is not rejected.
pub fn uplink_match(gtp_port: u32, in_tei: u32) -> Result<Vec<OxmField>> {
    ensure!(gtp_port != 0, "Uplink match requires a non-zero GTP port");
    Ok(vec![
        OxmField::InPort(gtp_port),
        OxmField::TunnelId(in_tei as u64),
    ])
}

/// Downlink traffic is identified by the UE IP, arriving on the local port.
pub fn downlink_match(ue_ip: Ipv4Addr) -> Vec<OxmField> {
    vec![
        OxmField::InPort(OFPP_LOCAL),
        OxmField::EthType(ETH_TYPE_IPV4),
        OxmField::Ipv4Dst(ue_ip),
    ]
}

/// Downlink match for a dedicated bearer: the fixed local-port/IPv4 pair
/// plus one constraint per field set in the filter.  Unset fields are
/// omitted entirely.
pub fn dedicated_bearer_match(filter: &BearerFilter) -> Result<Vec<OxmField>> {
    ensure!(
        !filter.is_empty(),
        "Dedicated bearer filter has no fields set"
    );

    let mut fields = vec![OxmField::InPort(OFPP_LOCAL), OxmField::EthType(ETH_TYPE_IPV4)];
    if let Some(dst_ip) = filter.dst_ip {
        fields.push(OxmField::Ipv4Dst(dst_ip));
    }
    if let Some(src_ip) = filter.src_ip {
        fields.push(OxmField::Ipv4Src(src_ip));
    }
    if let Some(ip_proto) = filter.ip_proto {
        fields.push(OxmField::IpProto(ip_proto));
    }
    if let Some(port) = filter.tcp_src_port {
        fields.push(OxmField::TcpSrc(port));
    }
    if let Some(port) = filter.tcp_dst_port {
        fields.push(OxmField::TcpDst(port));
    }
    if let Some(port) = filter.udp_src_port {
        fields.push(OxmField::UdpSrc(port));
    }
    if let Some(port) = filter.udp_dst_port {
        fields.push(OxmField::UdpDst(port));
    }
    Ok(fields)
}

/// Selects between the coarse UE IP match and the dedicated bearer match.
/// The two are mutually exclusive per request.
pub fn downlink_match_for(ue_ip: Ipv4Addr, filter: Option<&BearerFilter>) -> Result<Vec<OxmField>> {
    match filter {
        Some(filter) => dedicated_bearer_match(filter),
        None => Ok(downlink_match(ue_ip)),
    }
}
