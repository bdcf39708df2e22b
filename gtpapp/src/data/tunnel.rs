use std::net::Ipv4Addr;

/// Identifiers of one GTP-U tunnel.  Immutable for the life of the tunnel:
/// created on Add, referenced until the matching Delete.
#[derive(Debug, Clone)]
pub struct GtpTunnel {
    /// Uplink TEID - the tunnel id carried on packets arriving from the
    /// base station.
    pub in_tei: u32,

    /// Downlink TEID - the tunnel id to stamp on packets sent towards the
    /// base station.
    pub out_tei: u32,

    /// Subscriber identity, a string of up to 15 decimal digits.
    pub imsi: String,

    /// IP address allocated to the UE.
    pub ue_ip: Ipv4Addr,

    /// IP address of the base station end of the tunnel.
    pub enb_ip: Ipv4Addr,
}

impl std::fmt::Display for GtpTunnel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:#x},{})", self.in_tei, self.ue_ip)
    }
}

/// 5-tuple filter for a tunnel carrying a dedicated bearer.  Unset fields
/// are left out of the downlink match entirely - absent constraint, not a
/// zero-value constraint.
#[derive(Debug, Clone, Default)]
pub struct BearerFilter {
    pub dst_ip: Option<Ipv4Addr>,
    pub src_ip: Option<Ipv4Addr>,
    pub ip_proto: Option<u8>,
    pub tcp_src_port: Option<u16>,
    pub tcp_dst_port: Option<u16>,
    pub udp_src_port: Option<u16>,
    pub udp_dst_port: Option<u16>,
}

impl BearerFilter {
    pub fn is_empty(&self) -> bool {
        self.dst_ip.is_none()
            && self.src_ip.is_none()
            && self.ip_proto.is_none()
            && self.tcp_src_port.is_none()
            && self.tcp_dst_port.is_none()
            && self.udp_src_port.is_none()
            && self.udp_dst_port.is_none()
    }
}
