use super::{BearerFilter, GtpTunnel};
use openflow::ConnectionHandle;
use std::net::Ipv4Addr;

/// The subset of tunnel identifiers needed to address flows that are
/// already installed.
#[derive(Debug, Clone)]
pub struct TunnelKey {
    pub in_tei: u32,
    pub ue_ip: Ipv4Addr,
    pub filter: Option<BearerFilter>,
}

/// One tunnel lifecycle event, consumed exactly once by the flow
/// controller.
///
/// The event source must deliver events for one tunnel in causal order
/// (Add before Discard/Forward before Delete).  Events for different
/// tunnels are independent.
#[derive(Debug, Clone)]
pub enum TunnelEvent {
    /// Establish uplink and downlink forwarding for a new tunnel.
    Add {
        tunnel: GtpTunnel,
        filter: Option<BearerFilter>,
        connection: ConnectionHandle,
    },

    /// Tear down both directions, including any gate override still
    /// installed.
    Delete {
        key: TunnelKey,
        connection: ConnectionHandle,
    },

    /// Mute the tunnel: shadow the base rules with higher-priority rules
    /// that silently consume matching traffic.
    Discard {
        key: TunnelKey,
        connection: ConnectionHandle,
    },

    /// Unmute the tunnel: remove the gate rules installed by Discard.
    Forward {
        key: TunnelKey,
        connection: ConnectionHandle,
    },
}
