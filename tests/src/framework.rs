use crate::MockSwitch;
use gtpapp::{Config, GtpFlowController, GtpTunnel, TunnelEvent, TunnelKey};
use openflow::ConnectionHandle;
use slog::{Drain, Logger, o};
use std::net::Ipv4Addr;

pub const GTP_PORT: u32 = 5;
pub const CONNECTION: ConnectionHandle = ConnectionHandle(1);

pub fn init() -> (GtpFlowController, MockSwitch, Logger) {
    let logger = init_logging();
    let controller = GtpFlowController::new(test_config());
    (controller, MockSwitch::new(), logger)
}

pub fn test_config() -> Config {
    Config {
        gtp_port: GTP_PORT,
        uplink_mac: "00:11:22:33:44:55".try_into().unwrap(),
        ..Config::default()
    }
}

/// A tunnel with one of everything: TEIDs in both directions, a UE address
/// and a base station address.
pub fn test_tunnel() -> GtpTunnel {
    GtpTunnel {
        in_tei: 100,
        out_tei: 200,
        imsi: "001010123456789".to_string(),
        ue_ip: Ipv4Addr::new(10, 0, 0, 5),
        enb_ip: Ipv4Addr::new(192, 168, 1, 10),
    }
}

pub fn key_for(tunnel: &GtpTunnel) -> TunnelKey {
    TunnelKey {
        in_tei: tunnel.in_tei,
        ue_ip: tunnel.ue_ip,
        filter: None,
    }
}

pub fn add_event(tunnel: &GtpTunnel) -> TunnelEvent {
    TunnelEvent::Add {
        tunnel: tunnel.clone(),
        filter: None,
        connection: CONNECTION,
    }
}

pub fn delete_event(tunnel: &GtpTunnel) -> TunnelEvent {
    TunnelEvent::Delete {
        key: key_for(tunnel),
        connection: CONNECTION,
    }
}

pub fn discard_event(tunnel: &GtpTunnel) -> TunnelEvent {
    TunnelEvent::Discard {
        key: key_for(tunnel),
        connection: CONNECTION,
    }
}

pub fn forward_event(tunnel: &GtpTunnel) -> TunnelEvent {
    TunnelEvent::Forward {
        key: key_for(tunnel),
        connection: CONNECTION,
    }
}

fn init_logging() -> Logger {
    let decorator = slog_term::TermDecorator::new().build();
    let drain = slog_term::CompactFormat::new(decorator).build();
    let drain = std::sync::Mutex::new(drain).fuse();
    let drain = slog_envlogger::new(drain);
    slog::Logger::root(drain, o!())
}
