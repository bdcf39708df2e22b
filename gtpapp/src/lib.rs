mod data;
mod flows;
mod imsi;

pub use data::{BearerFilter, Config, GtpTunnel, TunnelEvent, TunnelKey};
pub use flows::GtpFlowController;
pub use imsi::{compact_imsi, expand_imsi};
