mod config;
mod event;
mod tunnel;

pub use config::Config;
pub use event::{TunnelEvent, TunnelKey};
pub use tunnel::{BearerFilter, GtpTunnel};
