//! messenger - the seam between flow programming logic and the control channel

use crate::{FlowMod, FlowModCommand};
use async_trait::async_trait;
use slog::Logger;
use thiserror::Error;

/// Identifies the control channel connection to one switch.  Allocated by
/// the transport when the switch connects; opaque to flow programming logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectionHandle(pub u32);

impl std::fmt::Display for ConnectionHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "connection {}", self.0)
    }
}

#[derive(Debug, Error)]
pub enum FlowError {
    /// Malformed tunnel or filter parameters, detected before any edit was
    /// handed to the transport.
    #[error("flow construction failed: {0}")]
    Construction(anyhow::Error),

    /// The transport failed to deliver a flow mod to the switch.  Not
    /// retried here - retry policy belongs to the transport.
    #[error("flow mod delivery failed: {0}")]
    Delivery(anyhow::Error),
}

/// Services provided by the switch control channel.  The transport owns
/// serialization and framing; callers only fill in match, instruction and
/// cookie fields on a template and submit it.
#[async_trait]
pub trait FlowMessenger: Send + Sync {
    /// Creates a flow mod template with the transport's defaults filled in.
    fn base_flow_mod(&self, table_id: u8, command: FlowModCommand, priority: u16) -> FlowMod {
        FlowMod::new(table_id, command, priority)
    }

    /// Delivers one flow mod on the given connection.
    async fn send(
        &self,
        flow_mod: FlowMod,
        connection: &ConnectionHandle,
        logger: &Logger,
    ) -> Result<(), FlowError>;
}
