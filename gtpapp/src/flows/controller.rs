//! controller - translates tunnel lifecycle events into flow table edits

use super::{actions, matches};
use crate::{BearerFilter, Config, GtpTunnel, TunnelEvent, TunnelKey};
use openflow::{
    FlowError, FlowMessenger, FlowMod, FlowModCommand, Instruction, OFPG_ANY, OFPP_ANY, OxmField,
};
use slog::{Logger, debug};

/// Compiles tunnel lifecycle events into pairs of flow table edits, one per
/// direction.  Holds no per-tunnel state: the switch's flow table is the
/// state, and every edit is computed from the event alone.
///
/// Gating works by inserting a higher-priority rule with an empty
/// instruction set over the same match as the base rule.  It is strictly
/// additive, so it never requires reading back switch state and is safe to
/// retry.  The gate rule carries a per-direction cookie so that Forward can
/// later delete exactly that rule and nothing else.
#[derive(Clone)]
pub struct GtpFlowController {
    config: Config,
}

impl GtpFlowController {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Handles one lifecycle event: builds the uplink and downlink flow
    /// mods it implies, then sends them.  Construction faults abort before
    /// anything is sent.  A fault is scoped to this event only; flows of
    /// other tunnels are unaffected.
    pub async fn handle_event<M: FlowMessenger>(
        &self,
        event: &TunnelEvent,
        messenger: &M,
        logger: &Logger,
    ) -> Result<(), FlowError> {
        match event {
            TunnelEvent::Add {
                tunnel,
                filter,
                connection,
            } => {
                let uplink = self.uplink_add(tunnel, messenger)?;
                let downlink = self.downlink_add(tunnel, filter.as_ref(), messenger)?;
                messenger.send(uplink, connection, logger).await?;
                messenger.send(downlink, connection, logger).await?;
                debug!(logger, "Tunnel flows added for {}", tunnel);
                Ok(())
            }
            TunnelEvent::Delete { key, connection } => {
                let uplink = self.uplink_delete(key, messenger)?;
                let downlink = self.downlink_delete(key, messenger)?;
                messenger.send(uplink, connection, logger).await?;
                messenger.send(downlink, connection, logger).await?;
                debug!(logger, "Tunnel flows deleted for TEID {:#x}", key.in_tei);
                Ok(())
            }
            TunnelEvent::Discard { key, connection } => {
                let uplink = self.uplink_gate(key, messenger)?;
                let downlink = self.downlink_gate(key, messenger)?;
                messenger.send(uplink, connection, logger).await?;
                messenger.send(downlink, connection, logger).await
            }
            TunnelEvent::Forward { key, connection } => {
                let uplink = self.uplink_ungate(key, messenger)?;
                let downlink = self.downlink_ungate(key, messenger)?;
                messenger.send(uplink, connection, logger).await?;
                messenger.send(downlink, connection, logger).await
            }
        }
    }

    /// Base uplink rule: decapsulated GTP traffic gets its MACs rewritten,
    /// is stamped with the subscriber identity and continues to the next
    /// table.
    fn uplink_add<M: FlowMessenger>(
        &self,
        tunnel: &GtpTunnel,
        messenger: &M,
    ) -> Result<FlowMod, FlowError> {
        let mut fm = messenger.base_flow_mod(
            self.config.table,
            FlowModCommand::Add,
            self.config.default_priority,
        );
        fm.add_oxm_fields(self.uplink_match(tunnel.in_tei)?);
        fm.add_instruction(Instruction::ApplyActions(
            actions::decapsulation_actions(
                self.config.gtp_port_mac,
                self.config.uplink_mac,
                &tunnel.imsi,
            )
            .map_err(FlowError::Construction)?,
        ));
        fm.add_instruction(Instruction::GotoTable(self.config.next_table));
        Ok(fm)
    }

    /// Base downlink rule: traffic to the UE is encapsulated towards the
    /// base station, stamped with the subscriber identity and continues to
    /// the next table.
    fn downlink_add<M: FlowMessenger>(
        &self,
        tunnel: &GtpTunnel,
        filter: Option<&BearerFilter>,
        messenger: &M,
    ) -> Result<FlowMod, FlowError> {
        let mut fm = messenger.base_flow_mod(
            self.config.table,
            FlowModCommand::Add,
            self.config.default_priority,
        );
        fm.add_oxm_fields(
            matches::downlink_match_for(tunnel.ue_ip, filter).map_err(FlowError::Construction)?,
        );
        fm.add_instruction(Instruction::ApplyActions(
            actions::encapsulation_actions(tunnel.out_tei, tunnel.enb_ip, &tunnel.imsi)
                .map_err(FlowError::Construction)?,
        ));
        fm.add_instruction(Instruction::GotoTable(self.config.next_table));
        Ok(fm)
    }

    fn uplink_delete<M: FlowMessenger>(
        &self,
        key: &TunnelKey,
        messenger: &M,
    ) -> Result<FlowMod, FlowError> {
        let mut fm = messenger.base_flow_mod(self.config.table, FlowModCommand::Delete, 0);
        // Wildcard the output so the base rule and any gate override are
        // removed together.
        fm.set_out_port(OFPP_ANY);
        fm.set_out_group(OFPG_ANY);
        fm.add_oxm_fields(self.uplink_match(key.in_tei)?);
        Ok(fm)
    }

    fn downlink_delete<M: FlowMessenger>(
        &self,
        key: &TunnelKey,
        messenger: &M,
    ) -> Result<FlowMod, FlowError> {
        let mut fm = messenger.base_flow_mod(self.config.table, FlowModCommand::Delete, 0);
        fm.set_out_port(OFPP_ANY);
        fm.set_out_group(OFPG_ANY);
        fm.add_oxm_fields(self.downlink_match(key)?);
        Ok(fm)
    }

    fn uplink_gate<M: FlowMessenger>(
        &self,
        key: &TunnelKey,
        messenger: &M,
    ) -> Result<FlowMod, FlowError> {
        let mut fm = messenger.base_flow_mod(
            self.config.table,
            FlowModCommand::Add,
            self.config.gate_priority(),
        );
        // No instructions: matching traffic is silently consumed, shadowing
        // the base rule without touching it.
        fm.set_cookie(self.config.uplink_gate_cookie(), u64::MAX);
        fm.add_oxm_fields(self.uplink_match(key.in_tei)?);
        Ok(fm)
    }

    fn downlink_gate<M: FlowMessenger>(
        &self,
        key: &TunnelKey,
        messenger: &M,
    ) -> Result<FlowMod, FlowError> {
        let mut fm = messenger.base_flow_mod(
            self.config.table,
            FlowModCommand::Add,
            self.config.gate_priority(),
        );
        fm.set_cookie(self.config.downlink_gate_cookie(), u64::MAX);
        fm.add_oxm_fields(self.downlink_match(key)?);
        Ok(fm)
    }

    fn uplink_ungate<M: FlowMessenger>(
        &self,
        key: &TunnelKey,
        messenger: &M,
    ) -> Result<FlowMod, FlowError> {
        let mut fm = messenger.base_flow_mod(
            self.config.table,
            FlowModCommand::Delete,
            self.config.gate_priority(),
        );
        fm.set_out_port(OFPP_ANY);
        fm.set_out_group(OFPG_ANY);
        // Exact cookie match selects the gate rule installed by Discard and
        // nothing else - in particular never the base rule.
        fm.set_cookie(self.config.uplink_gate_cookie(), u64::MAX);
        fm.add_oxm_fields(self.uplink_match(key.in_tei)?);
        Ok(fm)
    }

    fn downlink_ungate<M: FlowMessenger>(
        &self,
        key: &TunnelKey,
        messenger: &M,
    ) -> Result<FlowMod, FlowError> {
        let mut fm = messenger.base_flow_mod(
            self.config.table,
            FlowModCommand::Delete,
            self.config.gate_priority(),
        );
        fm.set_out_port(OFPP_ANY);
        fm.set_out_group(OFPG_ANY);
        fm.set_cookie(self.config.downlink_gate_cookie(), u64::MAX);
        fm.add_oxm_fields(self.downlink_match(key)?);
        Ok(fm)
    }

    fn uplink_match(&self, in_tei: u32) -> Result<Vec<OxmField>, FlowError> {
        matches::uplink_match(self.config.gtp_port, in_tei).map_err(FlowError::Construction)
    }

    fn downlink_match(&self, key: &TunnelKey) -> Result<Vec<OxmField>, FlowError> {
        matches::downlink_match_for(key.ue_ip, key.filter.as_ref())
            .map_err(FlowError::Construction)
    }
}
