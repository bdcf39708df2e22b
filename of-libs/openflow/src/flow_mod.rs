//! flow_mod - flow table modification requests and their match/action vocabulary

use crate::MacAddress;
use std::net::Ipv4Addr;

/// The switch-local virtual port facing the gateway's own network stack.
pub const OFPP_LOCAL: u32 = 0xffff_fffe;
/// Wildcard output port for delete scoping.
pub const OFPP_ANY: u32 = 0xffff_ffff;
/// Wildcard output group for delete scoping.
pub const OFPG_ANY: u32 = 0xffff_ffff;
/// Ethertype of IPv4, as carried in an EthType match.
pub const ETH_TYPE_IPV4: u16 = 0x0800;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowModCommand {
    Add,
    Modify,
    ModifyStrict,
    Delete,
    DeleteStrict,
}

/// One packet header or pipeline field, used both as a match constraint
/// (field must equal the value) and as a set-field target in an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OxmField {
    InPort(u32),
    EthSrc(MacAddress),
    EthDst(MacAddress),
    EthType(u16),
    Ipv4Src(Ipv4Addr),
    Ipv4Dst(Ipv4Addr),
    IpProto(u8),
    TcpSrc(u16),
    TcpDst(u16),
    UdpSrc(u16),
    UdpDst(u16),
    TunnelId(u64),
    TunnelIpv4Dst(Ipv4Addr),
    Metadata(u64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    SetField(OxmField),
    Output(u32),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    ApplyActions(Vec<Action>),
    GotoTable(u8),
}

/// One flow table modification.  Built up field by field, handed to the
/// transport once, and not mutated afterwards.
///
/// For `Delete` commands, `out_port` / `out_group` scope which rules are
/// eligible: a rule is only deleted if it forwards to that port/group.  Set
/// both to the ANY wildcards to delete regardless of output.  A non-zero
/// `cookie_mask` further restricts deletion to rules whose cookie matches
/// under the mask.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowMod {
    table_id: u8,
    command: FlowModCommand,
    priority: u16,
    cookie: u64,
    cookie_mask: u64,
    out_port: u32,
    out_group: u32,
    match_fields: Vec<OxmField>,
    instructions: Vec<Instruction>,
}

impl FlowMod {
    pub fn new(table_id: u8, command: FlowModCommand, priority: u16) -> Self {
        Self {
            table_id,
            command,
            priority,
            cookie: 0,
            cookie_mask: 0,
            out_port: 0,
            out_group: 0,
            match_fields: vec![],
            instructions: vec![],
        }
    }

    pub fn add_oxm_field(&mut self, field: OxmField) {
        self.match_fields.push(field);
    }

    pub fn add_oxm_fields(&mut self, fields: impl IntoIterator<Item = OxmField>) {
        self.match_fields.extend(fields);
    }

    pub fn add_instruction(&mut self, instruction: Instruction) {
        self.instructions.push(instruction);
    }

    pub fn set_cookie(&mut self, cookie: u64, cookie_mask: u64) {
        self.cookie = cookie;
        self.cookie_mask = cookie_mask;
    }

    pub fn set_out_port(&mut self, out_port: u32) {
        self.out_port = out_port;
    }

    pub fn set_out_group(&mut self, out_group: u32) {
        self.out_group = out_group;
    }

    pub fn table_id(&self) -> u8 {
        self.table_id
    }
    pub fn command(&self) -> FlowModCommand {
        self.command
    }
    pub fn priority(&self) -> u16 {
        self.priority
    }
    pub fn cookie(&self) -> u64 {
        self.cookie
    }
    pub fn cookie_mask(&self) -> u64 {
        self.cookie_mask
    }
    pub fn out_port(&self) -> u32 {
        self.out_port
    }
    pub fn out_group(&self) -> u32 {
        self.out_group
    }
    pub fn match_fields(&self) -> &[OxmField] {
        &self.match_fields
    }
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }
}
