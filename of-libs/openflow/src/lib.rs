mod flow_mod;
mod mac;
mod messenger;

pub use flow_mod::{
    Action, ETH_TYPE_IPV4, FlowMod, FlowModCommand, Instruction, OFPG_ANY, OFPP_ANY, OFPP_LOCAL,
    OxmField,
};
pub use mac::MacAddress;
pub use messenger::{ConnectionHandle, FlowError, FlowMessenger};
