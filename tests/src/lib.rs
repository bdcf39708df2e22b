pub mod framework;

pub use mock_switch::{FlowEntry, MockSwitch};
