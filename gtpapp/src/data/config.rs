use openflow::MacAddress;

// Source MAC stamped on decapsulated uplink packets.  Locally administered,
// never seen outside the gateway.
const GTP_PORT_MAC: MacAddress = MacAddress([0x02, 0x00, 0x00, 0x00, 0x00, 0x01]);

// Placeholder for the uplink-facing MAC, which is deployment specific and
// normally supplied by the surrounding system's configuration.
const UPLINK_MAC: MacAddress = MacAddress([0x02, 0x00, 0x00, 0x00, 0x00, 0x02]);

const DEFAULT_PRIORITY: u16 = 10;

// Tunnel rules live in the first table and hand off to the next one.
const GTP_TABLE: u8 = 0;
const NEXT_TABLE: u8 = 1;

// Cookie tagging uplink gate rules.  Downlink gate rules use the next value.
const GATE_COOKIE: u64 = 0x5e47;

#[derive(Debug, Clone)]
pub struct Config {
    // Switch port bound to the GTP tunnel endpoint
    pub gtp_port: u32,

    // MAC address of the uplink-facing port, set as destination on
    // decapsulated packets
    pub uplink_mac: MacAddress,

    // Fixed source MAC for decapsulated packets
    pub gtp_port_mac: MacAddress,

    // Table holding the tunnel rules
    pub table: u8,

    // Table that matched packets continue to
    pub next_table: u8,

    // Priority of base forwarding rules.  Gate overrides use this + 1.
    pub default_priority: u16,

    // Cookie for uplink gate rules.  Downlink gate rules use this + 1.
    pub gate_cookie: u64,
}

impl Config {
    pub fn gate_priority(&self) -> u16 {
        self.default_priority + 1
    }

    pub fn uplink_gate_cookie(&self) -> u64 {
        self.gate_cookie
    }

    pub fn downlink_gate_cookie(&self) -> u64 {
        self.gate_cookie + 1
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gtp_port: 1,
            uplink_mac: UPLINK_MAC,
            gtp_port_mac: GTP_PORT_MAC,
            table: GTP_TABLE,
            next_table: NEXT_TABLE,
            default_priority: DEFAULT_PRIORITY,
            gate_cookie: GATE_COOKIE,
        }
    }
}
