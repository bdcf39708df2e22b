use anyhow::{Result, ensure};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MacAddress(pub [u8; 6]);

impl TryFrom<&str> for MacAddress {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self> {
        let bytes = hex::decode(s.split(':').collect::<String>())?;
        ensure!(bytes.len() == 6, "Bad MAC address length in '{}'", s);
        Ok(MacAddress(bytes.try_into().unwrap()))
    }
}

impl std::fmt::Display for MacAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let b = &self.0;
        write!(
            f,
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            b[0], b[1], b[2], b[3], b[4], b[5]
        )
    }
}
