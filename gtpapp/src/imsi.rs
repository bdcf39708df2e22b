//! imsi - compact IMSI encoding stamped into flow metadata
//!
//! Downstream tables correlate flows by subscriber, so the IMSI travels in
//! the 64-bit metadata field rather than as a string.  The encoding packs
//! the numeric value and the count of leading zeros, which makes it
//! injective over digit strings and stable across restarts.

use anyhow::{Result, ensure};

const MAX_IMSI_DIGITS: usize = 15;
const LEADING_ZERO_BITS: u32 = 4;

/// Packs an IMSI digit string into a u64.
pub fn compact_imsi(imsi: &str) -> Result<u64> {
    ensure!(!imsi.is_empty(), "IMSI must not be empty");
    ensure!(
        imsi.len() <= MAX_IMSI_DIGITS,
        "IMSI '{}' is longer than {} digits",
        imsi,
        MAX_IMSI_DIGITS
    );
    ensure!(
        imsi.chars().all(|c| c.is_ascii_digit()),
        "IMSI '{}' contains a non digit",
        imsi
    );

    let leading_zeros = imsi.chars().take_while(|c| *c == '0').count() as u64;
    // 15 digits fit in 50 bits, so the value cannot collide with the
    // leading-zero count in the low bits.
    let value: u64 = imsi.parse()?;
    Ok((value << LEADING_ZERO_BITS) | leading_zeros)
}

/// Restores the IMSI digit string from its compact form.
pub fn expand_imsi(compact: u64) -> String {
    let leading_zeros = (compact & ((1 << LEADING_ZERO_BITS) - 1)) as usize;
    let value = compact >> LEADING_ZERO_BITS;
    let mut imsi = "0".repeat(leading_zeros);
    if value != 0 {
        imsi.push_str(&value.to_string());
    }
    imsi
}
