//! IPv4 address and CIDR notation utilities.
//!
//! Provides [`CidrBlock`] for representing an address with a prefix length,
//! along with the mask and alignment helpers the subnet calculations use.

use crate::error::CidrError;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Mask for a prefix length already known to be in range.
fn mask_bits(len: u8) -> u32 {
    debug_assert!(len <= MAX_LENGTH);
    let right_len = MAX_LENGTH - len;
    let all_bits = u32::MAX as u64;
    ((all_bits >> right_len) << right_len) as u32
}

fn check_length(len: u8) -> Result<(), CidrError> {
    if len > MAX_LENGTH {
        Err(CidrError::invalid(format!(
            "Network length /{len} is too long, max is /{MAX_LENGTH}"
        )))
    } else {
        Ok(())
    }
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// Lengths above 32 are rejected rather than wrapped.
///
/// # Examples
/// ```
/// use cidr_calc::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// assert!(get_cidr_mask(33).is_err());
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, CidrError> {
    check_length(len)?;
    Ok(mask_bits(len))
}

/// Network bits of `addr` for a prefix length already known to be in range.
fn network_bits(addr: Ipv4Addr, len: u8) -> u32 {
    u32::from(addr) & mask_bits(len)
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, CidrError> {
    check_length(len)?;
    Ok(Ipv4Addr::from(network_bits(addr, len)))
}

/// Number of addresses in a block with the given prefix length, `2^(32-len)`.
pub fn block_size(len: u8) -> Result<u64, CidrError> {
    check_length(len)?;
    Ok(1u64 << (MAX_LENGTH - len))
}

/// IPv4 address with CIDR prefix length.
///
/// The address is kept as given; [`CidrBlock::lo`] returns the aligned
/// network address.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct CidrBlock {
    addr: Ipv4Addr,
    mask: u8,
}

impl Serialize for CidrBlock {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for CidrBlock {
    fn deserialize<D>(deserializer: D) -> Result<CidrBlock, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        CidrBlock::new(&s).map_err(de::Error::custom)
    }
}

impl CidrBlock {
    /// Create a new [`CidrBlock`] from a CIDR string (e.g. "10.0.0.0/24").
    pub fn new(addr_cidr: &str) -> Result<CidrBlock, CidrError> {
        let addr_cidr = addr_cidr.trim();
        let parts: Vec<&str> = addr_cidr.split('/').collect();
        if parts.len() != 2 {
            return Err(CidrError::invalid(format!(
                "Invalid address/prefix '{addr_cidr}'"
            )));
        }
        let addr = parse_addr(parts[0])?;
        let mask: u8 = parts[1]
            .parse()
            .map_err(|_| CidrError::invalid(format!("Invalid prefix length '{}'", parts[1])))?;
        CidrBlock::from_parts(addr, mask)
    }

    /// Build a block from an address and prefix length.
    pub fn from_parts(addr: Ipv4Addr, mask: u8) -> Result<CidrBlock, CidrError> {
        check_length(mask)?;
        Ok(CidrBlock { addr, mask })
    }

    /// The address as given, not necessarily aligned.
    pub fn addr(&self) -> Ipv4Addr {
        self.addr
    }

    /// The prefix length (0-32).
    pub fn mask(&self) -> u8 {
        self.mask
    }

    /// The network mask for this prefix.
    pub fn netmask(&self) -> u32 {
        mask_bits(self.mask)
    }

    /// Get the lowest (network) address in the block.
    pub fn lo(&self) -> Ipv4Addr {
        Ipv4Addr::from(network_bits(self.addr, self.mask))
    }

    /// Get the highest (broadcast) address in the block.
    pub fn hi(&self) -> Ipv4Addr {
        Ipv4Addr::from(network_bits(self.addr, self.mask) | !self.netmask())
    }

    /// Number of addresses in the block.
    pub fn size(&self) -> u64 {
        1u64 << (MAX_LENGTH - self.mask)
    }
}

/// Parse a dotted-decimal IPv4 address.
pub fn parse_addr(addr: &str) -> Result<Ipv4Addr, CidrError> {
    let addr = addr.trim();
    addr.parse()
        .map_err(|_| CidrError::invalid(format!("Invalid address '{addr}'")))
}

impl FromStr for CidrBlock {
    type Err = CidrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CidrBlock::new(s)
    }
}

impl std::fmt::Display for CidrBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}
