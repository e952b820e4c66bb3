//! Domain models for CIDR calculations.
//!
//! - [`CidrBlock`] - IPv4 address with prefix length
//! - mask and alignment helpers shared by the processing modules

mod ipv4;

// Re-export public types
pub use ipv4::{block_size, cut_addr, get_cidr_mask, parse_addr, CidrBlock, MAX_LENGTH};
