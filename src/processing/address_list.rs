//! Listing every address in a CIDR block.

use crate::config::Config;
use crate::error::CidrError;
use crate::models::{parse_addr, CidrBlock};
use colored::Colorize;
use std::net::Ipv4Addr;

/// Iterate the addresses of `block` in ascending order, starting at the
/// network address.
pub fn addresses(block: &CidrBlock) -> impl DoubleEndedIterator<Item = Ipv4Addr> {
    let lo = u32::from(block.lo());
    let hi = u32::from(block.hi());
    (lo..=hi).map(Ipv4Addr::from)
}

/// Collect every address of `block`, aligned down to its network address.
pub fn enumerate(block: &CidrBlock, config: &Config) -> Result<Vec<Ipv4Addr>, CidrError> {
    config.check_limit(block.size())?;
    let exploded: Vec<Ipv4Addr> = addresses(block).collect();
    log::log!(
        config.log_level(),
        "Subnet {} has {} addresses",
        block.to_string().blue(),
        exploded.len()
    );
    Ok(exploded)
}

/// Parse `base` and list the addresses of `base/prefix`.
pub fn cidr_addresses(
    base: &str,
    prefix: u8,
    config: &Config,
) -> Result<Vec<Ipv4Addr>, CidrError> {
    let block = CidrBlock::from_parts(parse_addr(base)?, prefix)?;
    enumerate(&block, config)
}
