//! Splitting a CIDR block into equal-size subnets.

use crate::config::Config;
use crate::error::CidrError;
use crate::models::{block_size, cut_addr, CidrBlock, MAX_LENGTH};
use colored::Colorize;
use serde::Serialize;
use std::net::Ipv4Addr;

/// Result of a subnet request: every subnet, or the one picked by offset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SubnetSelection {
    All(Vec<Ipv4Addr>),
    Single(Ipv4Addr),
}

/// Aligned base, stride and count of the subnets of one block.
#[derive(Debug, Clone, Copy)]
struct Layout {
    base: u32,
    step: u64,
    count: u64,
}

impl Layout {
    fn new(block: &CidrBlock, sub_bits: u8) -> Result<Layout, CidrError> {
        let cidr_bits = MAX_LENGTH - block.mask();
        if sub_bits > cidr_bits {
            return Err(CidrError::invalid(format!(
                "Cannot split {block} with {sub_bits} subnet bits, only {cidr_bits} host bits available"
            )));
        }
        let cidr_size = block_size(block.mask())?;
        let count = 1u64 << sub_bits;
        let base = u32::from(cut_addr(block.addr(), block.mask())?);
        Ok(Layout {
            base,
            step: cidr_size / count,
            count,
        })
    }

    fn nth(&self, n: u64) -> Result<Ipv4Addr, CidrError> {
        self.step
            .checked_mul(n)
            .and_then(|offset| (self.base as u64).checked_add(offset))
            .and_then(|bits| u32::try_from(bits).ok())
            .map(Ipv4Addr::from)
            .ok_or_else(|| {
                CidrError::ArithmeticOverflow(format!(
                    "subnet {n} of {base} stepping {step} leaves the IPv4 space",
                    base = Ipv4Addr::from(self.base),
                    step = self.step
                ))
            })
    }
}

/// Return the base address of every subnet when `block` is split with
/// `sub_bits` extra prefix bits.
///
/// The block address is aligned down to its network address first. The list
/// has `2^sub_bits` entries in ascending order.
pub fn partition(
    block: &CidrBlock,
    sub_bits: u8,
    config: &Config,
) -> Result<Vec<Ipv4Addr>, CidrError> {
    let layout = Layout::new(block, sub_bits)?;
    config.check_limit(layout.count)?;

    let subnets = (0..layout.count)
        .map(|n| layout.nth(n))
        .collect::<Result<Vec<_>, _>>()?;

    log::log!(
        config.log_level(),
        "CIDR {} subnet /{} has {} subnets",
        block.to_string().blue(),
        sub_bits,
        subnets.len()
    );
    Ok(subnets)
}

/// Return the base address of subnet number `offset` (0-indexed) without
/// building the whole list.
pub fn select_subnet(
    block: &CidrBlock,
    sub_bits: u8,
    offset: usize,
) -> Result<Ipv4Addr, CidrError> {
    let layout = Layout::new(block, sub_bits)?;
    let n = offset as u64;
    if n >= layout.count {
        return Err(CidrError::invalid(format!(
            "Offset {offset} out of range, {block} subnet /{sub_bits} has {} subnets",
            layout.count
        )));
    }
    layout.nth(n)
}

/// Number of subnets `block` splits into with `sub_bits`.
pub fn subnet_count(block: &CidrBlock, sub_bits: u8) -> Result<u64, CidrError> {
    Layout::new(block, sub_bits).map(|layout| layout.count)
}

/// Return either all subnets of `block`, or only the one at `offset` when
/// given. `Some(0)` selects the first subnet.
pub fn block_subnets(
    block: &CidrBlock,
    sub_bits: u8,
    offset: Option<usize>,
    config: &Config,
) -> Result<SubnetSelection, CidrError> {
    match offset {
        Some(offset) => {
            let subnet = select_subnet(block, sub_bits, offset)?;
            log::log!(
                config.log_level(),
                "CIDR {} subnet /{} offset {} is {}",
                block.to_string().blue(),
                sub_bits,
                offset,
                subnet
            );
            Ok(SubnetSelection::Single(subnet))
        }
        None => partition(block, sub_bits, config).map(SubnetSelection::All),
    }
}

/// Parse `cidr` and hand it to [`block_subnets`].
pub fn cidr_subnets(
    cidr: &str,
    sub_bits: u8,
    offset: Option<usize>,
    config: &Config,
) -> Result<SubnetSelection, CidrError> {
    let block = CidrBlock::new(cidr)?;
    block_subnets(&block, sub_bits, offset, config)
}
