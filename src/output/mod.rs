//! Output formatting for calculation results.
//!
//! - [`text`] - the line report printed by default
//! - JSON via serde for `--json`

mod text;

use crate::models::CidrBlock;
use crate::processing::SubnetSelection;
use serde::Serialize;
use std::net::Ipv4Addr;

pub use text::{address_lines, subnet_lines, write_lines};

/// Subnets of one block, as reported to the user.
#[derive(Debug, Clone, Serialize)]
pub struct SubnetReport {
    pub cidr: CidrBlock,
    pub bits: u8,
    /// Total subnets in the split, also when only one is selected.
    pub count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<usize>,
    pub subnets: SubnetSelection,
}

/// Addresses of one block, as reported to the user.
#[derive(Debug, Clone, Serialize)]
pub struct AddressReport {
    pub cidr: CidrBlock,
    pub count: u64,
    pub addresses: Vec<Ipv4Addr>,
}

/// Render a report as pretty JSON.
pub fn to_json<T: Serialize>(report: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
