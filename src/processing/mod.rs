//! Subnet and address calculations.
//!
//! - [`subnet_split`] - splitting a block into equal subnets
//! - [`address_list`] - listing every address of a block

mod address_list;
mod subnet_split;

// Re-export public functions
pub use address_list::{addresses, cidr_addresses, enumerate};
pub use subnet_split::{
    block_subnets, cidr_subnets, partition, select_subnet, subnet_count, SubnetSelection,
};
