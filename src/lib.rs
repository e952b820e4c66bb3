//! IPv4 CIDR calculations: split a block into equal subnets, or list every
//! address it holds.
//!
//! ```
//! use cidr_calc::{cidr_subnets, Config, SubnetSelection};
//! use std::net::Ipv4Addr;
//!
//! let picked = cidr_subnets("192.168.50.10/28", 2, Some(1), &Config::default()).unwrap();
//! assert_eq!(picked, SubnetSelection::Single(Ipv4Addr::new(192, 168, 50, 4)));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

pub use config::Config;
pub use error::CidrError;
pub use models::{get_cidr_mask, CidrBlock};
pub use processing::{
    addresses, block_subnets, cidr_addresses, cidr_subnets, enumerate, partition, select_subnet,
    SubnetSelection,
};
