//! Command line arguments and the report they produce.

use crate::config::Config;
use crate::error::CidrError;
use crate::models::CidrBlock;
use crate::output::{address_lines, subnet_lines, to_json, AddressReport, SubnetReport};
use crate::processing::{block_subnets, enumerate, subnet_count};
use clap::Parser;
use colored::Colorize;
use std::error::Error;

const EXAMPLE_USE: &str = "example: cidr-calc -c 192.168.50.10/28 -b 2 -o 1";

/// CIDR calculating functions: split a block into subnets or list its addresses.
#[derive(Parser, Debug)]
#[command(name = "cidr-calc", after_help = EXAMPLE_USE)]
pub struct Args {
    /// subnet bits
    #[arg(
        short,
        long,
        required_unless_present = "addresses",
        conflicts_with = "addresses"
    )]
    pub bits: Option<u8>,

    /// cidr block (ie: 192.168.10.80/28)
    #[arg(short, long)]
    pub cidr: String,

    /// subnet offset selector, 0 is the first subnet
    #[arg(short, long, conflicts_with = "addresses")]
    pub offset: Option<usize>,

    /// list every address of the cidr block instead of splitting it
    #[arg(short, long)]
    pub addresses: bool,

    /// refuse to build lists longer than this
    #[arg(short, long)]
    pub max_results: Option<u64>,

    /// print JSON instead of text
    #[arg(short, long)]
    pub json: bool,

    /// log diagnostics to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Apply command line overrides on top of `base`.
    pub fn config(&self, base: Config) -> Config {
        Config {
            verbose: base.verbose || self.verbose,
            max_results: self.max_results.unwrap_or(base.max_results),
        }
    }
}

/// Run the requested calculation and return the lines to print.
pub fn run(args: &Args, config: &Config) -> Result<Vec<String>, Box<dyn Error>> {
    let block = CidrBlock::new(&args.cidr)?;
    if args.addresses {
        let addresses = enumerate(&block, config)?;
        let report = AddressReport {
            cidr: block,
            count: addresses.len() as u64,
            addresses,
        };
        return Ok(if args.json {
            vec![to_json(&report)?]
        } else {
            address_lines(&report)
        });
    }

    let bits = args
        .bits
        .ok_or_else(|| CidrError::invalid("subnet bits are required"))?;
    let report = SubnetReport {
        cidr: block,
        bits,
        count: subnet_count(&block, bits)?,
        offset: args.offset,
        subnets: block_subnets(&block, bits, args.offset, config)?,
    };
    Ok(if args.json {
        vec![to_json(&report)?]
    } else {
        subnet_lines(&report)
    })
}

/// One-line message shown on stderr when the program fails.
pub fn error_message(e: &dyn Error) -> String {
    format!("{} {e}", "ERROR".on_red())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("cidr-calc").chain(argv.iter().copied()))
            .expect("valid arguments")
    }

    #[test]
    fn test_parse_short_flags() {
        let args = parse(&["-c", "192.168.50.10/28", "-b", "2", "-o", "1"]);
        assert_eq!(args.cidr, "192.168.50.10/28");
        assert_eq!(args.bits, Some(2));
        assert_eq!(args.offset, Some(1));
        assert!(!args.addresses);
    }

    #[test]
    fn test_parse_requires_bits() {
        assert!(Args::try_parse_from(["cidr-calc", "-c", "10.0.0.0/24"]).is_err());
        assert!(Args::try_parse_from(["cidr-calc", "-c", "10.0.0.0/24", "-a"]).is_ok());
        assert!(Args::try_parse_from(["cidr-calc", "-b", "2"]).is_err());
    }

    #[test]
    fn test_parse_offset_conflicts_with_addresses() {
        assert!(
            Args::try_parse_from(["cidr-calc", "-c", "10.0.0.0/24", "-a", "-o", "1"]).is_err()
        );
    }

    #[test]
    fn test_parse_bits_conflicts_with_addresses() {
        let err = Args::try_parse_from(["cidr-calc", "-c", "10.0.0.0/24", "-a", "-b", "9"])
            .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_config_overrides() {
        let args = parse(&["-c", "10.0.0.0/24", "-b", "1", "-m", "8", "-v"]);
        let config = args.config(Config::default());
        assert!(config.verbose);
        assert_eq!(config.max_results, 8);

        let args = parse(&["-c", "10.0.0.0/24", "-b", "1"]);
        assert_eq!(args.config(Config::default()), Config::default());
    }

    #[test]
    fn test_run_subnets() {
        let args = parse(&["--cidr", "192.168.50.0/28", "--bits", "2"]);
        let lines = run(&args, &args.config(Config::default())).unwrap();
        assert_eq!(
            lines,
            vec![
                "CIDR 192.168.50.0/28 subnet /2: (4 subnets)",
                "  192.168.50.0",
                "  192.168.50.4",
                "  192.168.50.8",
                "  192.168.50.12",
            ]
        );
    }

    #[test]
    fn test_run_offset() {
        let args = parse(&["-c", "192.168.50.10/28", "-b", "2", "-o", "1"]);
        let lines = run(&args, &Config::default()).unwrap();
        assert_eq!(
            lines,
            vec!["CIDR 192.168.50.10/28 subnet /2: (4 subnets)", "192.168.50.4"]
        );
    }

    #[test]
    fn test_run_addresses_json() {
        let args = parse(&["-c", "192.168.50.0/30", "-a", "-j"]);
        let lines = run(&args, &Config::default()).unwrap();
        assert_eq!(lines.len(), 1);
        let value: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(value["count"], 4);
        assert_eq!(value["addresses"][3], "192.168.50.3");
    }

    #[test]
    fn test_run_errors() {
        let args = parse(&["-c", "192.168.50.0/28", "-b", "5"]);
        assert!(run(&args, &Config::default()).is_err());

        let args = parse(&["-c", "10.0.0.0/8", "-a", "-m", "256"]);
        let err = run(&args, &args.config(Config::default())).unwrap_err();
        assert!(err.to_string().contains("limit is 256"), "{err}");
    }

    #[test]
    fn test_error_message_uses_display() {
        colored::control::set_override(false);
        let err = CidrError::Config("CIDR_CALC_MAX_RESULTS='lots' is not a number".to_string());
        assert_eq!(
            error_message(&err),
            "ERROR invalid configuration: CIDR_CALC_MAX_RESULTS='lots' is not a number"
        );
    }
}
