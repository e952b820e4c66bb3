//! Plain text report, one address per line.

use super::{AddressReport, SubnetReport};
use crate::processing::SubnetSelection;
use std::io::{self, Write};

/// Lines of the subnet report: a count header, then each subnet indented, or
/// the single offset-selected subnet unindented.
pub fn subnet_lines(report: &SubnetReport) -> Vec<String> {
    let mut lines = vec![format!(
        "CIDR {} subnet /{}: ({} subnets)",
        report.cidr, report.bits, report.count
    )];
    match &report.subnets {
        SubnetSelection::All(subnets) => {
            lines.extend(subnets.iter().map(|sn| format!("  {sn}")));
        }
        SubnetSelection::Single(sn) => lines.push(sn.to_string()),
    }
    lines
}

/// Lines of the address report: a count header, then each address indented.
pub fn address_lines(report: &AddressReport) -> Vec<String> {
    let mut lines = vec![format!(
        "Subnet {}: ({} addresses)",
        report.cidr, report.count
    )];
    lines.extend(report.addresses.iter().map(|a| format!("  {a}")));
    lines
}

/// Write `lines` to `out`, one per line. A reader that went away, as with
/// `| head`, ends the output quietly.
pub fn write_lines<W: Write>(out: &mut W, lines: &[String]) -> io::Result<()> {
    let written = lines
        .iter()
        .try_for_each(|line| writeln!(out, "{line}"))
        .and_then(|_| out.flush());
    match written {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            log::debug!("stdout closed early: {e}");
            Ok(())
        }
        other => other,
    }
}
