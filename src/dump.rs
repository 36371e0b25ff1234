//! Rendering of captured units to the diagnostic stream.
//!
//! Every function here is a pure transformation from captured bytes to text
//! lines on the supplied sink; dissecting the same bytes twice produces
//! byte-identical output.

use std::io::{self, Write};

use crate::hex;
use crate::ip::{Ipv4Header, Ipv6Header, Version};
use crate::protocol::Protocol;

/// Rendering for a protocol number with no registry name.
const UNKNOWN_PROTOCOL: &str = "?";

/// Renders one link-layer frame as a single line of bare hex.
pub fn dump_frame<W: Write>(out: &mut W, frame: &[u8]) -> io::Result<()> {
    writeln!(out, "{}", hex::encode(frame))
}

/// Renders one network-layer packet: version dispatch, a one-line header
/// summary with the transport port pair where the carried protocol has one,
/// and a hex dump of the whole unit.
///
/// Malformed units (empty, truncated, or an unrecognized version nibble)
/// produce a single diagnostic line instead.
///
/// IPv6 extension headers are not walked: when the fixed header's next-header
/// field names one, port extraction reads the first extension-header bytes
/// rather than a transport header.
pub fn dump_packet<W: Write>(out: &mut W, packet: &[u8]) -> io::Result<()> {
    match Version::sniff(packet) {
        None => writeln!(out, "empty packet"),
        Some(Version::V4) => dump_ipv4(out, packet),
        Some(Version::V6) => dump_ipv6(out, packet),
        Some(Version::Unknown(_)) => writeln!(out, "Unknown packet version"),
    }
}

fn dump_ipv4<W: Write>(out: &mut W, packet: &[u8]) -> io::Result<()> {
    let header = match Ipv4Header::new(packet) {
        Some(header) => header,
        None => return writeln!(out, "IPv4 packet too short"),
    };

    let protocol = header.protocol();
    writeln!(
        out,
        "IPv4: src={} dst={} proto={}({}) ttl={}",
        header.source(),
        header.destination(),
        protocol.0,
        protocol.name().unwrap_or(UNKNOWN_PROTOCOL),
        header.ttl(),
    )?;
    dump_ports(out, protocol, header.payload())?;
    writeln!(out, " HEX: {}", hex::encode(packet))
}

fn dump_ipv6<W: Write>(out: &mut W, packet: &[u8]) -> io::Result<()> {
    let header = match Ipv6Header::new(packet) {
        Some(header) => header,
        None => return writeln!(out, "IPv6 packet too short"),
    };

    let protocol = header.next_header();
    writeln!(
        out,
        "IPv6: src={} dst={} proto={}({}) hop_limit={}",
        hex::encode(header.source()),
        hex::encode(header.destination()),
        protocol.0,
        protocol.name().unwrap_or(UNKNOWN_PROTOCOL),
        header.hop_limit(),
    )?;
    dump_ports(out, protocol, header.payload())?;
    writeln!(out, " HEX: {}", hex::encode(packet))
}

/// Prints the transport port pair when `protocol` carries one and `payload`
/// is long enough to hold it; silent otherwise.
fn dump_ports<W: Write>(out: &mut W, protocol: Protocol, payload: &[u8]) -> io::Result<()> {
    if !protocol.has_ports() || payload.len() < 4 {
        return Ok(());
    }
    let sport = u16::from_be_bytes([payload[0], payload[1]]);
    let dport = u16::from_be_bytes([payload[2], payload[3]]);
    writeln!(out, " sport={}, dport={}", sport, dport)
}
