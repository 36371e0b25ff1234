//! Dumps every IP packet crossing a TUN interface to stderr: a header
//! summary (addresses, carried protocol, TTL or hop limit, transport ports
//! where the protocol has them) followed by a hex dump of the whole packet.
//!
//! Usage: `tundump <interface-name>`. Runs until killed or a read fails.

use std::io;
use std::{env, process};

use tuntap_dump::{dump_packet, Device, Error, Mode, BUFFER_CAPACITY};

fn run(name: &str) -> Result<(), Error> {
    let mut device = Device::open(name, Mode::Tun)?;
    let stderr = io::stderr();
    let mut buffer = [0u8; BUFFER_CAPACITY];
    loop {
        let count = device.read(&mut buffer)?;
        dump_packet(&mut stderr.lock(), &buffer[..count])?;
    }
}

fn main() {
    let mut args = env::args().skip(1);
    let name = match (args.next(), args.next()) {
        (Some(name), None) => name,
        _ => {
            eprintln!("usage: tundump <interface-name>");
            process::exit(1);
        }
    };

    if let Err(e) = run(&name) {
        eprintln!("tundump: {}", e);
        process::exit(1);
    }
}
