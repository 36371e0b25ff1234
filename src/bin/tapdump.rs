//! Dumps every Ethernet frame crossing a TAP interface to stderr as one line
//! of bare hex. No header interpretation.
//!
//! Usage: `tapdump <interface-name>`. Runs until killed or a read fails.

use std::io;
use std::{env, process};

use tuntap_dump::{dump_frame, Device, Error, Mode, BUFFER_CAPACITY};

fn run(name: &str) -> Result<(), Error> {
    let mut device = Device::open(name, Mode::Tap)?;
    let stderr = io::stderr();
    let mut buffer = [0u8; BUFFER_CAPACITY];
    loop {
        let count = device.read(&mut buffer)?;
        dump_frame(&mut stderr.lock(), &buffer[..count])?;
    }
}

fn main() {
    let mut args = env::args().skip(1);
    let name = match (args.next(), args.next()) {
        (Some(name), None) => name,
        _ => {
            eprintln!("usage: tapdump <interface-name>");
            process::exit(1);
        }
    };

    if let Err(e) = run(&name) {
        eprintln!("tapdump: {}", e);
        process::exit(1);
    }
}
