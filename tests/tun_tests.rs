/***
 * Live-interface tests. These need a Linux kernel with the TUN driver loaded
 * and must run as root, so they are ignored by default:
 *
 *   cargo test --no-run --test tun_tests |& \
 *             sed -e 's/[()]//g' | \
 *             awk '/Executable/ {print $3" --include-ignored"}' | \
 *             xargs sudo
 *
 * which does the build as a non-priv user, extracts the test binary location
 * from 'cargo test', and runs only that as root.
 */

use std::net::UdpSocket;
use std::process::Command;

use tuntap_dump::{dump_packet, Device, Error, Mode, BUFFER_CAPACITY};

/**
 * Run a command on the shell, check the output, and pretty print a panic
 * message and the stderr if it fails.
 */
fn safe_run_command(cmd: String) {
    let mut split_cmd = cmd.split_ascii_whitespace();
    let output = Command::new(split_cmd.next().unwrap())
        .args(split_cmd.collect::<Vec<&str>>())
        .output()
        .unwrap();
    if !output.status.success() {
        panic!(
            "safe_run_command FAILED: '{}' command returned stderr '{:#?}'",
            cmd,
            String::from_utf8(output.stderr)
        );
    }
}

/// Needs no privileges: the name is rejected before any OS call.
#[test]
fn oversized_interface_name_is_rejected() {
    let err = Device::open("0123456789abcdef", Mode::Tun).unwrap_err();
    assert_eq!(err, Error::InvalidInterfaceName);
}

/**
 * Create a TUN interface, route a UDP datagram into it, and make sure the
 * dissector renders the datagram we sent.
 */
#[test]
#[ignore]
fn tun_udp_capture() {
    let mut device = Device::open("dumptest%d", Mode::Tun).unwrap();
    let name = device.name().to_string();
    assert!(name.starts_with("dumptest"));

    safe_run_command(format!("ip addr add 10.107.1.1/24 dev {}", name));
    safe_run_command(format!("ip link set dev {} up", name));

    let socket = UdpSocket::bind("10.107.1.1:0").unwrap();
    socket.send_to(b"ping", "10.107.1.2:9000").unwrap();

    // The fresh interface also attracts kernel chatter (router solicitations
    // and the like); skip units until the datagram shows up.
    let mut buffer = [0u8; BUFFER_CAPACITY];
    for _ in 0..32 {
        let count = device.read(&mut buffer).unwrap();
        let mut rendered = Vec::new();
        dump_packet(&mut rendered, &buffer[..count]).unwrap();
        let rendered = String::from_utf8(rendered).unwrap();
        if rendered.contains("proto=17(udp)") {
            assert!(rendered.contains("dst=10.107.1.2"));
            assert!(rendered.contains("dport=9000"));
            return;
        }
    }
    panic!("UDP datagram never crossed {}", name);
}

/**
 * A TAP attach must register the interface with the kernel under the
 * completed name.
 */
#[test]
#[ignore]
fn tap_attach_registers_interface() {
    let device = Device::open("dumptest%d", Mode::Tap).unwrap();
    safe_run_command(format!("ip link show {}", device.name()));
}
