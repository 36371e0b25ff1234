//! Thin declarations over the Linux TUN/TAP UAPI.
//!
//! Everything the device layer asks of the OS goes through this module, so
//! that unit tests can stand in for the kernel with mockall expectations.

#![allow(non_camel_case_types)]

use libc::{c_char, c_short, c_ulong};

#[cfg(test)]
use mockall::automock;

/// Maximum interface name length, terminating NUL included.
pub const IFNAMSIZ: usize = 16;

/// Attach flag: deliver bare IP packets.
pub const IFF_TUN: c_short = 0x0001;
/// Attach flag: deliver whole Ethernet frames.
pub const IFF_TAP: c_short = 0x0002;
/// Attach flag: omit the packet-information prefix on every read.
pub const IFF_NO_PI: c_short = 0x1000;

/// `_IOW('T', 202, int)` from `<linux/if_tun.h>`.
pub const TUNSETIFF: c_ulong = 0x4004_54ca;

/// The clone device every attach request goes through.
pub const CLONE_DEVICE: &[u8] = b"/dev/net/tun\0";

/// Interface request block for `TUNSETIFF`, laid out as in `<linux/if.h>`.
/// Only the name and flags take part in the attach negotiation; the padding
/// covers the rest of the kernel's 40-byte union.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct ifreq {
    pub ifr_name: [c_char; IFNAMSIZ],
    pub ifr_flags: c_short,
    _pad: [u8; 22],
}

#[cfg_attr(test, automock)]
mod ffi {
    use libc::{c_char, c_int, c_ulong, c_void, size_t, ssize_t};

    use super::ifreq;

    extern "C" {
        pub fn open(path: *const c_char, oflag: c_int) -> c_int;
        pub fn ioctl(fd: c_int, request: c_ulong, arg: *mut ifreq) -> c_int;
        pub fn read(fd: c_int, buf: *mut c_void, count: size_t) -> ssize_t;
        pub fn close(fd: c_int) -> c_int;
    }
}

#[cfg(not(test))]
pub use ffi::*;
#[cfg(test)]
pub use mock_ffi::*;
