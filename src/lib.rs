//! A minimal capture API for Linux TUN/TAP interfaces, plus the diagnostic
//! dumpers built on top of it (`tapdump` for link-layer frames, `tundump` for
//! network-layer packets).
//!
//! A [`Device`] wraps the file descriptor returned by the kernel's clone
//! device after a `TUNSETIFF` attach negotiation. Each [`Device::read`] blocks
//! until the interface yields exactly one frame or packet, which the [`dump`]
//! module renders to a diagnostic sink.
//!
//! # Example
//!
//! ```no_run
//! use tuntap_dump::{dump_packet, Device, Mode, BUFFER_CAPACITY};
//!
//! let mut device = Device::open("tun0", Mode::Tun).unwrap();
//! let mut buffer = [0u8; BUFFER_CAPACITY];
//! loop {
//!     let count = device.read(&mut buffer).unwrap();
//!     dump_packet(&mut std::io::stderr().lock(), &buffer[..count]).unwrap();
//! }
//! ```

use std::ffi::NulError;
use std::fmt;
use std::io;

mod raw;

pub mod device;
pub mod dump;
pub mod hex;
pub mod ip;
pub mod protocol;

pub use crate::device::{Device, IfFlags, Mode, BUFFER_CAPACITY};
pub use crate::dump::{dump_frame, dump_packet};
pub use crate::ip::{Ipv4Header, Ipv6Header, Version};
pub use crate::protocol::Protocol;

/// An error from the capture layer.
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    /// The interface name contains an interior NUL byte
    InvalidString,
    /// The interface name cannot be represented within `IFNAMSIZ` bytes
    InvalidInterfaceName,
    /// An OS call failed, recorded with the errno it raised
    ErrnoError(errno::Errno),
    /// Writing to the diagnostic stream failed
    IoError(io::ErrorKind),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidString => write!(f, "interface name contains an interior NUL byte"),
            Error::InvalidInterfaceName => write!(f, "interface name is too long"),
            Error::ErrnoError(e) => write!(f, "OS error: {}", e),
            Error::IoError(e) => write!(f, "io error occurred: {:?}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<NulError> for Error {
    fn from(_: NulError) -> Error {
        Error::InvalidString
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Error {
        Error::IoError(e.kind())
    }
}
