//! Acquisition of TUN/TAP interface handles.

use std::ffi::{CStr, CString};
use std::mem;
use std::os::unix::io::{AsRawFd, RawFd};

use bitflags::bitflags;
use libc::{c_char, c_short, c_void};

use crate::{raw, Error};

/// Capture buffer capacity. A single read never yields more than this many
/// bytes; the kernel truncates anything larger.
pub const BUFFER_CAPACITY: usize = 4 * 1024;

bitflags! {
    /// Flags carried by a `TUNSETIFF` attach request.
    pub struct IfFlags: c_short {
        /// Deliver bare IP packets, no layer-2 framing.
        const TUN = raw::IFF_TUN;
        /// Deliver whole Ethernet frames.
        const TAP = raw::IFF_TAP;
        /// Do not prefix each unit with the packet-information header.
        const NO_PI = raw::IFF_NO_PI;
    }
}

/// The framing an attached interface delivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Network layer: one read yields one bare IP packet.
    Tun,
    /// Link layer: one read yields one whole Ethernet frame.
    Tap,
}

impl Mode {
    fn flags(self) -> IfFlags {
        match self {
            Mode::Tun => IfFlags::TUN,
            Mode::Tap => IfFlags::TAP,
        }
    }
}

/// A readable handle bound to a TUN or TAP interface.
///
/// The underlying descriptor is closed when the `Device` is dropped; the
/// interface itself disappears with it unless it was made persistent
/// elsewhere.
#[derive(Debug)]
pub struct Device {
    fd: RawFd,
    name: String,
    mode: Mode,
}

impl Device {
    /// Opens the clone device and attaches it to the named interface with
    /// the framing selected by `mode`.
    ///
    /// A name ending in `%d` is completed by the kernel; the final name is
    /// read back from the attach request and is available via
    /// [`name`](Device::name).
    pub fn open(name: &str, mode: Mode) -> Result<Device, Error> {
        let request_name = CString::new(name)?;
        if request_name.as_bytes_with_nul().len() > raw::IFNAMSIZ {
            return Err(Error::InvalidInterfaceName);
        }

        let fd = unsafe { raw::open(raw::CLONE_DEVICE.as_ptr() as *const c_char, libc::O_RDWR) };
        if fd < 0 {
            return Err(Error::ErrnoError(errno::errno()));
        }

        let mut ifr: raw::ifreq = unsafe { mem::zeroed() };
        for (dst, src) in ifr.ifr_name.iter_mut().zip(request_name.as_bytes()) {
            *dst = *src as c_char;
        }
        ifr.ifr_flags = (mode.flags() | IfFlags::NO_PI).bits();

        if unsafe { raw::ioctl(fd, raw::TUNSETIFF, &mut ifr) } < 0 {
            let err = Error::ErrnoError(errno::errno());
            unsafe { raw::close(fd) };
            return Err(err);
        }

        // The kernel writes the completed name back into the request block.
        let name = unsafe { CStr::from_ptr(ifr.ifr_name.as_ptr()) }
            .to_string_lossy()
            .into_owned();

        Ok(Device { fd, name, mode })
    }

    /// The interface name as registered by the kernel.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The framing this handle was attached with.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Blocks until the interface yields one frame or packet, copies it into
    /// `buf`, and returns its length.
    pub fn read(&mut self, buf: &mut [u8]) -> Result<usize, Error> {
        let count = unsafe { raw::read(self.fd, buf.as_mut_ptr() as *mut c_void, buf.len()) };
        if count < 0 {
            return Err(Error::ErrnoError(errno::errno()));
        }
        Ok(count as usize)
    }
}

impl AsRawFd for Device {
    fn as_raw_fd(&self) -> RawFd {
        self.fd
    }
}

impl Drop for Device {
    fn drop(&mut self) {
        unsafe { raw::close(self.fd) };
    }
}
