#![warn(clippy::pedantic)]

pub mod error;
pub mod mapping;

pub use mapping::PhysMapping;

use std::fs::{File, OpenOptions};
use std::os::unix::fs::OpenOptionsExt;

use error::Error;

/// Default path of the physical memory device.
pub const DEVICE_PATH: &str = "/dev/mem";

///
/// Handle to the physical memory device.
///
/// Opened with `O_SYNC` so that accesses through mappings of device memory
/// are uncached: every load and store becomes a bus transaction observed by
/// the hardware.
///
pub struct DevMem {
    device: File
}

impl DevMem {
    /// # Errors
    ///
    /// Returns an error if the physical memory device cannot be opened,
    /// usually due to missing privileges.
    pub fn open() -> Result<Self, Error> {
        Self::open_path(DEVICE_PATH)
    }

    /// # Errors
    ///
    /// Returns an error if the given device cannot be opened.
    pub fn open_path(path: &str) -> Result<Self, Error> {
        let device = OpenOptions::new()
            .read(true)
            .write(true)
            .custom_flags(libc::O_SYNC)
            .open(path)
            .map_err(Error::Open)?;

        Ok(Self { device })
    }

    ///
    /// Map `len` bytes of physical address space starting at `phys_addr`
    /// as shared, readable and writable memory.
    ///
    /// # Errors
    ///
    /// Returns an error if the mapping cannot be established (invalid
    /// range or insufficient permissions).
    ///
    pub fn map(&self, phys_addr: u64, len: usize) -> Result<PhysMapping, Error> {
        PhysMapping::establish(&self.device, phys_addr, len)
    }
}
