use std::fs::File;
use std::os::unix::io::AsRawFd;

use crate::error::{AccessError, Error};

/// Width of a single register access, in bytes.
pub const WORD_SIZE: usize = 4;

///
/// Validate a word access at `offset` within a window of `window` bytes.
///
/// The hardware bus only accepts aligned 32-bit transactions, so a
/// misaligned or out-of-range offset is rejected instead of being
/// truncated to the nearest word.
///
pub fn check_access(offset: usize, window: usize) -> Result<(), AccessError> {
    if offset % WORD_SIZE != 0 {
        return Err(AccessError::Misaligned { offset });
    }

    if offset.saturating_add(WORD_SIZE) > window {
        return Err(AccessError::OutOfRange { offset, window });
    }

    Ok(())
}



///
/// One window of physical address space mapped into the process.
///
/// The mapping always starts on a page boundary: if the requested physical
/// base sits inside a page, the whole containing page range is mapped and
/// the window pointer is advanced by the in-page offset. Accessors see only
/// the requested window.
///
/// Unmapped exactly once, on drop. The mapping stays valid after the owning
/// `DevMem` handle is dropped.
///
pub struct PhysMapping {
    map_base: *mut u8,
    map_len: usize,
    window: *mut u8,
    window_len: usize,
    phys_addr: u64
}

// The mapping is exclusively owned and all accesses go through volatile
// reads/writes of hardware registers, not shared process memory.
unsafe impl Send for PhysMapping {}

impl PhysMapping {
    pub(crate) fn establish(device: &File, phys_addr: u64, len: usize) -> Result<Self, Error> {
        #![allow(
            clippy::cast_possible_truncation,
            clippy::cast_possible_wrap,
            clippy::cast_sign_loss
        )]

        let page_size = unsafe { libc::sysconf(libc::_SC_PAGESIZE) } as u64;
        let page_offset = (phys_addr % page_size) as usize;
        let page_base = phys_addr - (page_offset as u64);

        // The page adjustment widens the requested window; a length near
        // usize::MAX would wrap here.
        let map_len = len
            .checked_add(page_offset)
            .ok_or_else(|| Error::Map(std::io::ErrorKind::InvalidInput.into()))?;

        let map_base = unsafe {
            libc::mmap(
                std::ptr::null_mut(),
                map_len,
                libc::PROT_READ | libc::PROT_WRITE,
                libc::MAP_SHARED,
                device.as_raw_fd(),
                page_base as libc::off_t
            )
        };

        if map_base == libc::MAP_FAILED {
            return Err(Error::Map(std::io::Error::last_os_error()));
        }

        let map_base = map_base.cast::<u8>();
        Ok(Self {
            map_base,
            map_len,
            window: unsafe { map_base.add(page_offset) },
            window_len: len,
            phys_addr
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.window_len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.window_len == 0
    }

    #[must_use]
    pub fn phys_addr(&self) -> u64 {
        self.phys_addr
    }

    /// # Errors
    ///
    /// Returns an error in case of a misaligned or out-of-range offset.
    pub fn read_u32(&self, offset: usize) -> Result<u32, AccessError> {
        check_access(offset, self.window_len)?;
        Ok(unsafe { std::ptr::read_volatile(self.window.add(offset).cast::<u32>()) })
    }

    /// # Errors
    ///
    /// Returns an error in case of a misaligned or out-of-range offset.
    pub fn write_u32(&self, offset: usize, value: u32) -> Result<(), AccessError> {
        check_access(offset, self.window_len)?;
        unsafe { std::ptr::write_volatile(self.window.add(offset).cast::<u32>(), value) };
        Ok(())
    }
}

impl Drop for PhysMapping {
    fn drop(&mut self) {
        let _unmap_status = unsafe { libc::munmap(self.map_base.cast(), self.map_len) };
    }
}



#[cfg(test)]
mod tests {
    use super::{check_access, WORD_SIZE};
    use crate::error::AccessError;

    #[test]
    fn aligned_offsets_inside_the_window_pass() {
        for offset in (0..0x60).step_by(WORD_SIZE) {
            assert_eq!(check_access(offset, 0x60), Ok(()));
        }
    }

    #[test]
    fn misaligned_offsets_are_rejected() {
        for offset in [0x01, 0x02, 0x03, 0x35, 0x4A] {
            assert_eq!(
                check_access(offset, 0x60),
                Err(AccessError::Misaligned { offset })
            );
        }
    }

    #[test]
    fn out_of_range_offsets_are_rejected() {
        assert_eq!(
            check_access(0x60, 0x60),
            Err(AccessError::OutOfRange { offset: 0x60, window: 0x60 })
        );

        // The last word must fit entirely.
        assert_eq!(
            check_access(0x60 - WORD_SIZE, 0x60 - 2),
            Err(AccessError::OutOfRange { offset: 0x5C, window: 0x5E })
        );
    }

    #[test]
    fn empty_window_rejects_everything() {
        assert_eq!(
            check_access(0, 0),
            Err(AccessError::OutOfRange { offset: 0, window: 0 })
        );
    }
}
