use devmem::error::AccessError;
use devmem::PhysMapping;

///
/// Word-addressed view of a block of hardware registers.
///
/// Implementations must turn every call into exactly one 32-bit bus
/// transaction, in program order: register accesses have side effects, so
/// they may never be cached, coalesced or elided. Offsets are byte offsets
/// from the window base; implementations validate alignment and bounds.
///
pub trait RegisterBank {
    /// Length of the register window in bytes. Accesses at or beyond this
    /// bound are rejected by `read`/`write`.
    fn window_len(&self) -> usize;

    /// # Errors
    ///
    /// Returns an error in case of a misaligned or out-of-range offset.
    fn read(&self, offset: usize) -> Result<u32, AccessError>;

    /// # Errors
    ///
    /// Returns an error in case of a misaligned or out-of-range offset.
    fn write(&self, offset: usize, value: u32) -> Result<(), AccessError>;
}

impl RegisterBank for PhysMapping {
    fn window_len(&self) -> usize {
        self.len()
    }

    fn read(&self, offset: usize) -> Result<u32, AccessError> {
        self.read_u32(offset)
    }

    fn write(&self, offset: usize, value: u32) -> Result<(), AccessError> {
        self.write_u32(offset, value)
    }
}


#[cfg(test)]
mod tests {
    use devmem::error::AccessError;
    use devmem::DevMem;

    use super::RegisterBank;
    use crate::regs;

    // A mapped scratch file behaves like a mapped register window as far
    // as the seam is concerned.
    #[test]
    fn mapped_window_implements_the_seam() {
        let path = std::env::temp_dir()
            .join(format!("axidma_seam_{}", std::process::id()));
        let file = std::fs::File::create(&path).unwrap();
        file.set_len(4096).unwrap();

        let device = DevMem::open_path(path.to_str().unwrap()).unwrap();
        let mapping = device.map(0, regs::S2MM.length + 4).unwrap();
        let bank: &dyn RegisterBank = &mapping;

        assert_eq!(bank.window_len(), regs::S2MM.length + 4);

        bank.write(regs::S2MM.address_lsb, 0x77F1_2000).unwrap();
        assert_eq!(bank.read(regs::S2MM.address_lsb), Ok(0x77F1_2000));

        assert_eq!(
            bank.read(bank.window_len()),
            Err(AccessError::OutOfRange {
                offset: regs::S2MM.length + 4,
                window: regs::S2MM.length + 4
            })
        );

        drop(mapping);
        drop(device);
        std::fs::remove_file(&path).unwrap();
    }
}
