#![warn(clippy::pedantic)]

pub mod channel;
pub mod error;
pub mod register_bank;
pub mod regs;

pub use channel::{AxiDmaChannel, PollTiming, Transfer};
pub use register_bank::RegisterBank;

use error::Error;

///
/// Map the register window of an AXI DMA block whose channel base sits at
/// `phys_base`.
///
/// # Errors
///
/// Returns an error if the window cannot be mapped.
///
pub fn map_register_window(
    device: &devmem::DevMem,
    phys_base: u64
) -> Result<devmem::PhysMapping, Error> {
    device
        .map(phys_base, regs::REGISTER_WINDOW_LEN)
        .map_err(Error::Mapping)
}
