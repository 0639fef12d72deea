use std::thread;
use std::time::{Duration, Instant};

use crate::error::Error;
use crate::register_bank::RegisterBank;
use crate::regs::{self, ChannelOffsets};

///
/// One transfer as the hardware sees it: a physical buffer address and a
/// byte count, written straight into the channel registers.
///
#[derive(Debug, Clone, Copy)]
pub struct Transfer {
    pub address: u64,
    pub len_bytes: u32
}

/// Timing bounds of the blocking transfer sequence.
#[derive(Debug, Clone, Copy)]
pub struct PollTiming {
    /// How long to let the soft reset take effect. Not a handshake: the
    /// reset completion is not acknowledged by the hardware.
    pub reset_settle: Duration,

    /// Sleep between status polls.
    pub poll_interval: Duration,

    /// Upper bound on the whole poll loop.
    pub timeout: Duration
}

impl PollTiming {
    pub const DEFAULT: Self = Self {
        reset_settle: Duration::from_millis(10),
        poll_interval: Duration::from_micros(100),
        timeout: Duration::from_secs(1)
    };
}

impl Default for PollTiming {
    fn default() -> Self {
        Self::DEFAULT
    }
}



///
/// Driver for one channel of the AXI DMA block in direct register mode.
///
/// Borrows a register bank instead of owning the mapping, so the control
/// sequence can run against real hardware or a simulated register file.
/// Blocking and single-threaded: one software writer, one hardware agent,
/// sequenced by the register protocol alone.
///
pub struct AxiDmaChannel<'a, Regs: RegisterBank> {
    regs: &'a Regs,
    offsets: ChannelOffsets
}

impl<'a, Regs: RegisterBank> AxiDmaChannel<'a, Regs> {
    /// Inbound channel: the DMA engine writes stream data into memory.
    #[must_use]
    pub fn s2mm(regs: &'a Regs) -> Self {
        Self { regs, offsets: regs::S2MM }
    }

    /// Outbound channel: the DMA engine reads memory onto the stream.
    #[must_use]
    pub fn mm2s(regs: &'a Regs) -> Self {
        Self { regs, offsets: regs::MM2S }
    }

    /// # Errors
    ///
    /// Returns an error in case of an invalid register access.
    pub fn control(&self) -> Result<u32, Error> {
        self.regs.read(self.offsets.control).map_err(Error::Register)
    }

    /// Raw status word, undecoded. The idle bit is the only bit this
    /// driver interprets; the rest is the caller's diagnostic material.
    ///
    /// # Errors
    ///
    /// Returns an error in case of an invalid register access.
    pub fn status(&self) -> Result<u32, Error> {
        self.regs.read(self.offsets.status).map_err(Error::Register)
    }

    ///
    /// Run one transfer to completion:
    ///
    ///   0. Reject a buffer address that does not match the bus word
    ///      granularity, before any register is touched. The address
    ///      registers would silently drop the low bits otherwise.
    ///   1. Soft-reset the channel and let the reset settle.
    ///   2. Set the run bit to enable the channel.
    ///   3. Write the buffer address (lower, then upper 32 bits).
    ///   4. Write the byte length. This is the hardware trigger: the
    ///      transfer starts when the length register is written.
    ///   5. Poll the status register until the idle bit appears.
    ///
    /// Returns the final raw status word on success.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnalignedAddress` for a misaligned buffer address,
    /// `Error::Timeout` with the last observed status if the idle bit is
    /// not seen within `timing.timeout`, and `Error::Register` in case of
    /// an invalid register access.
    ///
    pub fn transfer(&self, transfer: Transfer, timing: PollTiming) -> Result<u32, Error> {
        #![allow(clippy::cast_possible_truncation, clippy::cast_lossless)]

        if transfer.address % (devmem::mapping::WORD_SIZE as u64) != 0 {
            return Err(Error::UnalignedAddress { address: transfer.address });
        }

        self.write(self.offsets.control, regs::control::RESET)?;
        thread::sleep(timing.reset_settle);

        self.write(self.offsets.control, regs::control::RUN)?;

        self.write(self.offsets.address_lsb, transfer.address as u32)?;
        self.write(self.offsets.address_msb, (transfer.address >> 32) as u32)?;
        self.write(self.offsets.length, transfer.len_bytes)?;

        self.wait_idle(timing)
    }

    fn wait_idle(&self, timing: PollTiming) -> Result<u32, Error> {
        let deadline = Instant::now() + timing.timeout;

        loop {
            let status = self.regs.read(self.offsets.status).map_err(Error::Register)?;
            if status & regs::status::IDLE != 0 {
                return Ok(status);
            }

            if Instant::now() >= deadline {
                return Err(Error::Timeout { last_status: status });
            }

            thread::sleep(timing.poll_interval);
        }
    }

    fn write(&self, offset: usize, value: u32) -> Result<(), Error> {
        self.regs.write(offset, value).map_err(Error::Register)
    }
}
