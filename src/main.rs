#![warn(clippy::pedantic)]
#![allow(clippy::unreadable_literal)]

use anyhow::Context;

use axidma::{AxiDmaChannel, PollTiming, Transfer};
use devmem::{DevMem, PhysMapping};

const DMA_BASE: u64 = 0xA0000000;
const BUF_PHYS: u64 = 0x77F12000;
const BUF_SIZE: usize = 128; // 32 words

fn dump_buffer(buffer: &PhysMapping) -> anyhow::Result<()> {
    println!("Buffer contents:");
    for word in 0..buffer.len() / 4 {
        let value = buffer.read_u32(word * 4)?;
        println!("  [{word}] = 0x{value:08x}");
    }

    Ok(())
}

#[allow(clippy::cast_possible_truncation)]
fn main() -> anyhow::Result<()> {
    let device = DevMem::open().context("Opening the physical memory device")?;

    let regs = axidma::map_register_window(&device, DMA_BASE)
        .context("Mapping the DMA register window")?;
    let buffer = device
        .map(BUF_PHYS, BUF_SIZE)
        .context("Mapping the destination buffer")?;

    let dma = AxiDmaChannel::s2mm(&regs);

    dump_buffer(&buffer)?;
    println!("control register = 0x{:08x}", dma.control()?);
    println!("status register  = 0x{:08x}", dma.status()?);

    let status = dma
        .transfer(
            Transfer { address: BUF_PHYS, len_bytes: BUF_SIZE as u32 },
            PollTiming::DEFAULT
        )
        .context("Running the S2MM transfer")?;

    dump_buffer(&buffer)?;
    println!("status register  = 0x{status:08x}");

    Ok(())
}
