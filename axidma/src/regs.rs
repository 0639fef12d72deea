//!
//! Register layout of the AXI DMA block in direct register mode.
//!
//! Byte offsets from the channel base, fixed contract with the IP:
//!
//!   0x00  MM2S control
//!   0x04  MM2S status
//!   0x18  MM2S source address, lower 32 bits
//!   0x1C  MM2S source address, upper 32 bits
//!   0x28  MM2S transfer length (bytes)
//!   0x30  S2MM control
//!   0x34  S2MM status
//!   0x48  S2MM destination address, lower 32 bits
//!   0x4C  S2MM destination address, upper 32 bits
//!   0x58  S2MM transfer length (bytes)
//!

/// Size of the register window the IP decodes.
pub const REGISTER_WINDOW_LEN: usize = 0x1_0000;

pub struct ChannelOffsets {
    pub control: usize,
    pub status: usize,
    pub address_lsb: usize,
    pub address_msb: usize,
    pub length: usize
}

/// Outbound channel, memory-map to stream.
pub const MM2S: ChannelOffsets = ChannelOffsets {
    control: 0x00,
    status: 0x04,
    address_lsb: 0x18,
    address_msb: 0x1C,
    length: 0x28
};

/// Inbound channel, stream to memory-map.
pub const S2MM: ChannelOffsets = ChannelOffsets {
    control: 0x30,
    status: 0x34,
    address_lsb: 0x48,
    address_msb: 0x4C,
    length: 0x58
};

pub mod control {
    /// Run/stop: set to enable the channel.
    pub const RUN: u32 = 1 << 0;

    /// Soft reset of the channel. Self-clearing.
    pub const RESET: u32 = 1 << 2;
}

pub mod status {
    /// Channel is halted.
    pub const HALTED: u32 = 1 << 0;

    /// No transfer in flight. The sole completion signal this driver
    /// consumes; the remaining bits are surfaced raw to the caller.
    pub const IDLE: u32 = 1 << 1;
}
