//! DRAM backing store and the main-memory seam.
//!
//! This module defines the memory collaborator the cache core talks to. It
//! provides the following:
//! 1. **Seam:** The [`MainMemory`] trait consumed by the transaction handler;
//!    transfers are either one word or one full block.
//! 2. **Implementation:** [`Dram`], a flat byte-addressable store over an
//!    mmap-backed buffer with lazy allocation.
//!
//! Out-of-range addresses are this collaborator's responsibility: [`Dram`]
//! bounds-asserts every transfer, and the cache core never checks.

/// Raw mmap-backed buffer implementation.
pub mod buffer;

pub use buffer::DramBuffer;

use crate::common::{WORD_BYTES, Word};

/// Byte-addressable read/write primitive consumed by the cache core.
///
/// The handler issues exactly two transfer sizes: one data unit
/// ([`WORD_BYTES`]) and one full block. Block-sized transfers always use
/// block-aligned addresses.
pub trait MainMemory {
    /// Fills `buf` from memory starting at `addr`.
    fn read(&mut self, addr: u32, buf: &mut [u8]);

    /// Writes `buf` into memory starting at `addr`.
    fn write(&mut self, addr: u32, buf: &[u8]);
}

/// Flat DRAM model addressed from zero.
///
/// Pages are only allocated by the OS when touched (on Unix), so a large
/// configured memory costs nothing until a trace actually reaches it.
pub struct Dram {
    buffer: DramBuffer,
}

impl std::fmt::Debug for Dram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dram").field("size", &self.len()).finish()
    }
}

impl Dram {
    /// Allocates `size` bytes of zeroed DRAM.
    pub fn new(size: usize) -> Self {
        Self {
            buffer: DramBuffer::new(size),
        }
    }

    /// Returns the size of the memory in bytes.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns `true` if the memory has zero size.
    pub fn is_empty(&self) -> bool {
        self.buffer.len() == 0
    }

    /// Reads one little-endian word at `addr`.
    pub fn read_word(&self, addr: u32) -> Word {
        let mut bytes = [0u8; WORD_BYTES];
        bytes.copy_from_slice(self.buffer.read_slice(addr as usize, WORD_BYTES));
        Word::from_le_bytes(bytes)
    }

    /// Writes one little-endian word at `addr`.
    pub fn write_word(&mut self, addr: u32, val: Word) {
        self.buffer.write_slice(addr as usize, &val.to_le_bytes());
    }

    /// Copies `data` into memory at `addr`. Used by harnesses to seed
    /// memory contents before a run.
    pub fn load(&mut self, addr: u32, data: &[u8]) {
        self.buffer.write_slice(addr as usize, data);
    }
}

impl MainMemory for Dram {
    fn read(&mut self, addr: u32, buf: &mut [u8]) {
        buf.copy_from_slice(self.buffer.read_slice(addr as usize, buf.len()));
    }

    fn write(&mut self, addr: u32, buf: &[u8]) {
        self.buffer.write_slice(addr as usize, buf);
    }
}
