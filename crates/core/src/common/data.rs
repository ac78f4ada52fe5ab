//! Access direction and data-unit definitions.
//!
//! The CPU side of the simulator transfers exactly one data unit (a 32-bit
//! word) per access. These types classify each transaction for the following:
//! 1. **Transfer Direction:** Whether the caller's buffer is populated or consumed.
//! 2. **Statistics Tracking:** Categorizing accesses for hit/miss accounting.

/// One CPU data unit: a 32-bit little-endian word.
pub type Word = u32;

/// Size of one data unit in bytes.
pub const WORD_BYTES: usize = 4;

/// Direction of a memory access as seen from the CPU.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// Data read: the resident block populates the caller's word.
    Read,
    /// Data write: the caller's word updates the resident block.
    Write,
}
