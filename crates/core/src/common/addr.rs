//! Address decomposition for set-associative lookup.
//!
//! This module splits 32-bit byte addresses into the three fields a
//! set-associative cache keys on. It provides the following:
//! 1. **Decoding:** `offset` = low `log2(B)` bits, `index` = next `log2(S)`
//!    bits, `tag` = remaining high bits.
//! 2. **Reconstruction:** Rebuilding the block-aligned address of a resident
//!    block from its stored tag and set index (write-back targets).
//! 3. **Diagnostics:** Field bit widths for the visualization collaborator.
//!
//! Power-of-two checks happen once in [`crate::config::CacheConfig::validate`],
//! not per access; a constructed decoder never fails.

/// The three decoded fields of an address.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AddrFields {
    /// High-order bits identifying which memory block occupies a way.
    pub tag: u32,
    /// Set selector within the cache array.
    pub index: u32,
    /// Byte offset within the block.
    pub offset: u32,
}

/// Precomputed shift/mask state for decomposing addresses.
///
/// Built once from a validated configuration (`sets` and `block_bytes` are
/// powers of two and leave at least one tag bit).
#[derive(Clone, Copy, Debug)]
pub struct AddressDecoder {
    offset_bits: u32,
    index_bits: u32,
    offset_mask: u32,
    index_mask: u32,
}

impl AddressDecoder {
    /// Creates a decoder for a cache with `sets` sets of `block_bytes`-byte
    /// blocks. Both must be validated powers of two.
    pub const fn new(sets: u32, block_bytes: u32) -> Self {
        let offset_bits = block_bytes.trailing_zeros();
        let index_bits = sets.trailing_zeros();
        Self {
            offset_bits,
            index_bits,
            offset_mask: block_bytes - 1,
            index_mask: sets - 1,
        }
    }

    /// Splits an address into its tag, set index, and block offset.
    #[inline(always)]
    pub const fn decode(&self, addr: u32) -> AddrFields {
        AddrFields {
            tag: addr >> (self.offset_bits + self.index_bits),
            index: (addr >> self.offset_bits) & self.index_mask,
            offset: addr & self.offset_mask,
        }
    }

    /// Rebuilds the block-aligned address of a resident block (zero offset).
    ///
    /// Used to compute write-back and write-through targets from a block's
    /// stored tag and the set it lives in.
    #[inline(always)]
    pub const fn reconstruct(&self, tag: u32, index: u32) -> u32 {
        (tag << (self.offset_bits + self.index_bits)) | (index << self.offset_bits)
    }

    /// Returns `addr` with its offset bits cleared: the base address of the
    /// block-sized DRAM transfer that fills the containing block.
    #[inline(always)]
    pub const fn block_base(&self, addr: u32) -> u32 {
        addr & !self.offset_mask
    }

    /// Width of the offset field in bits.
    pub const fn offset_bits(&self) -> u32 {
        self.offset_bits
    }

    /// Width of the set-index field in bits.
    pub const fn index_bits(&self) -> u32 {
        self.index_bits
    }

    /// Width of the tag field in bits.
    pub const fn tag_bits(&self) -> u32 {
        32 - self.offset_bits - self.index_bits
    }
}
