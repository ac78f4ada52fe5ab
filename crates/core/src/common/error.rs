//! Configuration error definitions.
//!
//! This module defines the fatal errors detected when a cache is constructed.
//! There are no recoverable per-access errors: every transaction-handler path
//! completes, and counter overflow is handled in-band by the replacement
//! engines. A simulation must not proceed with a silently misconfigured
//! geometry, so these are surfaced once, at startup.

use thiserror::Error;

/// Fatal cache-geometry errors, detected once at initialization.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The set count or block size is not a power of two, so the address
    /// fields cannot be extracted by masking.
    #[error("{field} must be a power of two, got {value}")]
    NotPowerOfTwo {
        /// Name of the offending configuration field.
        field: &'static str,
        /// The rejected value.
        value: usize,
    },

    /// The block cannot hold even one data unit.
    #[error("block size must be at least one {word}-byte word, got {value}")]
    BlockTooSmall {
        /// Size of one data unit in bytes.
        word: usize,
        /// The rejected block size.
        value: usize,
    },

    /// The index and offset fields consume all 32 address bits, leaving a
    /// zero-width tag; no block could ever be disambiguated.
    #[error("{sets} sets of {block_bytes}-byte blocks leave no tag bits in a 32-bit address")]
    NoTagBits {
        /// Configured set count.
        sets: usize,
        /// Configured block size in bytes.
        block_bytes: usize,
    },

    /// The DRAM size cannot hold whole blocks.
    #[error("memory size {mem_bytes} is not a non-zero multiple of the {block_bytes}-byte block size")]
    BadMemorySize {
        /// Configured DRAM size in bytes.
        mem_bytes: usize,
        /// Configured block size in bytes.
        block_bytes: usize,
    },
}
