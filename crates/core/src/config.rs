//! Configuration system for the cache simulator.
//!
//! This module defines the structures and enums that parameterize a cache
//! instance. It provides:
//! 1. **Defaults:** Baseline geometry constants (sets, ways, block size, DRAM size).
//! 2. **Structures:** The [`CacheConfig`] supplied by the harness or deserialized from JSON.
//! 3. **Enums:** Replacement policy and memory-synchronization mode.
//! 4. **Validation:** One-time geometry checks; a validated config is constant
//!    for the simulation's lifetime.

use serde::Deserialize;

use crate::common::{ConfigError, WORD_BYTES};

/// Default configuration constants for the simulator.
///
/// These values define the baseline cache geometry when not explicitly
/// overridden in a JSON configuration file.
mod defaults {
    /// Default number of sets (16).
    pub const SETS: usize = 16;

    /// Default associativity (2 ways per set).
    pub const WAYS: usize = 2;

    /// Default block size in bytes (16 bytes = 4 words).
    pub const BLOCK_BYTES: usize = 16;

    /// Default DRAM size in bytes (64 KiB).
    ///
    /// Small by hardware standards, but the simulator addresses DRAM
    /// directly from address 0 and traces rarely need more.
    pub const MEM_BYTES: usize = 64 * 1024;
}

/// Cache replacement policy algorithms.
///
/// Specifies the algorithm used to select which block to evict when a new
/// block must be installed in a full set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReplacementPolicy {
    /// Least Recently Used replacement policy.
    ///
    /// Evicts the block whose last access is furthest in the past.
    #[default]
    #[serde(alias = "Lru")]
    Lru,
    /// Least Frequently Used replacement policy.
    ///
    /// Evicts the block with the fewest accesses, breaking ties by
    /// least-recent use.
    #[serde(alias = "Lfu")]
    Lfu,
    /// Random replacement policy.
    ///
    /// Evicts a uniformly selected way, ignoring recency and frequency.
    #[serde(alias = "Random")]
    Random,
}

/// Memory-synchronization mode between the cache and DRAM.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MemorySync {
    /// Every write is immediately propagated to DRAM; blocks are never dirty.
    #[default]
    #[serde(alias = "WriteThrough")]
    WriteThrough,
    /// Writes mark the block dirty; DRAM is updated only when the block is
    /// evicted.
    #[serde(alias = "WriteBack")]
    WriteBack,
}

/// Cache geometry and behavior configuration.
///
/// Immutable after validation; every field is fixed for the run.
#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    /// Number of sets (must be a power of two).
    #[serde(default = "CacheConfig::default_sets")]
    pub sets: usize,

    /// Associativity: ways per set. Zero means "no cache"; every access
    /// passes straight through to DRAM.
    #[serde(default = "CacheConfig::default_ways")]
    pub ways: usize,

    /// Block size in bytes (must be a power of two, at least one word).
    #[serde(default = "CacheConfig::default_block_bytes")]
    pub block_bytes: usize,

    /// Replacement policy
    #[serde(default)]
    pub policy: ReplacementPolicy,

    /// Memory-synchronization mode
    #[serde(default)]
    pub sync: MemorySync,

    /// Size of the DRAM backing store in bytes.
    #[serde(default = "CacheConfig::default_mem_bytes")]
    pub mem_bytes: usize,
}

impl CacheConfig {
    /// Returns the default set count.
    fn default_sets() -> usize {
        defaults::SETS
    }

    /// Returns the default associativity.
    fn default_ways() -> usize {
        defaults::WAYS
    }

    /// Returns the default block size in bytes.
    fn default_block_bytes() -> usize {
        defaults::BLOCK_BYTES
    }

    /// Returns the default DRAM size in bytes.
    fn default_mem_bytes() -> usize {
        defaults::MEM_BYTES
    }

    /// Checks the geometry once, at startup.
    ///
    /// A non-power-of-two set count or block size, a block smaller than one
    /// word, a zero-width tag field, or a DRAM size that cannot hold whole
    /// blocks are all fatal: the simulation must not proceed with a silent
    /// misconfiguration.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found, in field-declaration order.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.sets.is_power_of_two() {
            return Err(ConfigError::NotPowerOfTwo {
                field: "sets",
                value: self.sets,
            });
        }
        if !self.block_bytes.is_power_of_two() {
            return Err(ConfigError::NotPowerOfTwo {
                field: "block_bytes",
                value: self.block_bytes,
            });
        }
        if self.block_bytes < WORD_BYTES {
            return Err(ConfigError::BlockTooSmall {
                word: WORD_BYTES,
                value: self.block_bytes,
            });
        }
        let field_bits = self.sets.trailing_zeros() + self.block_bytes.trailing_zeros();
        if field_bits >= 32 {
            return Err(ConfigError::NoTagBits {
                sets: self.sets,
                block_bytes: self.block_bytes,
            });
        }
        if self.mem_bytes == 0 || self.mem_bytes % self.block_bytes != 0 {
            return Err(ConfigError::BadMemorySize {
                mem_bytes: self.mem_bytes,
                block_bytes: self.block_bytes,
            });
        }
        Ok(())
    }
}

impl Default for CacheConfig {
    /// Creates the baseline configuration: 16 sets, 2 ways, 16-byte blocks,
    /// LRU replacement, write-through synchronization, 64 KiB of DRAM.
    fn default() -> Self {
        Self {
            sets: defaults::SETS,
            ways: defaults::WAYS,
            block_bytes: defaults::BLOCK_BYTES,
            policy: ReplacementPolicy::default(),
            sync: MemorySync::default(),
            mem_bytes: defaults::MEM_BYTES,
        }
    }
}
