//! Set-associative cache simulator library.
//!
//! This crate implements a single-level set-associative cache sitting between
//! a CPU and DRAM, with the following:
//! 1. **Decoding:** Bit-exact tag/index/offset decomposition of 32-bit addresses.
//! 2. **Replacement:** LRU, LFU (with LRU tie-break), and Random victim selection,
//!    with overflow-safe recency and frequency counters.
//! 3. **Synchronization:** Write-through and write-back modes with
//!    allocate-on-write semantics.
//! 4. **Memory:** An mmap-backed DRAM store behind a pluggable [`mem::MainMemory`] seam.
//! 5. **Observability:** Advisory hit/miss/eviction hooks and per-access stats.

/// Cache array, transaction handler, replacement engines, and observer hooks.
pub mod cache;
/// Common types (address decomposition, access direction, config errors).
pub mod common;
/// Simulator configuration (defaults, enums, validation).
pub mod config;
/// DRAM backing store and the main-memory trait consumed by the cache.
pub mod mem;
/// Per-cache statistics collection and reporting.
pub mod stats;

/// The cache array plus transaction handler; construct with [`Cache::new`].
pub use crate::cache::Cache;
/// Root configuration type; use `CacheConfig::default()` or deserialize from JSON.
pub use crate::config::CacheConfig;
/// The provided DRAM implementation (mmap-backed, lazily allocated).
pub use crate::mem::Dram;
