//! Simulation statistics collection and reporting.
//!
//! This module tracks behavioral counters for a cache instance. It provides:
//! 1. **Access accounting:** Total accesses, hits, misses, and bypasses.
//! 2. **Replacement:** Evictions of resident blocks and dirty write-backs.
//! 3. **DRAM traffic:** Block and word transfers in each direction.
//! 4. **Derived metrics:** Hit rate and a printable summary.

/// Behavioral counters for one cache instance.
///
/// Updated by the transaction handler on every access; purely informational.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Total accesses handled, including bypasses.
    pub accesses: u64,
    /// Accesses that found their block resident.
    pub hits: u64,
    /// Accesses that required a block fill.
    pub misses: u64,
    /// Accesses passed straight to DRAM (associativity zero).
    pub bypasses: u64,
    /// Valid blocks replaced by a fill.
    pub evictions: u64,
    /// Dirty blocks flushed to DRAM before reuse.
    pub write_backs: u64,
    /// DRAM read transfers issued (any size).
    pub dram_reads: u64,
    /// DRAM write transfers issued (any size).
    pub dram_writes: u64,
}

impl CacheStats {
    /// Fraction of cached accesses that hit, in `[0, 1]`; zero when no
    /// cached access has happened yet.
    pub fn hit_rate(&self) -> f64 {
        let cached = self.hits + self.misses;
        if cached == 0 {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        {
            self.hits as f64 / cached as f64
        }
    }

    /// Renders a human-readable multi-line summary for CLI output.
    pub fn summary(&self) -> String {
        format!(
            "accesses:    {}\n\
             hits:        {}\n\
             misses:      {}\n\
             hit rate:    {:.2}%\n\
             bypasses:    {}\n\
             evictions:   {}\n\
             write-backs: {}\n\
             dram reads:  {}\n\
             dram writes: {}",
            self.accesses,
            self.hits,
            self.misses,
            self.hit_rate() * 100.0,
            self.bypasses,
            self.evictions,
            self.write_backs,
            self.dram_reads,
            self.dram_writes,
        )
    }
}
