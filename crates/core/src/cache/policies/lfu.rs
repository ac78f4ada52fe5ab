//! Least Frequently Used (LFU) Replacement Policy.
//!
//! This policy evicts the valid block with the fewest recorded accesses.
//! Frequency ties are broken by recency: among blocks with equal counts, the
//! least recently used one is evicted. To keep that tie-break key current,
//! the engine stamps recency through the same per-set clock the LRU engine
//! uses. Empty (invalid) ways always win victim selection outright.
//!
//! # Saturation
//!
//! When a block's counter would exceed `u32::MAX`, every counter in the set
//! is halved (integer division) before the increment. Relative frequency
//! ordering is preserved approximately rather than letting the counter wrap
//! to zero and invert it completely.
//!
//! # Fills
//!
//! A freshly filled block starts counting from its first access: `on_fill`
//! zeroes the counter so the new block does not inherit the evicted block's
//! history.

use super::ReplacementEngine;
use super::lru::stamp_recency;
use crate::cache::CacheSet;

/// LFU engine. All frequency state lives in the set; the engine is stateless.
#[derive(Debug, Default)]
pub struct LfuEngine;

impl LfuEngine {
    /// Creates a new LFU engine instance.
    pub const fn new() -> Self {
        Self
    }
}

impl ReplacementEngine for LfuEngine {
    /// Identifies the victim way to evict.
    ///
    /// Scans ways in index order: the first invalid way wins immediately,
    /// otherwise the minimum access count wins, with equal counts resolved
    /// toward the smaller recency stamp (least recently used).
    fn find_victim(&mut self, set: &CacheSet) -> usize {
        let mut victim = 0;
        for (i, block) in set.ways.iter().enumerate() {
            if !block.valid {
                return i;
            }
            let best = &set.ways[victim];
            if block.access_count < best.access_count
                || (block.access_count == best.access_count && block.lru_stamp < best.lru_stamp)
            {
                victim = i;
            }
        }
        victim
    }

    /// Bumps the access count of the touched way, rescaling the whole set at
    /// saturation, and refreshes its recency stamp for future tie-breaks.
    fn touch(&mut self, set: &mut CacheSet, way: usize) {
        if set.ways[way].access_count == u32::MAX {
            for block in &mut set.ways {
                block.access_count /= 2;
            }
        }
        set.ways[way].access_count += 1;
        stamp_recency(set, way);
    }

    /// Resets the filled block's counter so it counts from its first access.
    fn on_fill(&mut self, set: &mut CacheSet, way: usize) {
        set.ways[way].access_count = 0;
    }
}
