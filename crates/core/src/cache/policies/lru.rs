//! Least Recently Used (LRU) Replacement Policy.
//!
//! This policy evicts the block that has not been accessed for the longest
//! time. Recency is tracked with a per-set monotonic clock (owned by the
//! [`CacheSet`]) and a per-block timestamp: each access stamps the block with
//! the incremented clock, and the victim is the valid block with the smallest
//! stamp. Empty (invalid) ways always win victim selection outright.
//!
//! # Overflow
//!
//! When the clock would wrap past `u32::MAX`, the minimum stamp among valid
//! blocks is subtracted (modulo the counter range) from every stamp in the
//! set and from the clock itself before the new stamp is assigned. Relative
//! recency ordering survives the rescale, so no two valid blocks ever
//! compare incorrectly after wraparound.

use super::ReplacementEngine;
use crate::cache::CacheSet;

/// LRU engine. All recency state lives in the set; the engine is stateless.
#[derive(Debug, Default)]
pub struct LruEngine;

impl LruEngine {
    /// Creates a new LRU engine instance.
    pub const fn new() -> Self {
        Self
    }
}

/// Advances the set's recency clock and stamps the accessed way.
///
/// Shared with the LFU engine, which keeps recency current as its tie-break
/// key. Handles clock wraparound by rescaling every stamp in the set.
pub(crate) fn stamp_recency(set: &mut CacheSet, way: usize) {
    if set.lru_clock == u32::MAX {
        let min = set
            .ways
            .iter()
            .filter(|b| b.valid)
            .map(|b| b.lru_stamp)
            .min()
            .unwrap_or(0);
        for block in &mut set.ways {
            block.lru_stamp = block.lru_stamp.wrapping_sub(min);
        }
        set.lru_clock = set.lru_clock.wrapping_sub(min);
    }
    // Valid blocks always carry a stamp >= 1, so the rescale above leaves
    // headroom and this add only wraps in the degenerate empty-set case.
    set.lru_clock = set.lru_clock.wrapping_add(1);
    set.ways[way].lru_stamp = set.lru_clock;
}

impl ReplacementEngine for LruEngine {
    /// Identifies the victim way to evict.
    ///
    /// Scans ways in index order: the first invalid way wins immediately,
    /// otherwise the first minimum stamp wins (ties resolve to the lowest
    /// way index).
    fn find_victim(&mut self, set: &CacheSet) -> usize {
        let mut victim = 0;
        for (i, block) in set.ways.iter().enumerate() {
            if !block.valid {
                return i;
            }
            if block.lru_stamp < set.ways[victim].lru_stamp {
                victim = i;
            }
        }
        victim
    }

    /// Updates the recency stamp of the accessed way.
    fn touch(&mut self, set: &mut CacheSet, way: usize) {
        stamp_recency(set, way);
    }
}
