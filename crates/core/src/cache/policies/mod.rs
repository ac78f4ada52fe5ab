//! Cache Replacement Policies.
//!
//! Implements the victim-selection algorithms for set-associative caches.
//!
//! # Policies
//!
//! - `Lru`: Least Recently Used.
//! - `Lfu`: Least Frequently Used (ties broken by LRU recency).
//! - `Random`: Uniform random selection.
//!
//! The policy metadata (per-block recency stamps and access counters, plus
//! the per-set recency clock) lives in the cache's [`CacheSet`]s; the engines
//! own only whatever extra state the algorithm itself needs. A single boxed
//! engine is selected at construction time so the transaction handler never
//! branches on the policy enum.

/// Least Frequently Used replacement engine.
pub mod lfu;

/// Least Recently Used replacement engine.
pub mod lru;

/// Random replacement engine.
pub mod random;

pub use lfu::LfuEngine;
pub use lru::LruEngine;
pub use random::RandomEngine;

use crate::cache::CacheSet;
use crate::config::ReplacementPolicy;

/// Trait for cache replacement engines.
///
/// Defines the interface for selecting victims and maintaining policy
/// metadata. The handler calls `find_victim` once per miss, `on_fill` once
/// per fill, and `touch` exactly once per access (hit or miss).
pub trait ReplacementEngine: Send + Sync {
    /// Selects the way to evict from `set`.
    ///
    /// LRU and LFU return the first invalid way if one exists (empty ways
    /// are always preferred replacement targets); Random does not.
    fn find_victim(&mut self, set: &CacheSet) -> usize;

    /// Updates policy metadata after `way` in `set` was accessed.
    fn touch(&mut self, set: &mut CacheSet, way: usize);

    /// Resets policy metadata for a freshly filled block, before the
    /// access's `touch`. Default: no-op.
    fn on_fill(&mut self, set: &mut CacheSet, way: usize) {
        let _ = (set, way);
    }
}

/// Builds the engine for the configured policy.
pub fn build_engine(policy: ReplacementPolicy) -> Box<dyn ReplacementEngine> {
    match policy {
        ReplacementPolicy::Lru => Box::new(LruEngine::new()),
        ReplacementPolicy::Lfu => Box::new(LfuEngine::new()),
        ReplacementPolicy::Random => Box::new(RandomEngine::new()),
    }
}
