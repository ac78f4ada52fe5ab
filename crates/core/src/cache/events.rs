//! Advisory observer hooks for visualization and logging layers.
//!
//! The transaction handler reports three kinds of events: decoded address
//! fields, hit/miss locations, and victim selection. All hooks are advisory;
//! no return value feeds back into the core, and the default implementations
//! do nothing, so a collaborator only overrides what it draws.

use crate::common::AddrFields;

/// Receiver for the cache core's informational events.
///
/// Implemented by the visualization/logging collaborator and attached with
/// [`crate::Cache::set_observer`]. Every method has an empty default body.
pub trait CacheObserver: Send + Sync {
    /// An address was decomposed into tag, set index, and block offset.
    fn address_decoded(&mut self, fields: &AddrFields) {
        let _ = fields;
    }

    /// The access hit a resident block at `(set, way)`, touching `offset`.
    fn hit(&mut self, set: u32, way: usize, offset: u32) {
        let _ = (set, way, offset);
    }

    /// The access missed; the block at `(set, way)` was filled and the word
    /// at `offset` transferred.
    fn miss(&mut self, set: u32, way: usize, offset: u32) {
        let _ = (set, way, offset);
    }

    /// The block at `(set, way)` was selected for eviction by the
    /// replacement policy.
    fn evict(&mut self, set: u32, way: usize) {
        let _ = (set, way);
    }
}
