//! Set-Associative Cache Core.
//!
//! This module implements the cache array and the single memory-access
//! transaction handler. It models exact cache-controller behavior:
//! 1. **Lookup:** Tag match among the valid ways of the decoded set.
//! 2. **Miss handling:** Victim selection, write-back of dirty victims, and
//!    full-block fills from DRAM (allocate-on-write falls out of the shared
//!    miss path).
//! 3. **Synchronization:** Write-through propagation or dirty marking.
//! 4. **Bookkeeping:** Exactly one policy `touch` per access, hit or miss.
//!
//! Accesses are single-threaded and run to completion; callers embedding a
//! cache in a multi-threaded harness must serialize accesses externally.

/// Advisory observer hooks (hit, miss, eviction, decoded fields).
pub mod events;
/// Replacement engine implementations (LRU, LFU, Random).
pub mod policies;

use tracing::{debug, trace};

use self::events::CacheObserver;
use self::policies::{ReplacementEngine, build_engine};
use crate::common::{Access, AddrFields, AddressDecoder, ConfigError, WORD_BYTES, Word};
use crate::config::{CacheConfig, MemorySync};
use crate::mem::MainMemory;
use crate::stats::CacheStats;

/// One cache way: a tagged block of data with validity, dirtiness, and
/// per-policy metadata.
///
/// Both metadata counters are always present; the configured policy decides
/// which is semantically active (LFU reads `lru_stamp` too, as its tie-break
/// key). Fields are public so a visualization layer can render the array
/// directly.
#[derive(Clone, Debug)]
pub struct CacheBlock {
    /// High-order address bits identifying the resident memory block.
    pub tag: u32,
    /// Whether this way holds a block at all.
    pub valid: bool,
    /// Whether the block has unpropagated writes (write-back mode only).
    pub dirty: bool,
    /// Block payload, exactly one block size long.
    pub data: Vec<u8>,
    /// Recency stamp assigned from the set's clock on each access.
    pub lru_stamp: u32,
    /// Access counter for frequency-based replacement.
    pub access_count: u32,
}

impl CacheBlock {
    fn new(block_bytes: usize) -> Self {
        Self {
            tag: 0,
            valid: false,
            dirty: false,
            data: vec![0; block_bytes],
            lru_stamp: 0,
            access_count: 0,
        }
    }
}

/// One cache set: a fixed group of interchangeable ways plus the monotonic
/// clock that timestamps recency within the set.
#[derive(Clone, Debug)]
pub struct CacheSet {
    /// The ways of this set, exactly `associativity` long.
    pub ways: Vec<CacheBlock>,
    /// Per-set recency clock; incremented by the engines on every touch.
    pub lru_clock: u32,
}

impl CacheSet {
    fn new(ways: usize, block_bytes: usize) -> Self {
        Self {
            ways: (0..ways).map(|_| CacheBlock::new(block_bytes)).collect(),
            lru_clock: 0,
        }
    }
}

/// The cache array plus its transaction handler.
///
/// Built once from a validated [`CacheConfig`]; geometry, policy, and
/// synchronization mode are constant for the simulation's lifetime, and the
/// array is never resized.
pub struct Cache {
    sets: Vec<CacheSet>,
    decoder: AddressDecoder,
    engine: Box<dyn ReplacementEngine>,
    observer: Option<Box<dyn CacheObserver>>,
    sync: MemorySync,
    ways: usize,
    /// Behavioral counters, updated on every access.
    pub stats: CacheStats,
}

impl std::fmt::Debug for Cache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cache")
            .field("sets", &self.sets.len())
            .field("ways", &self.ways)
            .field("sync", &self.sync)
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}

impl Cache {
    /// Creates a cache from a configuration, validating the geometry once.
    ///
    /// An associativity of zero is legal and produces a pass-through cache:
    /// every access goes straight to DRAM with no cache semantics.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the geometry is unusable; the simulation
    /// must not proceed with a silent misconfiguration.
    pub fn new(config: &CacheConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        // Zero associativity means no cache: no array is allocated and
        // every access bypasses to DRAM.
        let sets = if config.ways == 0 {
            Vec::new()
        } else {
            (0..config.sets)
                .map(|_| CacheSet::new(config.ways, config.block_bytes))
                .collect()
        };
        Ok(Self {
            sets,
            decoder: AddressDecoder::new(config.sets as u32, config.block_bytes as u32),
            engine: build_engine(config.policy),
            observer: None,
            sync: config.sync,
            ways: config.ways,
            stats: CacheStats::default(),
        })
    }

    /// Attaches the visualization/logging collaborator.
    pub fn set_observer(&mut self, observer: Box<dyn CacheObserver>) {
        self.observer = Some(observer);
    }

    /// Read-only view of the cache array, for rendering and inspection.
    pub fn sets(&self) -> &[CacheSet] {
        &self.sets
    }

    /// The address decoder this cache keys on.
    pub const fn decoder(&self) -> &AddressDecoder {
        &self.decoder
    }

    /// Configured associativity (ways per set); zero means pass-through.
    pub const fn ways(&self) -> usize {
        self.ways
    }

    /// Configured memory-synchronization mode.
    pub const fn sync(&self) -> MemorySync {
        self.sync
    }

    /// Handles one memory-access transaction.
    ///
    /// For [`Access::Read`], `data` is populated from the resident block;
    /// for [`Access::Write`], `data` is consumed into it. Word transfers are
    /// aligned to the data-unit boundary within the block.
    ///
    /// The ordering here is load-bearing: a dirty victim is written back
    /// before its way is refilled, and the fill completes before the word
    /// transfer touches the payload.
    pub fn access<M: MainMemory>(&mut self, mem: &mut M, addr: u32, data: &mut Word, dir: Access) {
        self.stats.accesses += 1;

        // No cache at all: a single word transfer straight against DRAM.
        if self.ways == 0 {
            self.bypass(mem, addr, data, dir);
            return;
        }

        let fields = self.decoder.decode(addr);
        trace!(
            tag = fields.tag,
            index = fields.index,
            offset = fields.offset,
            "decoded"
        );
        if let Some(obs) = self.observer.as_mut() {
            obs.address_decoded(&fields);
        }

        let set_idx = fields.index as usize;
        let resident = self.sets[set_idx]
            .ways
            .iter()
            .position(|b| b.valid && b.tag == fields.tag);

        let way = if let Some(way) = resident {
            self.stats.hits += 1;
            debug!(set = fields.index, way, "hit");
            if let Some(obs) = self.observer.as_mut() {
                obs.hit(fields.index, way, fields.offset);
            }
            way
        } else {
            self.stats.misses += 1;
            let victim = self.engine.find_victim(&self.sets[set_idx]);
            debug!(set = fields.index, way = victim, "miss, victim selected");
            if let Some(obs) = self.observer.as_mut() {
                obs.evict(fields.index, victim);
            }
            self.fill(mem, &fields, addr, victim);
            if let Some(obs) = self.observer.as_mut() {
                obs.miss(fields.index, victim, fields.offset);
            }
            victim
        };

        let off = fields.offset as usize & !(WORD_BYTES - 1);
        let block = &mut self.sets[set_idx].ways[way];
        match dir {
            Access::Read => {
                let mut bytes = [0u8; WORD_BYTES];
                bytes.copy_from_slice(&block.data[off..off + WORD_BYTES]);
                *data = Word::from_le_bytes(bytes);
            }
            Access::Write => {
                block.data[off..off + WORD_BYTES].copy_from_slice(&data.to_le_bytes());
                match self.sync {
                    MemorySync::WriteThrough => {
                        // Immediate propagation of the whole updated block.
                        let target = self.decoder.reconstruct(fields.tag, fields.index);
                        mem.write(target, &block.data);
                        self.stats.dram_writes += 1;
                    }
                    MemorySync::WriteBack => block.dirty = true,
                }
            }
        }

        // Policy bookkeeping: exactly once per access, hit or miss.
        self.engine.touch(&mut self.sets[set_idx], way);
    }

    /// Reads one word through the cache.
    pub fn read_word<M: MainMemory>(&mut self, mem: &mut M, addr: u32) -> Word {
        let mut word = 0;
        self.access(mem, addr, &mut word, Access::Read);
        word
    }

    /// Writes one word through the cache.
    pub fn write_word<M: MainMemory>(&mut self, mem: &mut M, addr: u32, val: Word) {
        let mut word = val;
        self.access(mem, addr, &mut word, Access::Write);
    }

    /// Direct DRAM word access for the associativity-zero configuration.
    fn bypass<M: MainMemory>(&mut self, mem: &mut M, addr: u32, data: &mut Word, dir: Access) {
        self.stats.bypasses += 1;
        match dir {
            Access::Read => {
                let mut bytes = [0u8; WORD_BYTES];
                mem.read(addr, &mut bytes);
                *data = Word::from_le_bytes(bytes);
                self.stats.dram_reads += 1;
            }
            Access::Write => {
                mem.write(addr, &data.to_le_bytes());
                self.stats.dram_writes += 1;
            }
        }
    }

    /// Replaces the victim way with the block containing `addr`.
    ///
    /// A valid dirty victim is flushed to its reconstructed address before
    /// the way is reused; skipping that order would silently lose writes.
    fn fill<M: MainMemory>(&mut self, mem: &mut M, fields: &AddrFields, addr: u32, victim: usize) {
        let set_idx = fields.index as usize;

        let victim_block = &self.sets[set_idx].ways[victim];
        if victim_block.valid {
            self.stats.evictions += 1;
            if self.sync == MemorySync::WriteBack && victim_block.dirty {
                let wb_addr = self.decoder.reconstruct(victim_block.tag, fields.index);
                debug!(set = fields.index, way = victim, addr = wb_addr, "write-back");
                mem.write(wb_addr, &victim_block.data);
                self.stats.write_backs += 1;
                self.stats.dram_writes += 1;
            }
        }

        let base = self.decoder.block_base(addr);
        let block = &mut self.sets[set_idx].ways[victim];
        mem.read(base, &mut block.data);
        self.stats.dram_reads += 1;
        block.tag = fields.tag;
        block.valid = true;
        block.dirty = false;

        self.engine.on_fill(&mut self.sets[set_idx], victim);
    }
}
