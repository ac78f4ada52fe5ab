//! Configuration Validation Tests.
//!
//! Verifies the one-time geometry checks and JSON deserialization of
//! `CacheConfig`. Misconfiguration is fatal at startup; there is nothing to
//! recover at access time.

use cachesim_core::CacheConfig;
use cachesim_core::common::ConfigError;
use cachesim_core::config::{MemorySync, ReplacementPolicy};
use rstest::rstest;

use crate::common::cfg;

// ══════════════════════════════════════════════════════════
// 1. Validation
// ══════════════════════════════════════════════════════════

/// The built-in defaults describe a usable cache.
#[test]
fn default_config_validates() {
    assert_eq!(CacheConfig::default().validate(), Ok(()));
}

/// Zero associativity is legal: it means "no cache, pass through to DRAM".
#[test]
fn zero_ways_is_legal() {
    let config = cfg(4, 0, 16, ReplacementPolicy::Lru, MemorySync::WriteThrough);
    assert_eq!(config.validate(), Ok(()));
}

/// Non-power-of-two set counts and block sizes are rejected by name.
#[rstest]
#[case(3, 16, "sets")]
#[case(6, 16, "sets")]
#[case(4, 12, "block_bytes")]
#[case(4, 24, "block_bytes")]
fn non_power_of_two_geometry_rejected(
    #[case] sets: usize,
    #[case] block_bytes: usize,
    #[case] field: &'static str,
) {
    let config = cfg(
        sets,
        2,
        block_bytes,
        ReplacementPolicy::Lru,
        MemorySync::WriteThrough,
    );
    match config.validate() {
        Err(ConfigError::NotPowerOfTwo { field: f, .. }) => assert_eq!(f, field),
        other => panic!("expected NotPowerOfTwo({field}), got {other:?}"),
    }
}

/// A block must hold at least one 4-byte data unit.
#[test]
fn block_smaller_than_word_rejected() {
    let config = cfg(4, 2, 2, ReplacementPolicy::Lru, MemorySync::WriteThrough);
    assert!(matches!(
        config.validate(),
        Err(ConfigError::BlockTooSmall { value: 2, .. })
    ));
}

/// Index plus offset bits consuming the whole address leaves no tag to
/// disambiguate blocks; that geometry is rejected.
#[test]
fn zero_width_tag_rejected() {
    let mut config = cfg(
        1 << 28,
        2,
        16,
        ReplacementPolicy::Lru,
        MemorySync::WriteThrough,
    );
    config.mem_bytes = 1 << 30;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::NoTagBits { .. })
    ));
}

/// DRAM must be a non-zero whole number of blocks.
#[rstest]
#[case(0)]
#[case(100)]
fn bad_memory_size_rejected(#[case] mem_bytes: usize) {
    let mut config = cfg(4, 2, 16, ReplacementPolicy::Lru, MemorySync::WriteThrough);
    config.mem_bytes = mem_bytes;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::BadMemorySize { .. })
    ));
}

// ══════════════════════════════════════════════════════════
// 2. Deserialization
// ══════════════════════════════════════════════════════════

/// A full JSON config round-trips into the expected fields.
#[test]
fn json_config_deserializes() {
    let config: CacheConfig = serde_json::from_str(
        r#"{
            "sets": 8,
            "ways": 4,
            "block_bytes": 32,
            "policy": "LFU",
            "sync": "WRITE_BACK",
            "mem_bytes": 8192
        }"#,
    )
    .unwrap();
    assert_eq!(config.sets, 8);
    assert_eq!(config.ways, 4);
    assert_eq!(config.block_bytes, 32);
    assert_eq!(config.policy, ReplacementPolicy::Lfu);
    assert_eq!(config.sync, MemorySync::WriteBack);
    assert_eq!(config.mem_bytes, 8192);
}

/// Omitted fields fall back to the documented defaults.
#[test]
fn json_defaults_apply() {
    let config: CacheConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config.sets, 16);
    assert_eq!(config.ways, 2);
    assert_eq!(config.block_bytes, 16);
    assert_eq!(config.policy, ReplacementPolicy::Lru);
    assert_eq!(config.sync, MemorySync::WriteThrough);
    assert_eq!(config.mem_bytes, 64 * 1024);
}

/// PascalCase aliases are accepted for both enums.
#[test]
fn json_enum_aliases() {
    let config: CacheConfig =
        serde_json::from_str(r#"{ "policy": "Random", "sync": "WriteBack" }"#).unwrap();
    assert_eq!(config.policy, ReplacementPolicy::Random);
    assert_eq!(config.sync, MemorySync::WriteBack);
}
