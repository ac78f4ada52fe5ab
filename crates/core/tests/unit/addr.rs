//! Address Decoder Tests.
//!
//! Verifies bit-exact tag/index/offset decomposition, field widths, and
//! address reconstruction for write-back targets.

use cachesim_core::common::{AddrFields, AddressDecoder};
use proptest::prelude::*;
use rstest::rstest;

// ══════════════════════════════════════════════════════════
// 1. Field Extraction
// ══════════════════════════════════════════════════════════

/// S=4, B=16: offset = low 4 bits, index = next 2 bits, tag = the rest.
#[test]
fn decode_splits_fields() {
    let dec = AddressDecoder::new(4, 16);
    assert_eq!(
        dec.decode(0x1234),
        AddrFields {
            tag: 0x48,
            index: 0x3,
            offset: 0x4,
        }
    );
}

/// Address zero decodes to all-zero fields.
#[test]
fn decode_zero_address() {
    let dec = AddressDecoder::new(8, 32);
    assert_eq!(
        dec.decode(0),
        AddrFields {
            tag: 0,
            index: 0,
            offset: 0,
        }
    );
}

/// A direct-mapped single-set cache has a zero-width index field: the whole
/// upper address becomes the tag.
#[test]
fn decode_single_set_has_no_index_bits() {
    let dec = AddressDecoder::new(1, 16);
    assert_eq!(dec.index_bits(), 0);
    let fields = dec.decode(0xDEAD_BEE4);
    assert_eq!(fields.index, 0);
    assert_eq!(fields.tag, 0xDEAD_BEE4 >> 4);
}

/// Field widths always account for all 32 address bits.
#[rstest]
#[case(1, 4)]
#[case(4, 16)]
#[case(16, 64)]
#[case(256, 32)]
fn field_widths_sum_to_32(#[case] sets: u32, #[case] block: u32) {
    let dec = AddressDecoder::new(sets, block);
    assert_eq!(dec.offset_bits() + dec.index_bits() + dec.tag_bits(), 32);
    assert_eq!(dec.offset_bits(), block.trailing_zeros());
    assert_eq!(dec.index_bits(), sets.trailing_zeros());
}

// ══════════════════════════════════════════════════════════
// 2. Reconstruction
// ══════════════════════════════════════════════════════════

/// Reconstructing from decoded fields recovers the block-aligned address.
#[test]
fn reconstruct_inverts_decode() {
    let dec = AddressDecoder::new(4, 16);
    let fields = dec.decode(0x1234);
    assert_eq!(dec.reconstruct(fields.tag, fields.index), 0x1230);
    assert_eq!(dec.block_base(0x1234), 0x1230);
}

proptest! {
    /// Decode → reconstruct round-trips for any address and geometry:
    /// the rebuilt block base plus the decoded offset is the original
    /// address.
    #[test]
    fn decode_reconstruct_roundtrip(
        addr in any::<u32>(),
        set_bits in 0u32..8,
        offset_bits in 2u32..8,
    ) {
        let dec = AddressDecoder::new(1 << set_bits, 1 << offset_bits);
        let fields = dec.decode(addr);
        let rebuilt = dec.reconstruct(fields.tag, fields.index);
        prop_assert_eq!(rebuilt | fields.offset, addr);
        prop_assert_eq!(rebuilt, dec.block_base(addr));
        prop_assert!(fields.offset < (1 << offset_bits));
        prop_assert!(fields.index < (1 << set_bits));
    }
}
