//! Common types shared across the simulator.
//!
//! This module collects the small building blocks the cache core and its
//! collaborators agree on:
//! 1. **Addresses:** Tag/index/offset decomposition of 32-bit addresses.
//! 2. **Access types:** Read/write direction and the data-unit width.
//! 3. **Errors:** Fatal configuration errors detected at startup.

/// Address decomposition (decoder, decoded fields, reconstruction).
pub mod addr;
/// Access direction and data-unit definitions.
pub mod data;
/// Configuration error definitions.
pub mod error;

pub use addr::{AddrFields, AddressDecoder};
pub use data::{Access, WORD_BYTES, Word};
pub use error::ConfigError;
