//! # Unit Components
//!
//! This module serves as the central hub for the simulator's unit tests,
//! organized per component of the crate.

/// Unit tests for address decomposition and reconstruction.
pub mod addr;

/// Unit tests for configuration validation and deserialization.
pub mod config;
