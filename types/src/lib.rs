//! Shared configuration types for dgbridge.
//!
//! Kept free of runtime dependencies so both the daemon and any tooling can
//! read and write the same config file.

mod config;

pub use config::{BridgeConfig, WireFormat};
