//! `assetsniff-core` — shared configuration types for the sniffer daemon.
//!
//! Holds the [`config::RunConfig`] value handed to every scheduled sync run
//! and the validation errors it can produce. The scanning and asset-API
//! crates consume these types; nothing here performs I/O beyond reading the
//! optional config file.

pub mod config;
pub mod error;

pub use config::{RunConfig, REDACTED_TOKEN};
pub use error::{ConfigError, Result};
