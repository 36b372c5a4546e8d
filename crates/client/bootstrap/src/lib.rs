//! Shared bootstrap utilities for client front-ends.
//!
//! Provides configuration loading, persisted user settings, oracle assembly,
//! and session setup that can be reused by any front-end crate.
pub mod builder;
pub mod config;
pub mod oracles;
pub mod settings;

pub use builder::{RuntimeBuilder, RuntimeSetup};
pub use config::ClientConfig;
pub use oracles::{ContentOracleFactory, OracleFactory, SnapshotOracleFactory};
pub use settings::{JobChoice, Settings};
