//! # bitburner-sync
//!
//! Core library for synchronizing a local script directory with a running
//! Bitburner game client over its local HTTP file API.
//!
//! Scripts can be pushed once, pulled once, previewed with a dry run, or
//! pushed continuously as they change on disk.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Error types and the crate `Result` alias
pub mod error;

/// Canonical remote filenames
pub mod filename;

/// Local script collection
pub mod scanner;

/// Configuration file parsing, layering and validation
pub mod config;

/// HTTP client for the game's file API
pub mod remote;

/// One-shot push and pull synchronization
pub mod sync;

/// Continuous synchronization driven by filesystem events
pub mod watch;

pub use config::{RunMode, SyncConfig};
pub use remote::BitburnerClient;
pub use sync::SyncResult;
