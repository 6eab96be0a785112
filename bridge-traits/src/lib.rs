//! # Host Bridge Traits
//!
//! Platform abstraction traits that must be implemented by each host.
//!
//! ## Overview
//!
//! This crate defines the contract between the core crates and
//! platform-specific implementations. Each trait represents a capability the
//! core requires but that differs per host (desktop, web, test harness):
//!
//! - [`MediaChannel`](channel::MediaChannel) - the single underlying audio
//!   playback resource, with its [`ChannelEvent`](channel::ChannelEvent) feed
//! - [`KeyValueStore`](storage::KeyValueStore) - small persistent key-value
//!   state (local-storage analogue)
//!
//! ## Error Handling
//!
//! All bridge traits use the [`BridgeError`](error::BridgeError) type.
//! Implementations should convert platform-specific errors into it and keep
//! messages actionable.
//!
//! ## Thread Safety
//!
//! All bridge traits require `Send + Sync` so implementations can be shared
//! across async tasks behind `Arc`.

pub mod channel;
pub mod error;
pub mod storage;

pub use channel::{ChannelEvent, MediaChannel};
pub use error::{BridgeError, Result};
pub use storage::KeyValueStore;
