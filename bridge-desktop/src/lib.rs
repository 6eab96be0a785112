//! # Desktop Bridge Implementations
//!
//! Concrete implementations of the `bridge-traits` capabilities for desktop
//! hosts and test harnesses:
//!
//! - [`SimulatedChannel`](channel::SimulatedChannel) - clock-driven
//!   [`MediaChannel`](bridge_traits::MediaChannel) that needs no audio
//!   hardware
//! - [`MemoryStore`](store::MemoryStore) - in-memory
//!   [`KeyValueStore`](bridge_traits::KeyValueStore)
//! - [`JsonFileStore`](store::JsonFileStore) - JSON-file-backed persistent
//!   store

pub mod channel;
pub mod store;

pub use channel::SimulatedChannel;
pub use store::{JsonFileStore, MemoryStore};
