//! # Playback Module
//!
//! The single-session audio playback controller.
//!
//! ## Overview
//!
//! This crate owns the process's one [`MediaChannel`](bridge_traits::MediaChannel)
//! and exposes a small, race-safe operation set over it:
//! - `play` / `pause` / `toggle` / `seek` for UI surfaces
//! - a [`SessionState`] snapshot, observable by polling or via a watch
//!   subscription
//!
//! The session shields callers from the channel's native event timing: a
//! start attempt resolving after the channel has been rebound to a newer
//! source is detected against the channel's live bound source and dropped,
//! so the published state always reflects the most recently requested clip.

pub mod global;
pub mod session;

pub use session::{PlaybackSession, SessionState};
