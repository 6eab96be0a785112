//! Workspace facade crate.
//!
//! This crate exists to expose feature flags that map to the individual
//! workspace crates (e.g., `core-playback`, `core-catalog`, `core-auth`).
//! Host applications can depend on `citysound-workspace` and enable the
//! documented features without needing to wire each crate individually.
//!
//! - `desktop` (default): every core crate plus the desktop bridge
//!   implementations in `bridge-desktop`.
//! - `headless`: the core crates only; the host supplies its own bridges.

#[cfg(feature = "desktop")]
pub use bridge_desktop;
#[cfg(any(feature = "desktop", feature = "headless"))]
pub use core_auth;
#[cfg(any(feature = "desktop", feature = "headless"))]
pub use core_catalog;
#[cfg(any(feature = "desktop", feature = "headless"))]
pub use core_playback;
#[cfg(any(feature = "desktop", feature = "headless"))]
pub use core_runtime;
