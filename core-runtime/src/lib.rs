//! # Core Runtime Module
//!
//! Foundational runtime infrastructure for the Citysound core:
//! - Logging and tracing setup
//! - Configuration management and bridge wiring
//! - Event bus
//!
//! ## Overview
//!
//! This crate contains the runtime utilities the other core crates depend
//! on. It establishes the logging conventions, the event broadcasting
//! mechanism, and the fail-fast bridge validation used throughout the
//! system.

pub mod config;
pub mod error;
pub mod events;
pub mod logging;

pub use config::CoreConfig;
pub use error::{Error, Result};
pub use events::{AuthEvent, CoreEvent, EventBus, PlaybackEvent};
