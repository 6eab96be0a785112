//! # Core Configuration
//!
//! Builder for wiring the host bridges into the core crates.
//!
//! ## Overview
//!
//! The configuration system uses a builder to construct a [`CoreConfig`]
//! holding every bridge the core needs, with fail-fast validation so a
//! missing capability surfaces at startup rather than at first use.
//!
//! ## Required Dependencies
//!
//! - [`MediaChannel`] - the single audio playback resource
//! - [`KeyValueStore`] - persistent key-value state for the account cache
//!
//! ## Usage
//!
//! ```ignore
//! use core_runtime::config::CoreConfig;
//! use std::sync::Arc;
//!
//! let config = CoreConfig::builder()
//!     .media_channel(Arc::new(MyChannel::new()))
//!     .settings_store(Arc::new(MyStore::new()))
//!     .event_buffer(200)
//!     .build()?;
//! ```

use crate::error::{Error, Result};
use crate::events::DEFAULT_EVENT_BUFFER_SIZE;
use bridge_traits::{KeyValueStore, MediaChannel};
use std::fmt;
use std::sync::Arc;

/// Assembled bridge set and runtime settings for the core crates.
///
/// Use [`CoreConfig::builder`] to construct instances.
#[derive(Clone)]
pub struct CoreConfig {
    /// The single underlying media channel.
    pub media_channel: Arc<dyn MediaChannel>,

    /// Persistent key-value storage (account cache, preferences).
    pub settings_store: Arc<dyn KeyValueStore>,

    /// Event-bus buffer size per subscriber.
    pub event_buffer: usize,
}

impl CoreConfig {
    /// Start building a configuration.
    pub fn builder() -> CoreConfigBuilder {
        CoreConfigBuilder::default()
    }
}

impl fmt::Debug for CoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CoreConfig")
            .field("media_channel", &"Arc<dyn MediaChannel>")
            .field("settings_store", &"Arc<dyn KeyValueStore>")
            .field("event_buffer", &self.event_buffer)
            .finish()
    }
}

/// Builder for [`CoreConfig`].
#[derive(Default)]
pub struct CoreConfigBuilder {
    media_channel: Option<Arc<dyn MediaChannel>>,
    settings_store: Option<Arc<dyn KeyValueStore>>,
    event_buffer: Option<usize>,
}

impl CoreConfigBuilder {
    /// Provide the media channel bridge (required).
    pub fn media_channel(mut self, channel: Arc<dyn MediaChannel>) -> Self {
        self.media_channel = Some(channel);
        self
    }

    /// Provide the key-value storage bridge (required).
    pub fn settings_store(mut self, store: Arc<dyn KeyValueStore>) -> Self {
        self.settings_store = Some(store);
        self
    }

    /// Override the event-bus buffer size.
    pub fn event_buffer(mut self, capacity: usize) -> Self {
        self.event_buffer = Some(capacity);
        self
    }

    /// Validate and assemble the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapabilityMissing`] naming the first absent required
    /// bridge, and [`Error::Config`] for invalid settings.
    pub fn build(self) -> Result<CoreConfig> {
        let media_channel = self.media_channel.ok_or_else(|| Error::CapabilityMissing {
            capability: "MediaChannel".to_string(),
            message: "No media channel provided. Desktop hosts can use \
                      bridge-desktop's SimulatedChannel; other hosts must \
                      inject a platform adapter."
                .to_string(),
        })?;

        let settings_store = self.settings_store.ok_or_else(|| Error::CapabilityMissing {
            capability: "KeyValueStore".to_string(),
            message: "No key-value store provided. Desktop hosts can use \
                      bridge-desktop's MemoryStore or JsonFileStore."
                .to_string(),
        })?;

        let event_buffer = self.event_buffer.unwrap_or(DEFAULT_EVENT_BUFFER_SIZE);
        if event_buffer == 0 {
            return Err(Error::Config(
                "event_buffer must be greater than zero".to_string(),
            ));
        }

        Ok(CoreConfig {
            media_channel,
            settings_store,
            event_buffer,
        })
    }
}
