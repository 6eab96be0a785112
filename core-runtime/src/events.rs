//! # Event Bus
//!
//! Typed broadcast events for the core crates, built on
//! `tokio::sync::broadcast`. The playback session and the account cache emit
//! events here so UI surfaces can observe transitions without holding a
//! reference to either module.
//!
//! ## Usage
//!
//! ```rust
//! use core_runtime::events::{CoreEvent, EventBus, PlaybackEvent};
//!
//! let bus = EventBus::new(100);
//! let mut sub = bus.subscribe();
//!
//! bus.emit(CoreEvent::Playback(PlaybackEvent::Started {
//!     clip_id: "clip-4".to_string(),
//! }))
//! .ok();
//! ```
//!
//! Subscribers that fall behind receive `RecvError::Lagged(n)`; that is
//! non-fatal and the subscriber keeps receiving newer events. `Closed` means
//! every sender is gone and the consumer should exit.

use serde::{Deserialize, Serialize};
use std::fmt;
use tokio::sync::broadcast;

pub use tokio::sync::broadcast::error::{RecvError, SendError};
pub use tokio::sync::broadcast::Receiver;

/// Default buffer size for the event bus channel.
pub const DEFAULT_EVENT_BUFFER_SIZE: usize = 100;

// ============================================================================
// Event Types
// ============================================================================

/// Top-level event enum encompassing all event categories.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "payload")]
pub enum CoreEvent {
    /// Playback-session events
    Playback(PlaybackEvent),
    /// Account-cache events
    Auth(AuthEvent),
}

impl CoreEvent {
    /// Returns a human-readable description of the event.
    pub fn description(&self) -> &str {
        match self {
            CoreEvent::Playback(e) => e.description(),
            CoreEvent::Auth(e) => e.description(),
        }
    }
}

/// Events emitted by the playback session as its state transitions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "event")]
pub enum PlaybackEvent {
    /// A play attempt succeeded for the currently bound clip.
    Started {
        /// The clip that is now audible.
        clip_id: String,
    },
    /// Playback was paused by a caller.
    Paused {
        /// The clip that was paused.
        clip_id: String,
        /// Play-head position when paused (milliseconds).
        position_ms: u64,
    },
    /// The bound clip played through to its natural end.
    Completed {
        /// The clip that finished.
        clip_id: String,
    },
}

impl PlaybackEvent {
    fn description(&self) -> &str {
        match self {
            PlaybackEvent::Started { .. } => "Playback started",
            PlaybackEvent::Paused { .. } => "Playback paused",
            PlaybackEvent::Completed { .. } => "Clip completed",
        }
    }
}

/// Events emitted by the local account cache.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "event")]
pub enum AuthEvent {
    /// A new account was registered and signed in.
    Registered {
        /// The new account id.
        account_id: String,
    },
    /// An existing account signed in.
    SignedIn {
        /// The account id.
        account_id: String,
    },
    /// The current account signed out.
    SignedOut,
}

impl AuthEvent {
    fn description(&self) -> &str {
        match self {
            AuthEvent::Registered { .. } => "Account registered",
            AuthEvent::SignedIn { .. } => "Account signed in",
            AuthEvent::SignedOut => "Account signed out",
        }
    }
}

// ============================================================================
// Event Bus
// ============================================================================

/// Central event bus for publishing and subscribing to [`CoreEvent`]s.
///
/// Cloning the bus yields another producer for the same channel; each call to
/// [`subscribe`](EventBus::subscribe) yields an independent consumer. Past
/// events are not replayed to new subscribers.
#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<CoreEvent>,
}

impl EventBus {
    /// Creates a new event bus buffering up to `capacity` events per
    /// subscriber.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publishes an event to all subscribers.
    ///
    /// Returns the number of subscribers reached, or an error when there are
    /// none. Emitters that do not care whether anyone is listening call
    /// `.ok()` on the result.
    pub fn emit(&self, event: CoreEvent) -> Result<usize, SendError<CoreEvent>> {
        self.sender.send(event)
    }

    /// Creates a new subscriber receiving all future events.
    pub fn subscribe(&self) -> Receiver<CoreEvent> {
        self.sender.subscribe()
    }

    /// Returns the number of active subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_EVENT_BUFFER_SIZE)
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("subscriber_count", &self.subscriber_count())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
