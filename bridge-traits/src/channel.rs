//! Media channel bridge trait and supporting event types.
//!
//! The channel is the one shared media resource a host platform exposes: a
//! single playable audio output that can be bound to at most one source at a
//! time. The core playback session drives it exclusively through this trait,
//! which keeps the session testable against a fake channel and keeps every
//! platform quirk (element lifecycle, autoplay policy, decoder availability)
//! on the host side of the boundary.

use crate::error::Result;
use tokio::sync::broadcast;

/// Events emitted by a [`MediaChannel`] as its asynchronous status changes.
///
/// Delivery uses `tokio::sync::broadcast`; subscribers that fall behind
/// receive `RecvError::Lagged` and should simply continue, since every event
/// carries no payload and the channel's live getters are the source of truth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelEvent {
    /// The play head advanced. Consumers re-read [`MediaChannel::position`].
    TimeUpdated,
    /// Stream metadata became available. Consumers re-read
    /// [`MediaChannel::length`].
    MetadataReady,
    /// The bound source played through to its natural end.
    Ended,
}

/// Abstraction over the single underlying media playback resource.
///
/// Implementations own exactly one playable output. Binding a new source is a
/// hard cut: whatever was loaded before is discarded, the play head resets,
/// and the previous length is forgotten. All methods other than [`start`] are
/// synchronous and infallible from the caller's point of view; `start` is the
/// one operation that suspends and may be rejected by the host.
///
/// [`start`]: MediaChannel::start
#[async_trait::async_trait]
pub trait MediaChannel: Send + Sync {
    /// Bind the channel to `url` and begin (re)loading it.
    ///
    /// Resets the play head to zero. Implementations should emit
    /// [`ChannelEvent::MetadataReady`] once the new source's length is known.
    fn bind(&self, url: &str);

    /// Attempt to begin playback of the currently bound source.
    ///
    /// This is the only fallible, suspending channel operation. It may be
    /// rejected for any host-side reason: no source bound, resource not yet
    /// ready, platform playback policy, decode failure. Callers must treat
    /// the resolution as advisory and re-check [`current_source`] before
    /// acting on success, because the bound source may have changed while
    /// the attempt was in flight.
    ///
    /// [`current_source`]: MediaChannel::current_source
    async fn start(&self) -> Result<()>;

    /// Stop producing audio, preserving the play head position. Idempotent.
    fn halt(&self);

    /// Move the play head to an absolute position in seconds.
    ///
    /// Implementations clamp into the valid range for the bound source;
    /// calls while no source is bound are ignored.
    fn set_position(&self, seconds: f64);

    /// Live play-head position in seconds.
    fn position(&self) -> f64;

    /// Live total length of the bound source in seconds.
    ///
    /// May be `NAN` or otherwise non-finite before metadata is known;
    /// consumers must treat any non-finite value as unknown.
    fn length(&self) -> f64;

    /// The source the channel is actually bound to right now.
    ///
    /// This, not any caller-side bookkeeping, is the authority on which
    /// source is loaded.
    fn current_source(&self) -> Option<String>;

    /// Subscribe to the channel's event feed.
    fn subscribe(&self) -> broadcast::Receiver<ChannelEvent>;
}
