//! # Playback Session
//!
//! The single-session playback controller. One [`PlaybackSession`] owns the
//! one shared [`MediaChannel`] for the whole process, mediates between
//! every UI surface that wants to start, stop, or seek playback, and keeps a
//! live progress snapshot in sync with the channel's real asynchronous
//! status.
//!
//! ## Contract
//!
//! All operations are infallible at the public boundary. Invalid input (an
//! empty source url) is ignored; a rejected play attempt degrades to a
//! paused snapshot; nothing here ever returns an error to the caller. The
//! only observable effect of any failure is the state itself.
//!
//! ## Ordering
//!
//! [`play`](PlaybackSession::play) is the one suspending operation, and any
//! later call wins over its eventual resolution. Each attempt snapshots a
//! monotonic generation counter before awaiting the channel; rebinding,
//! pausing, and newer play attempts all bump it, so a resolution is only
//! acted on when no operation intervened while it was in flight. The url it
//! was issued for must additionally still match the channel's live bound
//! source, since the channel, not session bookkeeping, is the authority on
//! which source is loaded. A stale resolution is logged and dropped.

use bridge_traits::{ChannelEvent, MediaChannel};
use core_runtime::events::{CoreEvent, EventBus, PlaybackEvent};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, trace};

/// Read-only snapshot of the session, published to observers on every
/// change.
///
/// `current_time` stays within `[0, duration]` once the duration is known;
/// while the duration is unknown both fields read `0`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    /// Logical id of the clip bound to the channel; empty when none.
    pub current_id: String,
    /// Resolved source url bound to the channel; empty when none.
    pub current_url: String,
    /// True only between a confirmed start and a pause/end.
    pub is_playing: bool,
    /// Elapsed play-head position in seconds.
    pub current_time: f64,
    /// Total clip length in seconds; `0` until the channel reports it.
    pub duration: f64,
}

/// Single-session controller over the one shared media channel.
///
/// Construct one per process with [`PlaybackSession::new`] and share it via
/// `Arc`; tests construct isolated instances against a fake channel. The
/// session lives until the process ends and is never explicitly torn down.
pub struct PlaybackSession {
    channel: Arc<dyn MediaChannel>,
    state: Mutex<SessionState>,
    state_tx: watch::Sender<SessionState>,
    events: Option<EventBus>,
    wired: AtomicBool,
    /// Bumped by every operation that supersedes an in-flight start attempt.
    generation: AtomicU64,
}

impl PlaybackSession {
    /// Create a session over `channel` without event-bus reporting.
    pub fn new(channel: Arc<dyn MediaChannel>) -> Arc<Self> {
        Self::build(channel, None)
    }

    /// Create a session that additionally emits [`PlaybackEvent`]s on the
    /// given bus as it transitions.
    pub fn with_events(channel: Arc<dyn MediaChannel>, events: EventBus) -> Arc<Self> {
        Self::build(channel, Some(events))
    }

    fn build(channel: Arc<dyn MediaChannel>, events: Option<EventBus>) -> Arc<Self> {
        let (state_tx, _) = watch::channel(SessionState::default());
        Arc::new(Self {
            channel,
            state: Mutex::new(SessionState::default()),
            state_tx,
            events,
            wired: AtomicBool::new(false),
            generation: AtomicU64::new(0),
        })
    }

    /// Current state snapshot.
    pub fn state(&self) -> SessionState {
        self.state.lock().clone()
    }

    /// Subscribe to state snapshots; a new value is published on every
    /// change. The receiver always holds the latest snapshot.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state_tx.subscribe()
    }

    /// Wire the channel's event feed into the session. Idempotent: any
    /// number of calls performs the wiring exactly once.
    ///
    /// Spawns the one listener task that mirrors channel progress into the
    /// snapshot: time and metadata updates recompute `current_time` and
    /// `duration` from the channel's live values, and end-of-track clears
    /// `is_playing` while leaving the play head and bound url untouched.
    pub fn ensure_wired(self: &Arc<Self>) {
        if self.wired.swap(true, Ordering::SeqCst) {
            return;
        }

        let mut rx = self.channel.subscribe();
        let session = Arc::downgrade(self);
        tokio::spawn(async move {
            loop {
                match rx.recv().await {
                    Ok(event) => {
                        let Some(session) = session.upgrade() else { break };
                        match event {
                            ChannelEvent::TimeUpdated | ChannelEvent::MetadataReady => {
                                session.refresh_progress()
                            }
                            ChannelEvent::Ended => session.mark_ended(),
                        }
                    }
                    // Missed events are harmless: the next one re-reads the
                    // channel's live values.
                    Err(tokio::sync::broadcast::error::RecvError::Lagged(missed)) => {
                        trace!(missed, "channel event feed lagged");
                    }
                    Err(tokio::sync::broadcast::error::RecvError::Closed) => break,
                }
            }
        });
    }

    /// Bind `url` to the channel under the logical id `id`.
    ///
    /// Ignored when `url` is empty. Binding a url that differs from the
    /// current one is a hard cut: the play head and duration reset and the
    /// channel (re)loads the new source. Binding the same url under a
    /// different id only renames the session's logical id, leaving playback
    /// untouched, which is how two catalog entries can share one physical
    /// asset without restarting it.
    pub fn set_track(&self, id: &str, url: &str) {
        if url.is_empty() {
            return;
        }

        let mut state = self.state.lock();
        if state.current_url != url {
            debug!(clip = id, "binding new source");
            self.bump_generation();
            state.current_id = id.to_string();
            state.current_url = url.to_string();
            state.current_time = 0.0;
            state.duration = 0.0;
            self.channel.bind(url);
        } else if state.current_id != id {
            trace!(from = %state.current_id, to = id, "aliasing bound source");
            state.current_id = id.to_string();
        }
        self.publish(&state);
    }

    /// Bind `url` and attempt to start playback.
    ///
    /// Ignored when `url` is empty. The start attempt is the one suspending,
    /// fallible step; its resolution only flips `is_playing` when no rebind,
    /// pause, or newer attempt intervened while it was in flight and it
    /// still targets the channel's live bound source. Both the success and
    /// the failure of a superseded attempt are discarded, so the snapshot
    /// always reflects the most recently requested operation. Failures
    /// never propagate.
    pub async fn play(self: &Arc<Self>, id: &str, url: &str) {
        if url.is_empty() {
            return;
        }

        self.ensure_wired();
        self.set_track(id, url);

        let attempt = url.to_string();
        let issued = self.bump_generation();
        match self.channel.start().await {
            Ok(()) => {
                let bound = self.channel.current_source();
                let mut state = self.state.lock();
                if self.generation.load(Ordering::SeqCst) == issued
                    && bound.as_deref() == Some(attempt.as_str())
                    && state.current_url == attempt
                {
                    state.is_playing = true;
                    self.publish(&state);
                    self.emit(PlaybackEvent::Started {
                        clip_id: state.current_id.clone(),
                    });
                } else {
                    debug!(
                        attempt = %attempt,
                        bound = ?bound,
                        "discarding stale play resolution"
                    );
                }
            }
            Err(err) => {
                let mut state = self.state.lock();
                if self.generation.load(Ordering::SeqCst) == issued && state.current_url == attempt
                {
                    debug!(attempt = %attempt, error = %err, "play attempt rejected");
                    state.is_playing = false;
                    self.publish(&state);
                } else {
                    debug!(attempt = %attempt, error = %err, "stale play attempt rejected");
                }
            }
        }
    }

    /// Halt playback. Idempotent and synchronous; always leaves the session
    /// paused at the current play-head position, even when a start attempt
    /// for the same source resolves afterwards.
    pub fn pause(&self) {
        self.bump_generation();
        self.channel.halt();
        let mut state = self.state.lock();
        if state.is_playing {
            state.is_playing = false;
            self.publish(&state);
            self.emit(PlaybackEvent::Paused {
                clip_id: state.current_id.clone(),
                position_ms: (state.current_time * 1000.0) as u64,
            });
        }
    }

    /// Pause when `id` is the playing clip, otherwise play it.
    ///
    /// The single entry point most UI surfaces use. Toggling a different
    /// clip replaces the current one rather than ever playing two at once.
    pub async fn toggle(self: &Arc<Self>, id: &str, url: &str) {
        let should_pause = {
            let state = self.state.lock();
            state.current_id == id && state.is_playing
        };
        if should_pause {
            self.pause();
        } else {
            self.play(id, url).await;
        }
    }

    /// Move the play head to `fraction` of the known duration.
    ///
    /// Ignored while the duration is unknown (`0`), which also covers a
    /// rebind still in flight. The fraction is clamped to `[0, 1]` before
    /// being forwarded; out-of-range input never reaches the channel.
    pub fn seek(&self, fraction: f64) {
        if !fraction.is_finite() {
            return;
        }
        let duration = self.state.lock().duration;
        if duration == 0.0 {
            return;
        }
        self.channel.set_position(fraction.clamp(0.0, 1.0) * duration);
    }

    /// Recompute progress from the channel's live values. A non-finite
    /// length means the duration is not yet known and reads as `0`.
    fn refresh_progress(&self) {
        let position = self.channel.position();
        let length = self.channel.length();

        let mut state = self.state.lock();
        state.duration = if length.is_finite() && length > 0.0 {
            length
        } else {
            0.0
        };
        state.current_time = if state.duration > 0.0 {
            position.clamp(0.0, state.duration)
        } else {
            position.max(0.0)
        };
        self.publish(&state);
    }

    /// Natural end of track: finished, not rewound. The play head and bound
    /// url stay where they are.
    fn mark_ended(&self) {
        let mut state = self.state.lock();
        if state.is_playing {
            state.is_playing = false;
            self.publish(&state);
            self.emit(PlaybackEvent::Completed {
                clip_id: state.current_id.clone(),
            });
        }
    }

    /// Invalidate every start attempt currently in flight. Returns the new
    /// generation, which a fresh attempt records as its own.
    fn bump_generation(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn publish(&self, state: &SessionState) {
        self.state_tx.send_replace(state.clone());
    }

    fn emit(&self, event: PlaybackEvent) {
        if let Some(events) = &self.events {
            events.emit(CoreEvent::Playback(event)).ok();
        }
    }
}

impl std::fmt::Debug for PlaybackSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaybackSession")
            .field("state", &self.state())
            .field("wired", &self.wired.load(Ordering::SeqCst))
            .finish()
    }
}
