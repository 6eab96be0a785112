//! Playback session behavior against a scripted fake channel.
//!
//! The fake gives each test full control over the channel's asynchronous
//! surface: per-url start outcomes (immediate success, failure, or a gated
//! resolution released mid-test), manually driven progress values, and
//! manually fired events. That makes the ordering guarantees checkable
//! without a real media backend.

use bridge_traits::{BridgeError, ChannelEvent, MediaChannel};
use core_playback::{PlaybackSession, SessionState};
use core_runtime::events::{CoreEvent, EventBus, PlaybackEvent};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{broadcast, Notify};

const URL_A: &str = "/audio/sax.ogg";
const URL_B: &str = "/audio/rain.ogg";

// ============================================================================
// Fake channel
// ============================================================================

#[derive(Clone)]
enum StartMode {
    /// Resolve successfully right away.
    Immediate,
    /// Reject right away.
    Fail,
    /// Suspend until the notify fires, then resolve with the given outcome.
    Gated(Arc<Notify>, bool),
}

#[derive(Default)]
struct FakeInner {
    source: Option<String>,
    position: f64,
    length: f64,
    bind_counts: HashMap<String, usize>,
    set_positions: Vec<f64>,
}

struct FakeChannel {
    inner: Mutex<FakeInner>,
    lengths: HashMap<String, f64>,
    start_modes: Mutex<HashMap<String, StartMode>>,
    events: broadcast::Sender<ChannelEvent>,
}

impl FakeChannel {
    fn new() -> Self {
        let (events, _) = broadcast::channel(64);
        Self {
            inner: Mutex::new(FakeInner::default()),
            lengths: HashMap::new(),
            start_modes: Mutex::new(HashMap::new()),
            events,
        }
    }

    fn with_length(mut self, url: &str, length: f64) -> Self {
        self.lengths.insert(url.to_string(), length);
        self
    }

    fn with_start_mode(self, url: &str, mode: StartMode) -> Self {
        self.start_modes.lock().insert(url.to_string(), mode);
        self
    }

    fn set_start_mode(&self, url: &str, mode: StartMode) {
        self.start_modes.lock().insert(url.to_string(), mode);
    }

    fn emit_metadata(&self) {
        let _ = self.events.send(ChannelEvent::MetadataReady);
    }

    fn emit_time(&self, position: f64) {
        self.inner.lock().position = position;
        let _ = self.events.send(ChannelEvent::TimeUpdated);
    }

    fn emit_ended(&self) {
        let _ = self.events.send(ChannelEvent::Ended);
    }

    fn bind_count(&self, url: &str) -> usize {
        self.inner.lock().bind_counts.get(url).copied().unwrap_or(0)
    }

    fn set_positions(&self) -> Vec<f64> {
        self.inner.lock().set_positions.clone()
    }

    fn listener_count(&self) -> usize {
        self.events.receiver_count()
    }
}

#[async_trait::async_trait]
impl MediaChannel for FakeChannel {
    fn bind(&self, url: &str) {
        let mut inner = self.inner.lock();
        inner.source = Some(url.to_string());
        inner.position = 0.0;
        inner.length = self.lengths.get(url).copied().unwrap_or(f64::NAN);
        *inner.bind_counts.entry(url.to_string()).or_insert(0) += 1;
    }

    async fn start(&self) -> bridge_traits::Result<()> {
        let (source, mode) = {
            let inner = self.inner.lock();
            let Some(source) = inner.source.clone() else {
                return Err(BridgeError::NotAvailable("no source bound".to_string()));
            };
            let mode = self
                .start_modes
                .lock()
                .get(&source)
                .cloned()
                .unwrap_or(StartMode::Immediate);
            (source, mode)
        };
        match mode {
            StartMode::Immediate => Ok(()),
            StartMode::Fail => Err(BridgeError::OperationFailed(format!(
                "cannot start {source}"
            ))),
            StartMode::Gated(gate, outcome) => {
                gate.notified().await;
                if outcome {
                    Ok(())
                } else {
                    Err(BridgeError::OperationFailed(format!(
                        "late rejection for {source}"
                    )))
                }
            }
        }
    }

    fn halt(&self) {}

    fn set_position(&self, seconds: f64) {
        let mut inner = self.inner.lock();
        inner.position = seconds;
        inner.set_positions.push(seconds);
    }

    fn position(&self) -> f64 {
        self.inner.lock().position
    }

    fn length(&self) -> f64 {
        self.inner.lock().length
    }

    fn current_source(&self) -> Option<String> {
        self.inner.lock().source.clone()
    }

    fn subscribe(&self) -> broadcast::Receiver<ChannelEvent> {
        self.events.subscribe()
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn session_over(channel: &Arc<FakeChannel>) -> Arc<PlaybackSession> {
    PlaybackSession::new(Arc::clone(channel) as Arc<dyn MediaChannel>)
}

/// Wait until the published snapshot satisfies `predicate`.
async fn wait_for_state<F>(session: &Arc<PlaybackSession>, predicate: F) -> SessionState
where
    F: Fn(&SessionState) -> bool,
{
    let mut rx = session.subscribe();
    tokio::time::timeout(Duration::from_secs(2), async {
        loop {
            {
                let state = rx.borrow();
                if predicate(&state) {
                    return state.clone();
                }
            }
            rx.changed().await.expect("session dropped");
        }
    })
    .await
    .expect("state condition not reached in time")
}

// ============================================================================
// Binding and aliasing
// ============================================================================

#[tokio::test]
async fn empty_url_is_ignored_everywhere() {
    let channel = Arc::new(FakeChannel::new());
    let session = session_over(&channel);

    session.set_track("x", "");
    session.play("x", "").await;

    let state = session.state();
    assert_eq!(state, SessionState::default());
    assert_eq!(channel.bind_count(URL_A), 0);
}

#[tokio::test]
async fn alias_keeps_playback_position() {
    let channel = Arc::new(FakeChannel::new().with_length(URL_A, 186.0));
    let session = session_over(&channel);

    session.ensure_wired();
    session.set_track("clip-4", URL_A);
    channel.emit_metadata();
    channel.emit_time(42.0);
    let before = wait_for_state(&session, |s| s.current_time == 42.0).await;
    assert_eq!(before.duration, 186.0);

    // Second logical id over the same physical asset: only the id moves.
    session.set_track("route-1-opener", URL_A);
    let state = session.state();
    assert_eq!(state.current_id, "route-1-opener");
    assert_eq!(state.current_url, URL_A);
    assert_eq!(state.current_time, 42.0);
    assert_eq!(state.duration, 186.0);
    assert_eq!(channel.bind_count(URL_A), 1);
}

#[tokio::test]
async fn rebinding_a_new_source_is_a_hard_cut() {
    let channel = Arc::new(
        FakeChannel::new()
            .with_length(URL_A, 186.0)
            .with_length(URL_B, 152.0),
    );
    let session = session_over(&channel);

    session.ensure_wired();
    session.set_track("clip-4", URL_A);
    channel.emit_metadata();
    channel.emit_time(33.0);
    wait_for_state(&session, |s| s.current_time == 33.0).await;

    session.set_track("clip-4", URL_B);
    let state = session.state();
    assert_eq!(state.current_url, URL_B);
    assert_eq!(state.current_time, 0.0);
    assert_eq!(state.duration, 0.0);
    assert_eq!(channel.position(), 0.0);
    assert_eq!(channel.bind_count(URL_B), 1);
}

// ============================================================================
// Play, pause, toggle
// ============================================================================

#[tokio::test]
async fn play_confirms_against_the_live_source() {
    let channel = Arc::new(FakeChannel::new().with_length(URL_A, 186.0));
    let session = session_over(&channel);

    session.play("clip-4", URL_A).await;
    let state = session.state();
    assert!(state.is_playing);
    assert_eq!(state.current_id, "clip-4");
    assert_eq!(state.current_url, URL_A);
    assert_eq!(channel.current_source().as_deref(), Some(URL_A));
}

#[tokio::test]
async fn rejected_play_degrades_to_paused() {
    let channel = Arc::new(FakeChannel::new().with_start_mode(URL_A, StartMode::Fail));
    let session = session_over(&channel);

    // No error escapes; the only observable effect is the paused snapshot.
    session.play("clip-4", URL_A).await;
    let state = session.state();
    assert!(!state.is_playing);
    assert_eq!(state.current_url, URL_A);
}

#[tokio::test]
async fn exclusivity_across_consecutive_plays() {
    let channel = Arc::new(FakeChannel::new());
    let session = session_over(&channel);

    session.play("a", URL_A).await;
    session.play("b", URL_B).await;

    let state = session.state();
    assert!(state.is_playing);
    assert_eq!(state.current_url, URL_B);
    // The channel holds exactly one bound source.
    assert_eq!(channel.current_source().as_deref(), Some(URL_B));
}

#[tokio::test]
async fn pause_is_idempotent() {
    let channel = Arc::new(FakeChannel::new());
    let session = session_over(&channel);

    session.play("a", URL_A).await;
    assert!(session.state().is_playing);

    session.pause();
    session.pause();
    let state = session.state();
    assert!(!state.is_playing);
    assert_eq!(state.current_url, URL_A);
}

#[tokio::test]
async fn toggle_is_symmetric_on_one_clip() {
    let channel = Arc::new(FakeChannel::new());
    let session = session_over(&channel);

    session.toggle("x", URL_A).await;
    let state = session.state();
    assert!(state.is_playing);
    assert_eq!(state.current_id, "x");

    session.toggle("x", URL_A).await;
    let state = session.state();
    assert!(!state.is_playing);
    assert_eq!(state.current_url, URL_A);

    session.toggle("x", URL_A).await;
    assert!(session.state().is_playing);
}

#[tokio::test]
async fn toggling_another_clip_replaces_the_current_one() {
    let channel = Arc::new(FakeChannel::new());
    let session = session_over(&channel);

    session.toggle("a", URL_A).await;
    session.toggle("b", URL_B).await;

    let state = session.state();
    assert!(state.is_playing);
    assert_eq!(state.current_id, "b");
    assert_eq!(state.current_url, URL_B);
    assert_eq!(channel.current_source().as_deref(), Some(URL_B));
}

// ============================================================================
// Stale resolution
// ============================================================================

#[tokio::test]
async fn late_success_for_a_replaced_source_is_discarded() {
    let gate = Arc::new(Notify::new());
    let channel = Arc::new(
        FakeChannel::new().with_start_mode(URL_A, StartMode::Gated(Arc::clone(&gate), true)),
    );
    let session = session_over(&channel);

    // First attempt parks inside the channel's start call.
    let first = {
        let session = Arc::clone(&session);
        tokio::spawn(async move { session.play("a", URL_A).await })
    };
    tokio::task::yield_now().await;

    // Second attempt wins the channel while the first is still in flight.
    session.play("b", URL_B).await;
    let state = session.state();
    assert!(state.is_playing);
    assert_eq!(state.current_url, URL_B);

    // Now the first attempt resolves successfully, for a source that is no
    // longer bound. It must not flip the state back.
    gate.notify_one();
    first.await.unwrap();

    let state = session.state();
    assert!(state.is_playing);
    assert_eq!(state.current_id, "b");
    assert_eq!(state.current_url, URL_B);
}

#[tokio::test]
async fn late_failure_for_a_replaced_source_is_discarded() {
    let gate = Arc::new(Notify::new());
    let channel = Arc::new(
        FakeChannel::new().with_start_mode(URL_A, StartMode::Gated(Arc::clone(&gate), false)),
    );
    let session = session_over(&channel);

    let first = {
        let session = Arc::clone(&session);
        tokio::spawn(async move { session.play("a", URL_A).await })
    };
    tokio::task::yield_now().await;

    session.play("b", URL_B).await;
    assert!(session.state().is_playing);

    // The stale rejection must not pause the newer, playing clip.
    gate.notify_one();
    first.await.unwrap();

    let state = session.state();
    assert!(state.is_playing);
    assert_eq!(state.current_url, URL_B);
}

#[tokio::test]
async fn pause_wins_over_a_late_same_source_success() {
    let gate = Arc::new(Notify::new());
    let channel = Arc::new(
        FakeChannel::new().with_start_mode(URL_A, StartMode::Gated(Arc::clone(&gate), true)),
    );
    let session = session_over(&channel);

    // The attempt parks inside start with the url unchanged throughout, so
    // only the intervening pause can mark it stale.
    let attempt = {
        let session = Arc::clone(&session);
        tokio::spawn(async move { session.play("a", URL_A).await })
    };
    tokio::task::yield_now().await;

    session.pause();
    gate.notify_one();
    attempt.await.unwrap();

    let state = session.state();
    assert!(!state.is_playing);
    assert_eq!(state.current_url, URL_A);
}

#[tokio::test]
async fn late_same_source_failure_does_not_clobber_a_newer_success() {
    let gate = Arc::new(Notify::new());
    let channel = Arc::new(
        FakeChannel::new().with_start_mode(URL_A, StartMode::Gated(Arc::clone(&gate), false)),
    );
    let session = session_over(&channel);

    let first = {
        let session = Arc::clone(&session);
        tokio::spawn(async move { session.play("a", URL_A).await })
    };
    tokio::task::yield_now().await;

    // A retry for the same url succeeds while the first attempt is still
    // parked. Clearing the failing mode mirrors a transient host rejection.
    channel.set_start_mode(URL_A, StartMode::Immediate);
    session.play("a", URL_A).await;
    assert!(session.state().is_playing);

    gate.notify_one();
    first.await.unwrap();

    let state = session.state();
    assert!(state.is_playing);
    assert_eq!(state.current_url, URL_A);
}

// ============================================================================
// Progress wiring
// ============================================================================

#[tokio::test]
async fn wiring_happens_exactly_once() {
    let channel = Arc::new(FakeChannel::new());
    let session = session_over(&channel);

    session.ensure_wired();
    session.ensure_wired();
    session.play("a", URL_A).await;

    assert_eq!(channel.listener_count(), 1);
}

#[tokio::test]
async fn unknown_length_reads_as_zero_duration() {
    // No registered length: the fake reports NAN like a channel whose
    // metadata has not arrived.
    let channel = Arc::new(FakeChannel::new());
    let session = session_over(&channel);

    session.ensure_wired();
    session.set_track("a", URL_A);
    channel.emit_time(5.0);
    let state = wait_for_state(&session, |s| s.current_time == 5.0).await;
    assert_eq!(state.duration, 0.0);
}

#[tokio::test]
async fn progress_is_clamped_to_the_known_duration() {
    let channel = Arc::new(FakeChannel::new().with_length(URL_A, 100.0));
    let session = session_over(&channel);

    session.ensure_wired();
    session.set_track("a", URL_A);
    channel.emit_metadata();
    channel.emit_time(250.0);

    let state = wait_for_state(&session, |s| s.duration == 100.0 && s.current_time > 0.0).await;
    assert_eq!(state.current_time, 100.0);
}

#[tokio::test]
async fn natural_end_leaves_the_play_head_in_place() {
    let channel = Arc::new(FakeChannel::new().with_length(URL_A, 90.0));
    let session = session_over(&channel);

    session.play("a", URL_A).await;
    channel.emit_metadata();
    channel.emit_time(90.0);
    wait_for_state(&session, |s| s.current_time == 90.0).await;

    channel.emit_ended();
    let state = wait_for_state(&session, |s| !s.is_playing).await;
    assert_eq!(state.current_time, 90.0);
    assert_eq!(state.current_url, URL_A);
    assert_eq!(state.current_id, "a");
}

// ============================================================================
// Seeking
// ============================================================================

#[tokio::test]
async fn seek_clamps_and_scales() {
    let channel = Arc::new(FakeChannel::new().with_length(URL_A, 100.0));
    let session = session_over(&channel);

    session.ensure_wired();
    session.set_track("a", URL_A);
    channel.emit_metadata();
    wait_for_state(&session, |s| s.duration == 100.0).await;

    session.seek(-0.5);
    session.seek(1.5);
    session.seek(0.25);
    assert_eq!(channel.set_positions(), vec![0.0, 100.0, 25.0]);
}

#[tokio::test]
async fn seek_with_unknown_duration_is_a_noop() {
    let channel = Arc::new(FakeChannel::new());
    let session = session_over(&channel);

    // Covers both the idle session and a rebind whose metadata has not
    // arrived yet: duration reads zero, so nothing reaches the channel.
    session.seek(0.5);
    session.set_track("a", URL_A);
    session.seek(0.5);
    session.seek(f64::NAN);
    assert!(channel.set_positions().is_empty());
}

// ============================================================================
// Observation
// ============================================================================

#[tokio::test]
async fn watch_subscribers_see_each_transition() {
    let channel = Arc::new(FakeChannel::new());
    let session = session_over(&channel);
    let mut rx = session.subscribe();

    session.play("a", URL_A).await;
    rx.changed().await.unwrap();
    assert!(rx.borrow().is_playing);

    session.pause();
    let paused = wait_for_state(&session, |s| !s.is_playing).await;
    assert_eq!(paused.current_url, URL_A);
}

#[tokio::test]
async fn session_reports_transitions_on_the_event_bus() {
    let bus = EventBus::new(16);
    let mut sub = bus.subscribe();
    let channel = Arc::new(FakeChannel::new().with_length(URL_A, 60.0));
    let session =
        PlaybackSession::with_events(Arc::clone(&channel) as Arc<dyn MediaChannel>, bus);

    session.play("clip-4", URL_A).await;
    assert_eq!(
        sub.recv().await.unwrap(),
        CoreEvent::Playback(PlaybackEvent::Started {
            clip_id: "clip-4".to_string(),
        })
    );

    channel.emit_metadata();
    channel.emit_time(12.0);
    wait_for_state(&session, |s| s.current_time == 12.0).await;

    session.pause();
    assert_eq!(
        sub.recv().await.unwrap(),
        CoreEvent::Playback(PlaybackEvent::Paused {
            clip_id: "clip-4".to_string(),
            position_ms: 12_000,
        })
    );

    session.play("clip-4", URL_A).await;
    sub.recv().await.unwrap();
    channel.emit_ended();
    let event = tokio::time::timeout(Duration::from_secs(2), sub.recv())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(
        event,
        CoreEvent::Playback(PlaybackEvent::Completed {
            clip_id: "clip-4".to_string(),
        })
    );
}
