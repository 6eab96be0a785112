//! Clock-driven media channel implementation.
//!
//! `SimulatedChannel` stands in for a real platform audio element: it binds
//! one source at a time, reports metadata, advances a play head on a tokio
//! interval while started, and announces the natural end of a clip. Demos
//! and integration tests run against it without any audio hardware.

use bridge_traits::{BridgeError, ChannelEvent, MediaChannel, Result};
use parking_lot::Mutex;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast;
use tracing::debug;

const EVENT_BUFFER: usize = 64;

#[derive(Debug, Default)]
struct ChannelInner {
    source: Option<String>,
    position: f64,
    length: f64,
    playing: bool,
    /// Bumped on every bind; a running ticker exits when its epoch is stale.
    epoch: u64,
}

/// Simulated single-source audio channel.
///
/// Clip lengths come from a per-url table with a configurable default, so a
/// test can bind any url and get believable metadata. Urls registered as
/// broken make [`start`](MediaChannel::start) fail, exercising the
/// swallowed-failure path of the playback session.
pub struct SimulatedChannel {
    inner: Arc<Mutex<ChannelInner>>,
    events: broadcast::Sender<ChannelEvent>,
    lengths: HashMap<String, f64>,
    default_length: f64,
    broken: HashSet<String>,
    tick: Duration,
    step: f64,
}

impl SimulatedChannel {
    /// Real-time simulation: the play head advances one second per second,
    /// in quarter-second ticks, and unknown urls are 30 seconds long.
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(EVENT_BUFFER);
        Self {
            inner: Arc::new(Mutex::new(ChannelInner::default())),
            events,
            lengths: HashMap::new(),
            default_length: 30.0,
            broken: HashSet::new(),
            tick: Duration::from_millis(250),
            step: 0.25,
        }
    }

    /// Register the length reported for `url`.
    pub fn with_clip_length(mut self, url: impl Into<String>, seconds: f64) -> Self {
        self.lengths.insert(url.into(), seconds);
        self
    }

    /// Length reported for urls without a registered one.
    pub fn with_default_length(mut self, seconds: f64) -> Self {
        self.default_length = seconds;
        self
    }

    /// Make [`start`](MediaChannel::start) fail while `url` is bound.
    pub fn with_broken(mut self, url: impl Into<String>) -> Self {
        self.broken.insert(url.into());
        self
    }

    /// Override the tick interval and the seconds advanced per tick. Tests
    /// use a short tick with a large step to fast-forward a clip.
    pub fn with_tick(mut self, tick: Duration, step: f64) -> Self {
        self.tick = tick;
        self.step = step;
        self
    }

    fn spawn_ticker(&self, epoch: u64) {
        let inner = Arc::clone(&self.inner);
        let events = self.events.clone();
        let tick = self.tick;
        let step = self.step;

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(tick);
            // The first tick completes immediately; consume it so the play
            // head only advances after a full interval.
            interval.tick().await;
            loop {
                interval.tick().await;
                let ended = {
                    let mut state = inner.lock();
                    if state.epoch != epoch || !state.playing {
                        break;
                    }
                    state.position = (state.position + step).min(state.length.max(0.0));
                    if state.length > 0.0 && state.position >= state.length {
                        state.playing = false;
                        true
                    } else {
                        false
                    }
                };
                let _ = events.send(ChannelEvent::TimeUpdated);
                if ended {
                    let _ = events.send(ChannelEvent::Ended);
                    break;
                }
            }
        });
    }
}

impl Default for SimulatedChannel {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl MediaChannel for SimulatedChannel {
    fn bind(&self, url: &str) {
        let length = self
            .lengths
            .get(url)
            .copied()
            .unwrap_or(self.default_length);
        {
            let mut state = self.inner.lock();
            state.source = Some(url.to_string());
            state.position = 0.0;
            state.length = length;
            state.playing = false;
            state.epoch += 1;
        }
        debug!(url, length, "bound simulated source");
        let _ = self.events.send(ChannelEvent::MetadataReady);
    }

    async fn start(&self) -> Result<()> {
        let epoch = {
            let mut state = self.inner.lock();
            let Some(source) = state.source.clone() else {
                return Err(BridgeError::NotAvailable("no source bound".to_string()));
            };
            if self.broken.contains(&source) {
                return Err(BridgeError::OperationFailed(format!(
                    "cannot decode {source}"
                )));
            }
            if state.playing {
                return Ok(());
            }
            state.playing = true;
            state.epoch
        };
        self.spawn_ticker(epoch);
        Ok(())
    }

    fn halt(&self) {
        self.inner.lock().playing = false;
    }

    fn set_position(&self, seconds: f64) {
        let mut state = self.inner.lock();
        if state.source.is_none() {
            return;
        }
        state.position = if state.length > 0.0 {
            seconds.clamp(0.0, state.length)
        } else {
            seconds.max(0.0)
        };
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
