//! End-to-end playback walkthrough against the simulated channel.
//!
//! Run with:
//! ```sh
//! cargo run -p core-playback --example playback_demo
//! ```

use anyhow::Result;
use bridge_desktop::SimulatedChannel;
use bridge_traits::MediaChannel;
use core_playback::PlaybackSession;
use core_runtime::events::EventBus;
use core_runtime::logging::{init_logging, LogFormat, LoggingConfig};
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    init_logging(
        LoggingConfig::default()
            .with_format(LogFormat::Pretty)
            .with_filter("core_playback=debug,bridge_desktop=debug"),
    )?;

    // Fast-forwarded clock: every 50ms tick advances the play head by three
    // seconds, so a three-minute clip plays out in a few wall-clock seconds.
    let channel: Arc<dyn MediaChannel> = Arc::new(
        SimulatedChannel::new()
            .with_clip_length("/audio/sax.ogg", 186.0)
            .with_clip_length("/audio/rain.ogg", 152.0)
            .with_broken("/audio/missing.ogg")
            .with_tick(Duration::from_millis(50), 3.0),
    );

    let bus = EventBus::default();
    let mut events = bus.subscribe();
    tokio::spawn(async move {
        while let Ok(event) = events.recv().await {
            println!("[event] {}", event.description());
        }
    });

    let session = PlaybackSession::with_events(channel, bus);
    let mut states = session.subscribe();

    println!("--> play clip-4");
    session.play("clip-4", "/audio/sax.ogg").await;
    watch_progress(&mut states, Duration::from_secs(1)).await;

    println!("--> seek to 80%");
    session.seek(0.8);
    watch_progress(&mut states, Duration::from_secs(1)).await;

    println!("--> toggle pauses the playing clip");
    session.toggle("clip-4", "/audio/sax.ogg").await;
    println!("    state: {:?}", session.state());

    println!("--> toggling another clip replaces it");
    session.toggle("clip-9", "/audio/rain.ogg").await;
    watch_progress(&mut states, Duration::from_secs(1)).await;

    println!("--> a broken source degrades to paused, no error raised");
    session.play("clip-0", "/audio/missing.ogg").await;
    println!("    state: {:?}", session.state());

    Ok(())
}

async fn watch_progress(
    states: &mut tokio::sync::watch::Receiver<core_playback::SessionState>,
    window: Duration,
) {
    let deadline = tokio::time::Instant::now() + window;
    while tokio::time::timeout_at(deadline, states.changed()).await.is_ok() {
        let state = states.borrow().clone();
        println!(
            "    {:>6.1}s / {:>6.1}s  playing={}",
            state.current_time, state.duration, state.is_playing
        );
    }
}
