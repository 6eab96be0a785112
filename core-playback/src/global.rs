//! Process-wide session accessor.
//!
//! The session is designed to exist once per process: one channel, one
//! controller, alive until the process ends. Hosts install their configured
//! instance here so every UI surface reaches the same one, while tests keep
//! constructing isolated sessions directly and never touch the global.

use crate::session::PlaybackSession;
use std::sync::{Arc, OnceLock};

static SESSION: OnceLock<Arc<PlaybackSession>> = OnceLock::new();

/// Install the process-wide session. Returns the rejected instance when one
/// is already installed; installation happens at most once.
pub fn install(session: Arc<PlaybackSession>) -> Result<(), Arc<PlaybackSession>> {
    SESSION.set(session)
}

/// The installed process-wide session, if any.
pub fn current() -> Option<Arc<PlaybackSession>> {
    SESSION.get().cloned()
}
