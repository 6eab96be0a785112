//! Domain models for the sound catalog.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a catalog clip.
///
/// Opaque logical key, independent of the physical source url: two ids may
/// resolve to the same underlying asset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClipId(pub String);

impl ClipId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ClipId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Category of a field recording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClipTag {
    Music,
    Nature,
    Voices,
    Ambience,
    Transit,
}

/// Geographic location of a recording.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// A catalogued field recording.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoundClip {
    /// Logical catalog id.
    pub id: ClipId,
    /// Display title.
    pub title: String,
    /// Human-readable spot, e.g. "Riverside Old Town".
    pub location: String,
    /// City the recording was captured in.
    pub city: String,
    /// Category tag.
    pub tag: ClipTag,
    /// One-line mood description.
    pub mood: String,
    /// Longer capture note.
    pub story: String,
    /// Gear used for the capture.
    pub equipment: String,
    /// Clip length in seconds.
    pub duration_secs: f64,
    /// Resolved source locator handed to the playback session.
    pub audio_url: String,
    /// Popularity score used for the "hottest" ranking.
    pub heat: u32,
    /// Total play count.
    pub plays: u64,
    /// Total like count.
    pub likes: u64,
    /// When the clip was recorded.
    pub recorded_at: DateTime<Utc>,
    /// Capture location.
    pub coords: GeoPoint,
}

/// Aggregate numbers over the whole catalog, rendered on landing surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStats {
    pub clip_count: usize,
    pub city_count: usize,
    pub total_plays: u64,
    pub total_likes: u64,
}
