//! In-memory clip catalog and its query operations.

use crate::error::{CatalogError, Result};
use crate::models::{CatalogStats, ClipId, ClipTag, SoundClip};
use crate::seed;
use std::collections::{HashMap, HashSet};

/// Read-only catalog of sound clips.
///
/// The catalog is static input to the rest of the system: it serves lookups
/// for browsing surfaces and resolves clip ids to source urls for the
/// playback session, but never drives playback itself.
#[derive(Debug, Clone)]
pub struct Catalog {
    clips: Vec<SoundClip>,
    by_id: HashMap<ClipId, usize>,
}

impl Catalog {
    /// Build a catalog from an explicit clip set. Later duplicates of an id
    /// are ignored; the first entry wins.
    pub fn new(clips: Vec<SoundClip>) -> Self {
        let mut by_id = HashMap::with_capacity(clips.len());
        for (index, clip) in clips.iter().enumerate() {
            by_id.entry(clip.id.clone()).or_insert(index);
        }
        Self { clips, by_id }
    }

    /// The built-in demo catalog.
    pub fn seeded() -> Self {
        Self::new(seed::demo_clips())
    }

    /// Look up a clip by id.
    pub fn get(&self, id: &ClipId) -> Result<&SoundClip> {
        self.by_id
            .get(id)
            .map(|&index| &self.clips[index])
            .ok_or_else(|| CatalogError::ClipNotFound(id.to_string()))
    }

    /// All clips in catalog order.
    pub fn clips(&self) -> &[SoundClip] {
        &self.clips
    }

    /// Clips recorded in `city` (exact match).
    pub fn by_city<'a>(&'a self, city: &str) -> Vec<&'a SoundClip> {
        self.clips.iter().filter(|c| c.city == city).collect()
    }

    /// Clips carrying `tag`.
    pub fn by_tag(&self, tag: ClipTag) -> Vec<&SoundClip> {
        self.clips.iter().filter(|c| c.tag == tag).collect()
    }

    /// Case-insensitive keyword search over title, location and story.
    pub fn search<'a>(&'a self, keyword: &str) -> Vec<&'a SoundClip> {
        let needle = keyword.to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.clips
            .iter()
            .filter(|c| {
                c.title.to_lowercase().contains(&needle)
                    || c.location.to_lowercase().contains(&needle)
                    || c.story.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// The `n` clips with the highest heat, hottest first.
    pub fn hottest(&self, n: usize) -> Vec<&SoundClip> {
        let mut ranked: Vec<&SoundClip> = self.clips.iter().collect();
        ranked.sort_by(|a, b| b.heat.cmp(&a.heat));
        ranked.truncate(n);
        ranked
    }

    /// Aggregate numbers over the catalog.
    pub fn stats(&self) -> CatalogStats {
        let cities: HashSet<&str> = self.clips.iter().map(|c| c.city.as_str()).collect();
        CatalogStats {
            clip_count: self.clips.len(),
            city_count: cities.len(),
            total_plays: self.clips.iter().map(|c| c.plays).sum(),
            total_likes: self.clips.iter().map(|c| c.likes).sum(),
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seeded()
    }
}
