//! # Sound Catalog Module
//!
//! Static catalog of field recordings: the content the browsing surfaces
//! render and the source of the `(clip id, audio url)` pairs handed to the
//! playback session. The catalog is read-only input; it performs no I/O and
//! never drives playback.

pub mod catalog;
pub mod error;
pub mod models;
pub mod seed;

pub use catalog::Catalog;
pub use error::{CatalogError, Result};
pub use models::{CatalogStats, ClipId, ClipTag, GeoPoint, SoundClip};
