//! Built-in demo clip set.
//!
//! A static catalog of field recordings covering every tag and a handful of
//! cities, enough to drive the browsing surfaces and the playback demo. Two
//! entries deliberately share one audio asset so alias handling in the
//! playback session is observable with seeded data alone.

use crate::models::{ClipId, ClipTag, GeoPoint, SoundClip};
use chrono::{DateTime, TimeZone, Utc};

fn recorded(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    // Seed literals are known-valid calendar dates.
    Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
}

/// The built-in demo clips.
pub fn demo_clips() -> Vec<SoundClip> {
    vec![
        SoundClip {
            id: ClipId::new("clip-4"),
            title: "Street Saxophone".to_string(),
            location: "Harbor City - Market Square".to_string(),
            city: "Harbor City".to_string(),
            tag: ClipTag::Music,
            mood: "Warm melody over passing footsteps".to_string(),
            story: "A busker plays against the evening rush; coins drop \
                    between phrases while the crowd thickens."
                .to_string(),
            equipment: "Pocket recorder".to_string(),
            duration_secs: 186.0,
            audio_url: "/audio/sax.ogg".to_string(),
            heat: 95,
            plays: 1888,
            likes: 356,
            recorded_at: recorded(2025, 2, 18, 20, 36),
            coords: GeoPoint { lat: 32.0603, lng: 118.7969 },
        },
        SoundClip {
            id: ClipId::new("clip-10"),
            title: "Night Wind on the Canal".to_string(),
            location: "Harbor City - Old Canal".to_string(),
            city: "Harbor City".to_string(),
            tag: ClipTag::Nature,
            mood: "Riverbank wind and soft water".to_string(),
            story: "Light ripples against the embankment; wind funnels \
                    through a bridge arch carrying the evening chill."
                .to_string(),
            equipment: "Phone recording".to_string(),
            duration_secs: 86.0,
            audio_url: "/audio/windbell.ogg".to_string(),
            heat: 84,
            plays: 860,
            likes: 140,
            recorded_at: recorded(2025, 2, 14, 20, 10),
            coords: GeoPoint { lat: 32.0212, lng: 118.7972 },
        },
        SoundClip {
            id: ClipId::new("clip-11"),
            title: "Old Quarter Night Market".to_string(),
            location: "Harbor City - Old Quarter".to_string(),
            city: "Harbor City".to_string(),
            tag: ClipTag::Voices,
            mood: "Stall calls over mingling chatter".to_string(),
            story: "Lanterns on, vendors calling over sizzling woks, \
                    footsteps weaving through the narrow lane."
                .to_string(),
            equipment: "Phone with windscreen".to_string(),
            duration_secs: 130.0,
            audio_url: "/audio/nightmarket.ogg".to_string(),
            heat: 90,
            plays: 1320,
            likes: 210,
            recorded_at: recorded(2025, 2, 16, 19, 30),
            coords: GeoPoint { lat: 32.0192, lng: 118.7965 },
        },
        SoundClip {
            id: ClipId::new("clip-12"),
            title: "Temple Bell at Dawn".to_string(),
            location: "Harbor City - Hillside Temple".to_string(),
            city: "Harbor City".to_string(),
            tag: ClipTag::Ambience,
            mood: "Distant bell and first birdsong".to_string(),
            story: "Morning mist still low; the bell rings long and far \
                    with birds answering from the treeline."
                .to_string(),
            equipment: "Phone recording".to_string(),
            duration_secs: 65.0,
            audio_url: "/audio/bell.ogg".to_string(),
            heat: 80,
            plays: 700,
            likes: 120,
            recorded_at: recorded(2025, 2, 9, 6, 40),
            coords: GeoPoint { lat: 32.0567, lng: 118.7979 },
        },
        SoundClip {
            id: ClipId::new("clip-15"),
            title: "Tram Crossing Bell".to_string(),
            location: "Lakeside - Depot Junction".to_string(),
            city: "Lakeside".to_string(),
            tag: ClipTag::Transit,
            mood: "Crossing bell and steel on rails".to_string(),
            story: "The old line's crossing bell starts early; a tram \
                    grinds through the junction and fades uphill."
                .to_string(),
            equipment: "Stereo field recorder".to_string(),
            duration_secs: 74.0,
            audio_url: "/audio/tram.ogg".to_string(),
            heat: 76,
            plays: 540,
            likes: 98,
            recorded_at: recorded(2025, 1, 28, 8, 5),
            coords: GeoPoint { lat: 30.2489, lng: 120.1552 },
        },
        SoundClip {
            id: ClipId::new("clip-16"),
            title: "Rain on the Arcade Roof".to_string(),
            location: "Lakeside - Covered Arcade".to_string(),
            city: "Lakeside".to_string(),
            tag: ClipTag::Nature,
            mood: "Steady rain on glass and tile".to_string(),
            story: "A downpour caught from under the arcade; gutters \
                    overflow somewhere behind the shops."
                .to_string(),
            equipment: "Pocket recorder".to_string(),
            duration_secs: 152.0,
            audio_url: "/audio/rain.ogg".to_string(),
            heat: 88,
            plays: 1104,
            likes: 244,
            recorded_at: recorded(2025, 2, 2, 16, 22),
            coords: GeoPoint { lat: 30.2521, lng: 120.1614 },
        },
        // Same physical asset as clip-4: the market square mix also opens
        // the "city music" route. The playback session treats this as an
        // alias and keeps playing without a restart.
        SoundClip {
            id: ClipId::new("route-1-opener"),
            title: "City Music Route - Opener".to_string(),
            location: "Harbor City - Market Square".to_string(),
            city: "Harbor City".to_string(),
            tag: ClipTag::Music,
            mood: "Warm melody over passing footsteps".to_string(),
            story: "Opening stop of the city music walking route.".to_string(),
            equipment: "Pocket recorder".to_string(),
            duration_secs: 186.0,
            audio_url: "/audio/sax.ogg".to_string(),
            heat: 70,
            plays: 310,
            likes: 44,
            recorded_at: recorded(2025, 2, 18, 20, 36),
            coords: GeoPoint { lat: 32.0603, lng: 118.7969 },
        },
        SoundClip {
            id: ClipId::new("clip-20"),
            title: "Campus Radio at Noon".to_string(),
            location: "Lakeside - University Lawn".to_string(),
            city: "Lakeside".to_string(),
            tag: ClipTag::Voices,
            mood: "Lunchtime broadcast over lawn chatter".to_string(),
            story: "The midday campus broadcast drifts over students on \
                    the lawn, bicycles ticking past on the path."
                .to_string(),
            equipment: "Phone recording".to_string(),
            duration_secs: 118.0,
            audio_url: "/audio/campus.ogg".to_string(),
            heat: 72,
            plays: 466,
            likes: 81,
            recorded_at: recorded(2025, 2, 21, 12, 10),
            coords: GeoPoint { lat: 30.2641, lng: 120.1201 },
        },
    ]
}
