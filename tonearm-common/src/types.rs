//! Opaque domain values passed through to the playback engine
//!
//! The proxy never interprets these beyond equality; they travel to the
//! engine unmodified.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Identifies a playable track
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Song {
    /// Track UUID in the library
    pub id: Uuid,
    /// Display title
    pub title: String,
    /// Display artist
    pub artist: String,
    /// Track length in milliseconds as known by the library
    pub duration_ms: u64,
}

/// Engine-defined equalizer settings
///
/// Band label to gain value, schema owned entirely by the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EqSettings {
    pub values: HashMap<String, String>,
}
