//! Command boundary to the playback engine
//!
//! One trait method per engine operation. Completion of a call means the
//! engine accepted it, not that playback state has converged; convergence
//! arrives later on the push channel.

use async_trait::async_trait;
use tonearm_common::types::{EqSettings, Song};
use tonearm_common::Result;

/// Asynchronous command surface of the remote playback engine
///
/// Implementations must tolerate concurrent outstanding calls; the proxy
/// does no client-side queuing or mutual exclusion between commands.
#[async_trait]
pub trait PlaybackEngine: Send + Sync {
    /// Load a track for playback
    async fn load_song(&self, song: &Song) -> Result<()>;

    /// Resume playback
    async fn play(&self) -> Result<()>;

    /// Pause playback
    async fn pause(&self) -> Result<()>;

    /// Toggle between playing and paused
    async fn play_pause(&self) -> Result<()>;

    /// Return to the start of the current track
    async fn rewind(&self) -> Result<()>;

    /// Enable or disable looping of the current track
    async fn set_looping(&self, looping: bool) -> Result<()>;

    /// Mute or unmute output
    async fn set_muted(&self, muted: bool) -> Result<()>;

    /// Set output volume; the engine owns the acceptable range
    async fn set_volume(&self, volume: f64) -> Result<()>;

    /// Advance to the next track
    async fn skip(&self) -> Result<()>;

    /// Jump to a percentage of the current track; range owned by the engine
    async fn skip_to(&self, percentage: f64) -> Result<()>;

    /// Replace the equalizer settings
    async fn set_eq_settings(&self, settings: &EqSettings) -> Result<()>;

    /// Seek to an absolute position in engine time units
    async fn seek(&self, position: f64) -> Result<()>;
}
