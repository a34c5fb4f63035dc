//! The player proxy: command dispatch plus state reconciliation
//!
//! Construction subscribes once to the push-update bus and spawns the
//! reconciler task; the subscription lives until [`PlayerProxy::shutdown`]
//! or drop. Commands are fire-and-forget with respect to the state model: a
//! rejected command is reported to the caller but any optimistic write it
//! already made stays in place, and the engine's next push update is the
//! correction channel.
//!
//! Concurrent in-flight commands are not serialized; two rapid calls may
//! resolve in either order and the engine sees them as independent requests.

use crate::engine::PlaybackEngine;
use crate::state::{PlayerState, StateHandle};
use std::sync::Arc;
use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;
use tonearm_common::events::{PlayerUpdate, UpdateBus};
use tonearm_common::types::{EqSettings, Song};
use tonearm_common::Result;
use tracing::{debug, warn};

/// Reactive proxy over a remote playback engine
pub struct PlayerProxy {
    engine: Arc<dyn PlaybackEngine>,
    state: StateHandle,
    reconciler: JoinHandle<()>,
}

impl PlayerProxy {
    /// Create the proxy and subscribe to the push channel
    pub fn new(engine: Arc<dyn PlaybackEngine>, updates: &UpdateBus) -> Self {
        let state = StateHandle::new();
        let reconciler = spawn_reconciler(state.clone(), updates.subscribe());
        Self {
            engine,
            state,
            reconciler,
        }
    }

    /// Current state snapshot
    pub fn state(&self) -> PlayerState {
        self.state.snapshot()
    }

    /// Watch the state record for changes
    pub fn subscribe(&self) -> watch::Receiver<PlayerState> {
        self.state.subscribe()
    }

    /// Load a track
    ///
    /// The song identity is reflected locally before the engine confirms;
    /// push updates never rewrite it.
    pub async fn load_song(&self, song: Song) -> Result<()> {
        self.state.set_current_song(song.clone());
        self.engine.load_song(&song).await
    }

    /// Resume playback
    ///
    /// `paused` is not written locally; it flips when the next push update
    /// reports the engine's actual state, avoiding a visible rollback if
    /// the engine refuses.
    pub async fn play(&self) -> Result<()> {
        self.engine.play().await
    }

    /// Pause playback; see [`PlayerProxy::play`] for the `paused` contract
    pub async fn pause(&self) -> Result<()> {
        self.engine.pause().await
    }

    /// Toggle between playing and paused
    pub async fn play_pause(&self) -> Result<()> {
        self.engine.play_pause().await
    }

    /// Return to the start of the current track
    pub async fn rewind(&self) -> Result<()> {
        self.engine.rewind().await
    }

    /// Enable or disable looping; reflected locally before the call resolves
    pub async fn set_looping(&self, looping: bool) -> Result<()> {
        self.state.set_looping(looping);
        self.engine.set_looping(looping).await
    }

    /// Mute or unmute; reflected locally before the call resolves
    pub async fn set_muted(&self, muted: bool) -> Result<()> {
        self.state.set_muted(muted);
        self.engine.set_muted(muted).await
    }

    /// Set volume; reflected locally before the call resolves
    ///
    /// The expected range is 0-100 but is not validated here; the engine is
    /// the authority on acceptable values.
    pub async fn set_volume(&self, volume: f64) -> Result<()> {
        self.state.set_volume(volume);
        self.engine.set_volume(volume).await
    }

    /// Advance to the next track
    pub async fn skip(&self) -> Result<()> {
        self.engine.skip().await
    }

    /// Jump to a percentage of the current track; forwarded unvalidated
    pub async fn skip_to(&self, percentage: f64) -> Result<()> {
        self.engine.skip_to(percentage).await
    }

    /// Replace the equalizer settings; opaque to the proxy
    pub async fn set_eq_settings(&self, settings: EqSettings) -> Result<()> {
        self.engine.set_eq_settings(&settings).await
    }

    /// Seek to an absolute position
    ///
    /// `progress` and `time` do not move locally; the new position becomes
    /// visible with the next push update.
    pub async fn seek(&self, position: f64) -> Result<()> {
        self.engine.seek(position).await
    }

    /// Stop applying push updates
    ///
    /// Teardown hook for tests and embedding applications; a long-lived
    /// proxy normally keeps its subscription for the life of the process.
    pub fn shutdown(&self) {
        self.reconciler.abort();
    }
}

impl Drop for PlayerProxy {
    fn drop(&mut self) {
        self.reconciler.abort();
    }
}

/// Reconciler task: apply updates in order of receipt, last applied wins
fn spawn_reconciler(
    state: StateHandle,
    mut rx: broadcast::Receiver<PlayerUpdate>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            match rx.recv().await {
                Ok(update) => {
                    debug!(?update, "Applying player update");
                    state.apply_update(&update);
                }
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    warn!(skipped, "Update stream lagged; resuming with newest messages");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    debug!("Update stream closed; reconciler exiting");
                    break;
                }
            }
        }
    })
}
