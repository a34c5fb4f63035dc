//! Observable player state
//!
//! One mutable record, two writers with a fixed field partition: the command
//! dispatcher owns the optimistic fields (current_song, looping, muted,
//! volume), the reconciler owns the authoritative fields (duration, paused,
//! progress, time). The partition is enforced at the type level — the
//! optimistic setters are crate-private and exist only for their four
//! fields, and [`StateHandle::apply_update`] is the sole writer of the other
//! four. The two writers can interleave freely because they never touch the
//! same field.

use std::sync::Arc;
use tokio::sync::watch;
use tonearm_common::events::PlayerUpdate;
use tonearm_common::types::Song;

/// UI-facing snapshot of the player
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerState {
    /// Track currently loaded; written only by `load_song`, never by updates
    pub current_song: Option<Song>,
    /// Total track length, engine time units; authoritative
    pub duration: f64,
    /// Playback position as a fraction of duration; authoritative
    pub progress: f64,
    /// Playback position in engine time units; authoritative
    pub time: f64,
    /// Whether playback is paused; authoritative
    pub paused: bool,
    /// Loop flag; optimistic
    pub looping: bool,
    /// Mute flag; optimistic
    pub muted: bool,
    /// Volume, expected range 0-100; optimistic
    pub volume: f64,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            current_song: None,
            duration: 0.0,
            progress: 0.0,
            time: 0.0,
            paused: true,
            looping: false,
            muted: false,
            volume: 50.0,
        }
    }
}

/// Shared handle over the state record
///
/// The record lives inside a watch channel: reads are cheap snapshots,
/// and subscribers are woken on every mutation. Created once per proxy and
/// mutated in place for its whole lifetime.
#[derive(Debug, Clone)]
pub struct StateHandle {
    tx: Arc<watch::Sender<PlayerState>>,
}

impl StateHandle {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(PlayerState::default());
        Self { tx: Arc::new(tx) }
    }

    /// Current state, cloned out of the record
    pub fn snapshot(&self) -> PlayerState {
        self.tx.borrow().clone()
    }

    /// Watch the record for changes
    pub fn subscribe(&self) -> watch::Receiver<PlayerState> {
        self.tx.subscribe()
    }

    pub(crate) fn set_current_song(&self, song: Song) {
        self.tx.send_modify(|state| state.current_song = Some(song));
    }

    pub(crate) fn set_looping(&self, looping: bool) {
        self.tx.send_modify(|state| state.looping = looping);
    }

    pub(crate) fn set_muted(&self, muted: bool) {
        self.tx.send_modify(|state| state.muted = muted);
    }

    pub(crate) fn set_volume(&self, volume: f64) {
        self.tx.send_modify(|state| state.volume = volume);
    }

    /// Overwrite the authoritative fields from an engine update
    ///
    /// Exactly duration, paused, progress, and time; last applied wins.
    pub(crate) fn apply_update(&self, update: &PlayerUpdate) {
        self.tx.send_modify(|state| {
            state.duration = update.duration;
            state.paused = update.paused;
            state.progress = update.progress;
            state.time = update.time;
        });
    }
}

impl Default for StateHandle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = PlayerState::default();

        assert!(state.current_song.is_none());
        assert!(state.paused);
        assert_eq!(state.volume, 50.0);
        assert!(!state.looping);
        assert!(!state.muted);
        assert_eq!(state.duration, 0.0);
        assert_eq!(state.progress, 0.0);
        assert_eq!(state.time, 0.0);
    }

    #[test]
    fn test_apply_update_writes_only_authoritative_fields() {
        let handle = StateHandle::new();
        handle.set_volume(77.0);
        handle.set_looping(true);

        handle.apply_update(&PlayerUpdate {
            duration: 180.0,
            paused: false,
            progress: 0.1,
            time: 18.0,
        });

        let state = handle.snapshot();
        assert_eq!(state.duration, 180.0);
        assert!(!state.paused);
        assert_eq!(state.progress, 0.1);
        assert_eq!(state.time, 18.0);
        // Optimistic fields untouched
        assert_eq!(state.volume, 77.0);
        assert!(state.looping);
        assert!(state.current_song.is_none());
    }

    #[test]
    fn test_optimistic_setters_write_only_their_field() {
        let handle = StateHandle::new();
        let before = handle.snapshot();

        handle.set_muted(true);

        let after = handle.snapshot();
        assert!(after.muted);
        assert_eq!(after.paused, before.paused);
        assert_eq!(after.volume, before.volume);
        assert_eq!(after.progress, before.progress);
    }

    #[tokio::test]
    async fn test_subscribers_are_notified_on_mutation() {
        let handle = StateHandle::new();
        let mut rx = handle.subscribe();

        handle.set_volume(80.0);

        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().volume, 80.0);
    }
}
