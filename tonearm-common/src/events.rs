//! Push-update channel types
//!
//! The engine reports authoritative playback status on a single named push
//! channel. The transport layer deserializes each message into a
//! [`PlayerUpdate`] and feeds it to an [`UpdateBus`]; the proxy's reconciler
//! subscribes once and applies messages in order of receipt.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Name of the push channel the engine publishes status on
pub const PLAYER_UPDATE_CHANNEL: &str = "player-update";

/// Periodic status message from the engine
///
/// Exactly the four fields the engine is authoritative for. A message
/// missing any of them fails deserialization at the transport edge and is
/// never applied to the state record. Unknown extra fields are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerUpdate {
    /// Total track length, engine time units
    pub duration: f64,
    /// Whether the engine is paused
    pub paused: bool,
    /// Playback position as a fraction of duration
    pub progress: f64,
    /// Playback position in engine time units
    pub time: f64,
}

/// Fan-out bus for push updates
///
/// Backed by tokio::broadcast: non-blocking publish, multiple concurrent
/// subscribers, lagged-message detection for slow consumers. The transport
/// layer publishes; each proxy subscribes exactly once at construction.
#[derive(Clone)]
pub struct UpdateBus {
    tx: broadcast::Sender<PlayerUpdate>,
    capacity: usize,
}

impl UpdateBus {
    /// Create a bus buffering up to `capacity` updates per subscriber
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx, capacity }
    }

    /// Subscribe to all future updates
    ///
    /// Updates published before subscription are not received.
    pub fn subscribe(&self) -> broadcast::Receiver<PlayerUpdate> {
        self.tx.subscribe()
    }

    /// Publish an update, ignoring whether anyone is listening
    ///
    /// Status updates are periodic; a missed message is superseded by the
    /// next one, so there is no error path here.
    pub fn publish(&self, update: PlayerUpdate) {
        let _ = self.tx.send(update);
    }

    /// Current number of active subscribers
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }

    /// Configured channel capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
