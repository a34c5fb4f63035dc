//! # Tonearm Client
//!
//! Reactive client-side proxy for a remote audio playback engine. The engine
//! owns true playback state and is reachable only through an asynchronous
//! command boundary plus a periodic push-update stream; this crate lets a UI
//! read player state through an observable record and mutate it by issuing
//! commands whose effects are confirmed later by the push stream.
//!
//! Two cooperating responsibilities:
//! - **Command dispatch** ([`PlayerProxy`] methods): each user intent becomes
//!   exactly one outbound engine call, with an optimistic local write for the
//!   fields the push stream never echoes (song identity, loop, mute, volume).
//! - **State reconciliation** (background task): push updates overwrite the
//!   fields the engine is authoritative for (duration, paused, progress,
//!   time) and nothing else.

pub mod engine;
pub mod http;
pub mod proxy;
pub mod state;

pub use engine::PlaybackEngine;
pub use http::HttpEngine;
pub use proxy::PlayerProxy;
pub use state::{PlayerState, StateHandle};
