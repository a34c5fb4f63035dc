//! # Tonearm Common Library
//!
//! Shared code for the tonearm player proxy:
//! - Error types
//! - Push-update payload and update bus
//! - Opaque domain values (Song, EqSettings)
//! - Configuration loading

pub mod config;
pub mod error;
pub mod events;
pub mod types;

pub use error::{Error, Result};
