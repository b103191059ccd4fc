//! Entity generators for test data.
//!
//! This module provides generators for creating realistic test entities:
//! - [`PlayerGenerator`]: Generate players with account ages on both sides
//!   of the 30-day recency window
//! - [`GameGenerator`]: Generate genres and game titles
//! - [`ScoreGenerator`]: Generate per-player score histories

pub mod games;
pub mod players;
pub mod scores;

pub use games::{GameGenerator, GeneratedGame};
pub use players::{GeneratedPlayer, PlayerGenerator};
pub use scores::{GeneratedScore, ScoreGenerator};
