//! Test data generation for scoreboard.
//!
//! This crate provides tools for generating genres, games, players, and
//! score histories to support manual verification and integration testing
//! against a development database. It is never linked into the serving path.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use test_data::prelude::*;
//!
//! let seeder = Seeder::new(pool);
//! seeder.bootstrap_schema().await?;
//! let summary = seeder.seed(&SeedConfig::default(), &mut rand::thread_rng()).await?;
//! ```

pub mod config;
pub mod db;
pub mod generators;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::SeedConfig;
    pub use crate::db::{SeedError, Seeder};
    pub use crate::generators::{
        GameGenerator, GeneratedGame, GeneratedPlayer, GeneratedScore, PlayerGenerator,
        ScoreGenerator,
    };
}
