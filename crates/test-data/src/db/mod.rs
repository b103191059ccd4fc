//! Database integration for seeding test data.
//!
//! The [`Seeder`] bootstraps the consumed schema shape on an empty
//! development database and inserts generated rows.

mod seeder;

pub use seeder::{SeedError, SeedSummary, Seeder};
