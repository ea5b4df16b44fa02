//! Development-database seeding for the spider platform.
//!
//! Provisions the `test` and `jobs` collections in the development MongoDB
//! instance and inserts a fixed baseline of scraped pages. Seeding is
//! idempotent: collections are only created when absent, and pages are
//! upserted by their natural key, so repeated runs converge to the same
//! state instead of accumulating duplicates.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use seed_data::{Seeder, fixtures};
//! use spider_db::{DbConfig, connect};
//!
//! let db = connect(&DbConfig::from_env()).await?;
//! let summary = Seeder::new(db).run(&fixtures::sample_pages()).await?;
//! ```

pub mod fixtures;
pub mod seeder;

pub use seeder::{SeedSummary, Seeder};
