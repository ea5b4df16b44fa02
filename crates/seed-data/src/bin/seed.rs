//! Seeds the development database with baseline scraped pages.
//!
//! Run with:
//! ```
//! cargo run -p seed-data --bin seed
//! ```
//!
//! Connection settings come from `MONGO_HOST`, `MONGO_PORT`, `MONGO_DB`,
//! `MONGO_USERNAME`, and `MONGO_PASSWORD`, defaulting to an unauthenticated
//! local instance. Safe to re-run: seeding is idempotent.

use seed_data::{Seeder, fixtures};
use spider_db::{DbConfig, connect};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = DbConfig::from_env();
    let db = connect(&config).await?;

    tracing::info!("Connected to database '{}'", config.database);

    let pages = fixtures::sample_pages();
    let summary = Seeder::new(db).run(&pages).await?;

    tracing::info!("Seed completed!");
    tracing::info!("  Pages created: {}", summary.created);
    tracing::info!("  Pages already present: {}", summary.replaced);

    Ok(())
}
