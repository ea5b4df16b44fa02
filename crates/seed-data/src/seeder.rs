//! Database seeding for the spider development environment.

use mongodb::Database;
use mongodb::options::ReplaceOptions;
use tracing::info;

use spider_db::{DbError, JOBS_COLLECTION, PAGES_COLLECTION, PageRecord, ensure_collection};

/// Outcome of a seeding run.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeedSummary {
    /// Pages inserted for the first time.
    pub created: usize,
    /// Pages that already existed and were replaced in place.
    pub replaced: usize,
}

/// Provisions collections and inserts baseline records for one run.
pub struct Seeder {
    db: Database,
}

impl Seeder {
    /// Creates a seeder bound to the given database handle.
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Ensures the page and job collections exist. Both are uncapped; no
    /// indexes are created since downstream index needs are unspecified.
    pub async fn ensure_collections(&self) -> Result<(), DbError> {
        ensure_collection(&self.db, PAGES_COLLECTION).await?;
        ensure_collection(&self.db, JOBS_COLLECTION).await?;
        Ok(())
    }

    /// Upserts pages by their (`url.url`, `job_id`) natural key. All records
    /// are validated before the first write so a bad fixture leaves the
    /// database untouched.
    pub async fn seed_pages(&self, pages: &[PageRecord]) -> Result<SeedSummary, DbError> {
        for page in pages {
            page.validate()?;
        }

        info!("Seeding {} pages...", pages.len());

        let collection = self.db.collection::<PageRecord>(PAGES_COLLECTION);
        let options = ReplaceOptions::builder().upsert(true).build();
        let mut summary = SeedSummary::default();

        for page in pages {
            let result = collection
                .replace_one(page.key_filter(), page, options.clone())
                .await?;
            if result.upserted_id.is_some() {
                summary.created += 1;
            } else {
                summary.replaced += 1;
            }
        }

        info!(
            "Seeded {} pages ({} created, {} already present)",
            pages.len(),
            summary.created,
            summary.replaced
        );
        Ok(summary)
    }

    /// Full provisioning run: ensure collections, then seed pages.
    pub async fn run(&self, pages: &[PageRecord]) -> Result<SeedSummary, DbError> {
        self.ensure_collections().await?;
        self.seed_pages(pages).await
    }
}
