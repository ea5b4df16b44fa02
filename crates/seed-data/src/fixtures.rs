//! Baseline page fixtures for the development database.
//!
//! These are the literal records the platform's services expect to find in a
//! freshly provisioned environment, misspellings included.

use chrono::{TimeZone, Utc};
use spider_db::{PageRecord, PageUrl};

fn page(url: &str, domain: &str, html: &str, minute: u32) -> PageRecord {
    PageRecord {
        url: PageUrl {
            url: url.to_string(),
            domain: domain.to_string(),
        },
        html: html.to_string(),
        create_dt: Utc.with_ymd_and_hms(2021, 5, 27, 19, minute, 0).unwrap(),
        job_id: "1".to_string(),
        keywords: vec![],
    }
}

/// The four sample pages seeded into the `test` collection.
pub fn sample_pages() -> Vec<PageRecord> {
    vec![
        page("http://www.baidu.com", "baidu.com", "<p>foo</p>", 0),
        page("http://www.news.com", "news.com", "<p>news</p>", 1),
        page("http://www.nytimes.com", "nytimes.com", "<p>breaking news</p>", 2),
        page("http://www.washintonpost.com", "washintonpost.com", "<p>usa</p>", 2),
    ]
}
