//! Document types stored in the spider development database.

use chrono::{DateTime, Utc};
use mongodb::bson::{Document, doc};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::errors::DbError;

/// Collection holding scraped page documents.
pub const PAGES_COLLECTION: &str = "test";

/// Collection reserved for job-tracking records. No document type is
/// defined here; its schema belongs to the job services.
pub const JOBS_COLLECTION: &str = "jobs";

/// Address of a scraped page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageUrl {
    /// Full address, e.g. `http://www.baidu.com`.
    pub url: String,
    /// Host portion, e.g. `baidu.com`.
    pub domain: String,
}

/// A scraped page as stored in the `test` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageRecord {
    pub url: PageUrl,
    /// Raw markup, unbounded length.
    pub html: String,
    /// Ingestion timestamp. Stored as the fixed-width string `YYYYMMDDHHmm`
    /// that the rest of the platform expects.
    #[serde(with = "compact_dt")]
    pub create_dt: DateTime<Utc>,
    /// Identifier of the crawl job that produced this page. Never empty.
    pub job_id: String,
    /// Extracted keywords; empty until a downstream service fills them in.
    pub keywords: Vec<String>,
}

impl PageRecord {
    /// Checks the invariants the database itself does not enforce.
    pub fn validate(&self) -> Result<(), DbError> {
        if self.job_id.is_empty() {
            return Err(DbError::InvalidRecord(format!(
                "page {:?} has an empty job_id",
                self.url.url
            )));
        }
        Url::parse(&self.url.url)
            .map_err(|e| DbError::InvalidRecord(format!("invalid url {:?}: {e}", self.url.url)))?;
        Ok(())
    }

    /// Filter matching this record's natural key, used for upserts.
    pub fn key_filter(&self) -> Document {
        doc! { "url.url": &self.url.url, "job_id": &self.job_id }
    }
}

/// Serde adapter for the platform's compact timestamp format.
pub mod compact_dt {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub const FORMAT: &str = "%Y%m%d%H%M";

    pub fn serialize<S>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&dt.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&s, FORMAT)
            .map(|naive| naive.and_utc())
            .map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record() -> PageRecord {
        PageRecord {
            url: PageUrl {
                url: "http://www.baidu.com".to_string(),
                domain: "baidu.com".to_string(),
            },
            html: "<p>foo</p>".to_string(),
            create_dt: Utc.with_ymd_and_hms(2021, 5, 27, 19, 0, 0).unwrap(),
            job_id: "1".to_string(),
            keywords: vec![],
        }
    }

    #[test]
    fn test_create_dt_wire_format() {
        let value = serde_json::to_value(record()).unwrap();
        assert_eq!(value["create_dt"], "202105271900");
        assert_eq!(value["url"]["domain"], "baidu.com");
        assert!(value["keywords"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_create_dt_roundtrip() {
        let json = serde_json::to_string(&record()).unwrap();
        let parsed: PageRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.create_dt, record().create_dt);
        assert_eq!(parsed.url, record().url);
    }

    #[test]
    fn test_create_dt_rejects_malformed() {
        let result: Result<PageRecord, _> = serde_json::from_value(serde_json::json!({
            "url": { "url": "http://www.baidu.com", "domain": "baidu.com" },
            "html": "<p>foo</p>",
            "create_dt": "2021-05-27T19:00",
            "job_id": "1",
            "keywords": [],
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_accepts_seed_record() {
        assert!(record().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_job_id() {
        let mut page = record();
        page.job_id.clear();
        assert!(matches!(page.validate(), Err(DbError::InvalidRecord(_))));
    }

    #[test]
    fn test_validate_rejects_malformed_url() {
        let mut page = record();
        page.url.url = "not a url".to_string();
        assert!(matches!(page.validate(), Err(DbError::InvalidRecord(_))));
    }

    #[test]
    fn test_key_filter_uses_natural_key() {
        let filter = record().key_filter();
        assert_eq!(
            filter.get_str("url.url").unwrap(),
            "http://www.baidu.com"
        );
        assert_eq!(filter.get_str("job_id").unwrap(), "1");
    }
}
