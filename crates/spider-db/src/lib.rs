//! Typed MongoDB layer for the spider platform.
//!
//! This crate provides the document types stored by the platform's scrapers,
//! the connection configuration for the development database, and small
//! helpers for provisioning collections.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use spider_db::{DbConfig, connect, ensure_collection, PAGES_COLLECTION};
//!
//! let config = DbConfig::from_env();
//! let db = connect(&config).await?;
//! ensure_collection(&db, PAGES_COLLECTION).await?;
//! ```

pub mod config;
pub mod db;
pub mod errors;
pub mod models;

pub use config::DbConfig;
pub use db::{connect, ensure_collection};
pub use errors::DbError;
pub use models::{JOBS_COLLECTION, PAGES_COLLECTION, PageRecord, PageUrl};
