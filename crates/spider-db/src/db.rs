//! Connection and collection provisioning helpers.

use std::time::Duration;

use mongodb::options::ClientOptions;
use mongodb::{Client, Database};
use tracing::{debug, info};

use crate::config::DbConfig;
use crate::errors::DbError;

/// Connects to the configured MongoDB instance and returns a handle to the
/// configured database. The handle releases the connection when dropped;
/// nothing is held in global state.
pub async fn connect(config: &DbConfig) -> Result<Database, DbError> {
    let mut options = ClientOptions::parse(config.uri()).await?;
    options.app_name = Some("spider-seed".to_string());
    // Fail fast when the server is unreachable instead of the driver's
    // 30 second default.
    options.server_selection_timeout = Some(Duration::from_secs(5));

    let client = Client::with_options(options)?;
    debug!("Connecting to {}:{}", config.host, config.port);

    Ok(client.database(&config.database))
}

/// Creates the named uncapped collection if it does not already exist.
/// Returns `true` when the collection was created by this call.
pub async fn ensure_collection(db: &Database, name: &str) -> Result<bool, DbError> {
    let existing = db.list_collection_names(None).await?;
    if existing.iter().any(|c| c == name) {
        debug!("Collection '{name}' already exists");
        return Ok(false);
    }

    db.create_collection(name, None).await?;
    info!("Created collection '{name}'");
    Ok(true)
}
