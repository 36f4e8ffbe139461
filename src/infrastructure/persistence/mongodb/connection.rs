//! MongoDB connection management

use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Database, IndexModel};
use std::sync::Arc;
use std::time::Duration;

/// Applies to both initial connection and server selection.
const CONNECTION_TIMEOUT: Duration = Duration::from_secs(3);

pub const ACCOUNTS_COLLECTION: &str = "accounts";
pub const COUNTERS_COLLECTION: &str = "counters";

pub struct MongoConnection {
    database: Database,
}

impl MongoConnection {
    /// Connect and ping `db_name`.
    ///
    /// # Errors
    /// Returns an error if the URI is invalid or the server cannot be reached
    /// within [`CONNECTION_TIMEOUT`].
    pub async fn new(uri: &str, db_name: &str) -> anyhow::Result<Self> {
        let mut options = ClientOptions::parse(uri).await?;
        options.connect_timeout = Some(CONNECTION_TIMEOUT);
        options.server_selection_timeout = Some(CONNECTION_TIMEOUT);

        let client = Client::with_options(options)?;
        let database = client.database(db_name);

        database.run_command(doc! { "ping": 1 }).await?;

        tracing::info!("Connected to MongoDB: {}", db_name);

        Ok(Self { database })
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> mongodb::Collection<T> {
        self.database.collection(name)
    }

    /// Secondary index backing `find_by_type`.
    async fn ensure_indexes(&self) -> anyhow::Result<()> {
        let index = IndexModel::builder().keys(doc! { "type": 1 }).build();
        self.collection::<mongodb::bson::Document>(ACCOUNTS_COLLECTION)
            .create_index(index)
            .await?;
        Ok(())
    }
}

/// Connect, create indexes and return a shared reference.
pub async fn init_mongodb(uri: &str, db_name: &str) -> anyhow::Result<Arc<MongoConnection>> {
    let conn = MongoConnection::new(uri, db_name).await?;
    conn.ensure_indexes().await?;
    Ok(Arc::new(conn))
}
