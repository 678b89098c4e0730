use postboard_core::{DataStore, PostSource, Result};
use std::sync::Arc;
use tokio::try_join;

/// Runs the initial load against a [`PostSource`].
#[derive(Clone)]
pub struct Gateway {
    source: Arc<dyn PostSource>,
}

impl Gateway {
    /// Creates a gateway reading from `source`.
    pub fn new(source: Arc<dyn PostSource>) -> Self {
        Self { source }
    }

    /// Name of the underlying source
    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    /// Fetches posts and users concurrently and builds the data store.
    ///
    /// Both fetches must succeed; the first failure is returned and no
    /// partial store is produced. There is no retry.
    ///
    /// # Errors
    ///
    /// Returns the first [`postboard_core::Error::LoadFailure`] raised by either fetch.
    pub async fn load(&self) -> Result<DataStore> {
        tracing::info!("Loading posts and users from {} source", self.source_name());

        let (posts, users) = try_join!(self.source.fetch_posts(), self.source.fetch_users())
            .inspect_err(|error| tracing::error!("Initial load failed: {error}"))?;

        tracing::info!("Loaded {} posts and {} users", posts.len(), users.len());
        Ok(DataStore::new(posts, users))
    }
}
