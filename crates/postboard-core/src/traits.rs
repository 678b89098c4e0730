use async_trait::async_trait;

use crate::{Post, Result, User};

/// A read-only source of the post and user collections.
#[async_trait]
pub trait PostSource: Send + Sync {
    /// Returns a short identifier for this source, used in log lines.
    fn name(&self) -> &str;

    /// Fetches the full post collection.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::LoadFailure`] if the request fails, the
    /// server answers with a non-success status or the body cannot be decoded.
    async fn fetch_posts(&self) -> Result<Vec<Post>>;

    /// Fetches the full user collection.
    ///
    /// # Errors
    ///
    /// Same failure policy as [`PostSource::fetch_posts`].
    async fn fetch_users(&self) -> Result<Vec<User>>;
}
