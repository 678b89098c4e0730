use async_trait::async_trait;
use postboard_core::{ApiConfig, Error, Post, PostSource, Resource, Result, User};
use reqwest::Client;
use serde::de::DeserializeOwned;

/// Source reading both collections from a JSON REST API.
pub struct HttpSource {
    /// HTTP client for API requests.
    client: Client,
    /// Full URL of the posts collection.
    posts_url: String,
    /// Full URL of the users collection.
    users_url: String,
}

impl HttpSource {
    /// Creates a source for the endpoints described by `api`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(api: &ApiConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = api.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        Ok(Self {
            client,
            posts_url: api.posts_url(),
            users_url: api.users_url(),
        })
    }

    /// URL the posts are read from
    pub fn posts_url(&self) -> &str {
        &self.posts_url
    }

    /// URL the users are read from
    pub fn users_url(&self) -> &str {
        &self.users_url
    }

    /// GETs `url` and decodes the body as a JSON array of `T`.
    async fn fetch_collection<T: DeserializeOwned>(
        &self,
        resource: Resource,
        url: &str,
    ) -> Result<Vec<T>> {
        tracing::info!("Fetching {} from {url}", resource.label());

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| Error::load_failure(resource, err))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::load_failure(
                resource,
                format!("server answered {status}"),
            ));
        }

        let records: Vec<T> = response
            .json()
            .await
            .map_err(|err| Error::load_failure(resource, err))?;

        tracing::info!("Fetched {} {}", records.len(), resource.label());
        Ok(records)
    }
}

#[async_trait]
impl PostSource for HttpSource {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch_posts(&self) -> Result<Vec<Post>> {
        self.fetch_collection(Resource::Posts, &self.posts_url)
            .await
    }

    async fn fetch_users(&self) -> Result<Vec<User>> {
        self.fetch_collection(Resource::Users, &self.users_url)
            .await
    }
}
