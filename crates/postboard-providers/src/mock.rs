//! Scripted source for testing the load sequence.
//!
//! Each collection can be given canned records, a failure, or a delay,
//! so the controller can be exercised without network access.

use async_trait::async_trait;
use postboard_core::{Error, Post, PostSource, Resource, Result, User};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::time::sleep;

/// Canned outcome for one collection.
#[derive(Clone)]
enum Outcome<T> {
    Records(Vec<T>),
    Failure(String),
}

/// Scripted behaviour for one collection.
#[derive(Clone)]
struct Script<T> {
    outcome: Outcome<T>,
    delay: Option<Duration>,
}

impl<T: Clone> Script<T> {
    fn empty() -> Self {
        Self {
            outcome: Outcome::Records(Vec::new()),
            delay: None,
        }
    }

    async fn play(&self, resource: Resource) -> Result<Vec<T>> {
        if let Some(delay) = self.delay {
            sleep(delay).await;
        }
        match &self.outcome {
            Outcome::Records(records) => Ok(records.clone()),
            Outcome::Failure(reason) => Err(Error::load_failure(resource, reason)),
        }
    }
}

fn lock_ignore_poison<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Source returning pre-defined collections.
#[derive(Clone)]
pub struct MockSource {
    posts: Script<Post>,
    users: Script<User>,
    /// Call history for verification
    call_history: Arc<Mutex<Vec<Resource>>>,
}

impl Default for MockSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSource {
    /// Create a mock source whose collections are both empty.
    #[must_use]
    pub fn new() -> Self {
        Self {
            posts: Script::empty(),
            users: Script::empty(),
            call_history: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Serve `posts` from the posts collection.
    #[must_use]
    pub fn with_posts(mut self, posts: Vec<Post>) -> Self {
        self.posts.outcome = Outcome::Records(posts);
        self
    }

    /// Serve `users` from the users collection.
    #[must_use]
    pub fn with_users(mut self, users: Vec<User>) -> Self {
        self.users.outcome = Outcome::Records(users);
        self
    }

    /// Make the posts fetch fail with `reason`.
    #[must_use]
    pub fn failing_posts(mut self, reason: impl Into<String>) -> Self {
        self.posts.outcome = Outcome::Failure(reason.into());
        self
    }

    /// Make the users fetch fail with `reason`.
    #[must_use]
    pub fn failing_users(mut self, reason: impl Into<String>) -> Self {
        self.users.outcome = Outcome::Failure(reason.into());
        self
    }

    /// Delay the posts fetch by `delay` before it resolves.
    #[must_use]
    pub fn with_posts_delay(mut self, delay: Duration) -> Self {
        self.posts.delay = Some(delay);
        self
    }

    /// Delay the users fetch by `delay` before it resolves.
    #[must_use]
    pub fn with_users_delay(mut self, delay: Duration) -> Self {
        self.users.delay = Some(delay);
        self
    }

    /// Collections requested so far, in call order.
    #[must_use]
    pub fn get_call_history(&self) -> Vec<Resource> {
        lock_ignore_poison(&self.call_history).clone()
    }

    /// Number of fetches made.
    #[must_use]
    pub fn call_count(&self) -> usize {
        lock_ignore_poison(&self.call_history).len()
    }

    fn record(&self, resource: Resource) {
        lock_ignore_poison(&self.call_history).push(resource);
    }
}

#[async_trait]
impl PostSource for MockSource {
    fn name(&self) -> &str {
        "mock"
    }

    async fn fetch_posts(&self) -> Result<Vec<Post>> {
        self.record(Resource::Posts);
        self.posts.play(Resource::Posts).await
    }

    async fn fetch_users(&self) -> Result<Vec<User>> {
        self.record(Resource::Users);
        self.users.play(Resource::Users).await
    }
}
