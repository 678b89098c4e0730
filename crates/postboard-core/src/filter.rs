//! Combined search-text and author predicate.
//!
//! Filtering is a single linear pass that keeps the original order of the
//! post collection and never mutates it.

use crate::types::Post;

/// Author restriction read from the user selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserFilter {
    /// No author restriction
    #[default]
    All,
    /// Only posts owned by this user id
    User(u64),
}

impl UserFilter {
    /// Whether a post owned by `user_id` passes this restriction
    pub fn accepts(self, user_id: Option<u64>) -> bool {
        match self {
            Self::All => true,
            Self::User(wanted) => user_id == Some(wanted),
        }
    }
}

/// Filter state captured at the moment a search is triggered.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PostFilter {
    /// Search term, already lowercased
    search: String,
    /// Author restriction
    user: UserFilter,
}

impl PostFilter {
    /// Creates a filter from the raw search text and author restriction.
    pub fn new(search: &str, user: UserFilter) -> Self {
        Self {
            search: search.to_lowercase(),
            user,
        }
    }

    /// The normalized (lowercased) search term
    pub fn search(&self) -> &str {
        &self.search
    }

    /// The author restriction
    pub fn user(&self) -> UserFilter {
        self.user
    }

    /// Whether `post` satisfies both the text and author conditions.
    ///
    /// An empty search term matches every post.
    pub fn matches(&self, post: &Post) -> bool {
        let matches_search = post.title.to_lowercase().contains(&self.search)
            || post.body.to_lowercase().contains(&self.search);
        matches_search && self.user.accepts(post.user_id)
    }

    /// Returns the matching posts in their original relative order.
    pub fn apply<'posts>(&self, posts: &'posts [Post]) -> Vec<&'posts Post> {
        let matching: Vec<&Post> = posts.iter().filter(|post| self.matches(post)).collect();
        tracing::debug!(
            "Filter (search: {:?}, user: {:?}) kept {} of {} posts",
            self.search,
            self.user,
            matching.len(),
            posts.len()
        );
        matching
    }
}
