use crate::filter::PostFilter;
use crate::types::{Post, User, UserLookup};

/// Fetched posts and the author lookup table.
///
/// Built once by the initial load and only read afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataStore {
    posts: Vec<Post>,
    users: UserLookup,
}

impl DataStore {
    /// Builds a store from the fetched collections, keeping post order.
    pub fn new(posts: Vec<Post>, users: Vec<User>) -> Self {
        Self {
            posts,
            users: users.into_iter().collect(),
        }
    }

    /// All posts in fetched order
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Author lookup table
    pub fn users(&self) -> &UserLookup {
        &self.users
    }

    /// Applies `filter` to the post collection
    pub fn search(&self, filter: &PostFilter) -> Vec<&Post> {
        filter.apply(&self.posts)
    }
}
