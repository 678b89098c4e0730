use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A blog entry as returned by the posts endpoint.
///
/// Missing `title`/`body` decode as empty text and a missing `userId`
/// decodes as `None`; records are never rejected for absent fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// API-assigned identifier
    pub id: u64,
    /// Owning user, if the record carried one
    #[serde(rename = "userId", default)]
    pub user_id: Option<u64>,
    /// Post title, rendered verbatim
    #[serde(default)]
    pub title: String,
    /// Post body text
    #[serde(default)]
    pub body: String,
}

/// An author record. Profile fields other than `name` and `email` are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier
    pub id: u64,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Contact email
    #[serde(default)]
    pub email: String,
}

/// Mapping from user id to user record.
///
/// Iteration follows first-insertion order of ids. Inserting an id that is
/// already present replaces the record but keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserLookup {
    users: HashMap<u64, User>,
    order: Vec<u64>,
}

impl UserLookup {
    /// Creates an empty lookup table
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `user` keyed by its id, overwriting any earlier record with that id
    pub fn insert(&mut self, user: User) {
        let id = user.id;
        if self.users.insert(id, user).is_none() {
            self.order.push(id);
        }
    }

    /// Looks up a user by id
    pub fn get(&self, id: u64) -> Option<&User> {
        self.users.get(&id)
    }

    /// Resolves the author of `post`, if it has one and the author is known
    pub fn author_of(&self, post: &Post) -> Option<&User> {
        post.user_id.and_then(|id| self.get(id))
    }

    /// Iterates users in first-insertion order
    pub fn iter(&self) -> impl Iterator<Item = &User> {
        self.order.iter().filter_map(|id| self.users.get(id))
    }

    /// Number of distinct user ids
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the table holds no users
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl FromIterator<User> for UserLookup {
    fn from_iter<I: IntoIterator<Item = User>>(iter: I) -> Self {
        let mut lookup = Self::new();
        for user in iter {
            lookup.insert(user);
        }
        lookup
    }
}
