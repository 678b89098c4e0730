//! Pure mapping from posts to card view models.
//!
//! Nothing here touches the terminal: the output is plain data that the
//! renderer draws and tests inspect directly.

use postboard_core::{Post, UserFilter, UserLookup};
use std::borrow::Cow;

/// Maximum number of body characters shown on a card
pub const PREVIEW_CHAR_LIMIT: usize = 150;
/// Marker appended to a truncated body
pub const ELLIPSIS: &str = "...";
/// Author label used when a post's user is not in the lookup table
pub const UNKNOWN_AUTHOR: &str = "Usuario desconocido";
/// Label of the selector option that disables the author filter
pub const ALL_USERS_LABEL: &str = "Todos los usuarios";

/// Display data for a single post card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostCard {
    /// Resolved author name, or [`UNKNOWN_AUTHOR`]
    pub author_name: String,
    /// Resolved author email, empty when the author is unknown
    pub author_email: String,
    /// Post id prefixed with `#`
    pub id_label: String,
    /// Post title, verbatim
    pub title: String,
    /// Body preview, truncated to [`PREVIEW_CHAR_LIMIT`] characters
    pub preview: String,
}

/// Result of rendering a post subset.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PostView {
    /// Nothing matched: the grid is hidden and the no-results panel shown
    #[default]
    Empty,
    /// Cards to show in the grid, in input order
    Cards(Vec<PostCard>),
}

impl PostView {
    /// Cards in this view (empty slice for [`PostView::Empty`])
    pub fn cards(&self) -> &[PostCard] {
        match self {
            Self::Empty => &[],
            Self::Cards(cards) => cards,
        }
    }

    /// Whether this is the empty state
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// One entry of the author selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserOption {
    /// Text shown in the selector
    pub label: String,
    /// Filter applied when this option is selected
    pub value: UserFilter,
}

/// Truncates `body` to [`PREVIEW_CHAR_LIMIT`] characters, appending [`ELLIPSIS`]
/// only when something was cut.
pub fn preview_body(body: &str) -> Cow<'_, str> {
    match body.char_indices().nth(PREVIEW_CHAR_LIMIT) {
        Some((cut, _)) => Cow::Owned(format!("{}{ELLIPSIS}", &body[..cut])),
        None => Cow::Borrowed(body),
    }
}

/// Builds the card for `post`, resolving its author through `users`.
pub fn build_card(post: &Post, users: &UserLookup) -> PostCard {
    let author = users.author_of(post);
    PostCard {
        author_name: author.map_or_else(|| UNKNOWN_AUTHOR.to_owned(), |user| user.name.clone()),
        author_email: author.map(|user| user.email.clone()).unwrap_or_default(),
        id_label: format!("#{}", post.id),
        title: post.title.clone(),
        preview: preview_body(&post.body).into_owned(),
    }
}

/// Maps a post subset to the view shown in place of the previous one.
pub fn render_posts(posts: &[&Post], users: &UserLookup) -> PostView {
    if posts.is_empty() {
        return PostView::Empty;
    }
    PostView::Cards(posts.iter().map(|post| build_card(post, users)).collect())
}

/// Selector options: "all users" first, then one per user in lookup order.
pub fn render_user_options(users: &UserLookup) -> Vec<UserOption> {
    let mut options = Vec::with_capacity(users.len() + 1);
    options.push(UserOption {
        label: ALL_USERS_LABEL.to_owned(),
        value: UserFilter::All,
    });
    options.extend(users.iter().map(|user| UserOption {
        label: user.name.clone(),
        value: UserFilter::User(user.id),
    }));
    options
}
