//! Core types for the postboard client.
//!
//! This crate holds the data model fetched from the remote API, the filter
//! predicate applied to it, the error taxonomy and the configuration file.

/// Configuration loading and defaults.
pub mod config;
/// Error types and result definitions.
pub mod error;
/// Search and author filtering over the post collection.
pub mod filter;
/// In-memory holder for the fetched collections.
pub mod store;
/// Trait definitions for remote data sources.
pub mod traits;
/// Post and user records.
pub mod types;

pub use config::{ApiConfig, Config, Theme, UiConfig};
pub use error::{Error, Resource, Result};
pub use filter::{PostFilter, UserFilter};
pub use store::DataStore;
pub use traits::PostSource;
pub use types::{Post, User, UserLookup};
