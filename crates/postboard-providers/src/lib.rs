//! Remote data gateway for the postboard client.
//!
//! Sources fetch the post and user collections; the [`Gateway`] runs both
//! fetches concurrently and builds the [`postboard_core::DataStore`].

/// Concurrent initial load.
pub mod gateway;
/// HTTP source backed by `reqwest`.
pub mod http;
/// Scripted source for tests.
pub mod mock;

pub use gateway::Gateway;
pub use http::HttpSource;
pub use mock::MockSource;
