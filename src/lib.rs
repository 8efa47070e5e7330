//! Core data layer for a GitHub follower directory: paginated follower and
//! profile fetching over the REST API, an in-memory avatar cache, and a
//! locally persisted favorites list.
//!
//! All I/O is async on tokio and every fallible operation resolves to a
//! value or one member of the closed [`error::FollowerError`] taxonomy;
//! presentation is entirely the caller's concern.

pub mod error;
pub mod favorites;
pub mod github;
pub mod image_cache;
pub mod models;
pub mod pagination;

pub use error::{FollowerError, Result};
pub use favorites::{FavoritesAction, FavoritesStore, FAVORITES_KEY};
pub use github::{GitHubClient, PER_PAGE};
pub use image_cache::ImageCache;
pub use models::{Follower, User};
pub use pagination::FollowerList;
