//! postsearch-core — post search and needed-data scanning for team-chat clients.
//!
//! This crate holds the pure, synchronous pieces that sit between a REST
//! client that fetches posts and the state layer that displays them:
//!
//! - [`search`] compiles a query into matchers and filters a post collection
//!   into an ordered [`MatchSet`].
//! - [`scan`] finds at-mentioned usernames and custom emoji names that the
//!   caller has not loaded yet.
//!
//! # Data flow
//!
//! ```text
//! posts ──► search::PostFilter ──► MatchSet (order + posts)
//!   │
//!   └──► scan::{mentions, emoji} ──► names to fetch
//! ```
//!
//! Nothing here performs I/O except [`config::Config::load`].

pub mod config;
pub mod error;
pub mod scan;
pub mod search;
pub mod types;

pub use error::{Result, SearchError};
pub use search::{filter_posts, Matcher, PostFilter};
pub use types::{Attachment, AttachmentField, MatchSet, Post, PostProps, Reaction};
