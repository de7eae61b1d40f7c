//! postsearch — search and scan team-chat posts from the command line.
//!
//! The filtering and scanning live in `postsearch-core`; this crate only
//! adds the [`cli`] surface so integration tests and the binary share one
//! code path.
//!
//! ```text
//! JSON file ──► cli::read_posts ──► PostFilter / scanners ──► JSON stdout
//! ```

pub mod cli;
