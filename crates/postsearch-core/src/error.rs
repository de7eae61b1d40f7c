//! Error types for postsearch-core.

use thiserror::Error;

/// Errors raised outside the pure search and scan paths.
///
/// [`PostFilter`](crate::search::PostFilter) never surfaces these; a term
/// that fails to compile is logged and reduces the search to an empty result.
#[derive(Debug, Error)]
pub enum SearchError {
    /// A query term produced a pattern the regex engine rejected.
    #[error("could not compile search term {term:?}: {source}")]
    InvalidTerm {
        term: String,
        #[source]
        source: regex::Error,
    },

    /// The configuration file could not be read or deserialized.
    #[error("invalid configuration: {0}")]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for postsearch-core operations.
pub type Result<T> = std::result::Result<T, SearchError>;
