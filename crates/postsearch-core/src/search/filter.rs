//! Record filter — applies compiled matchers to a post collection.

use crate::config::SearchConfig;
use crate::search::terms::{Matcher, TermCompiler};
use crate::types::{MatchSet, Post};

/// A query compiled once and applied to any number of post collections.
#[derive(Debug, Clone)]
pub struct PostFilter {
    matchers: Vec<Matcher>,
}

impl PostFilter {
    /// Compile `terms` with the default configuration.
    pub fn new(terms: &str) -> Self {
        Self::with_config(terms, &SearchConfig::default())
    }

    /// Compile `terms`. A term that cannot be compiled leaves the filter
    /// with no matchers, so it matches nothing.
    pub fn with_config(terms: &str, config: &SearchConfig) -> Self {
        let matchers = match TermCompiler::new(config).compile(terms) {
            Ok(matchers) => matchers,
            Err(err) => {
                tracing::warn!(error = %err, "search terms rejected; returning no results");
                Vec::new()
            }
        };
        tracing::debug!(
            terms = %terms,
            matchers = ?matchers.iter().map(ToString::to_string).collect::<Vec<_>>(),
            "search terms compiled"
        );
        Self { matchers }
    }

    pub fn matchers(&self) -> &[Matcher] {
        &self.matchers
    }

    /// `false` when the query compiled to nothing; such a filter matches no post.
    pub fn is_searchable(&self) -> bool {
        !self.matchers.is_empty()
    }

    /// Returns `true` if every matcher accepts the post's message.
    pub fn is_match(&self, post: &Post) -> bool {
        self.is_searchable() && self.matchers.iter().all(|m| m.test(&post.message))
    }

    /// Filter `posts`, keyed by id, into a [`MatchSet`] ordered by
    /// `create_at` ascending. Posts with equal timestamps keep the order in
    /// which `posts` yielded them.
    pub fn apply<'a, I>(&self, posts: I) -> MatchSet
    where
        I: IntoIterator<Item = (&'a String, &'a Post)>,
    {
        if !self.is_searchable() {
            return MatchSet::default();
        }

        let mut kept: Vec<(&String, &Post)> = posts
            .into_iter()
            .filter(|(_, post)| self.is_match(post))
            .collect();
        kept.sort_by_key(|(_, post)| post.create_at);

        let mut result = MatchSet::default();
        for (id, post) in kept {
            result.order.push(id.clone());
            result.posts.insert(id.clone(), post.clone());
        }
        tracing::debug!(matched = result.len(), "posts filtered");
        result
    }
}

/// Filter `posts` by `terms` with the default configuration.
///
/// ```
/// use std::collections::BTreeMap;
/// use postsearch_core::{filter_posts, Post};
///
/// let mut posts = BTreeMap::new();
/// posts.insert("id1".to_string(), Post::new("id1", "Hello world", 100));
/// posts.insert("id2".to_string(), Post::new("id2", "Goodbye world", 50));
///
/// let result = filter_posts(&posts, "world");
/// assert_eq!(result.order, vec!["id2", "id1"]);
/// ```
pub fn filter_posts<'a, I>(posts: I, terms: &str) -> MatchSet
where
    I: IntoIterator<Item = (&'a String, &'a Post)>,
{
    PostFilter::new(terms).apply(posts)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
