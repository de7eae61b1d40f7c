//! Static post corpora used across harnesses.
//!
//! Each corpus is a `&'static [(id, message, create_at)]` slice of
//! representative chat messages.

use postsearch_core::Post;
use std::collections::BTreeMap;

/// Everyday chat traffic with mixed punctuation, mentions and emoji.
pub const CORPUS_CHAT: &[(&str, &str, i64)] = &[
    ("p01", "Hello world", 100),
    ("p02", "Goodbye world", 50),
    ("p03", "deploy finished, rolling back the worldwide cache", 300),
    ("p04", "say \"exact phrase\" now", 10),
    ("p05", "testing wildcards in search", 20),
    ("p06", "@alice can you look at the DEPLOY logs?", 400),
    ("p07", "?!... ---", 500),
    ("p08", "Wildcard matching is wild", 250),
    ("p09", "phrase exact, reversed", 60),
    ("p10", "c++ (templates) are [hard]", 70),
];

/// Messages with accented text and non-ASCII punctuation.
pub const CORPUS_INTERNATIONAL: &[(&str, &str, i64)] = &[
    ("i1", "«Bonjour» tout le monde", 1),
    ("i2", "¿Qué tal? Muy bien", 2),
    ("i3", "café crème", 3),
    ("i4", "Straße gesperrt", 4),
    ("i5", "naïve approach", 5),
];

/// Build an id-keyed map of a corpus.
pub fn corpus(items: &[(&str, &str, i64)]) -> BTreeMap<String, Post> {
    super::builders::post_map(items)
}

/// Generate `n` synthetic posts where every `hit_every`-th post mentions
/// "timeout". Used by the property tests and the benchmark sizing checks.
pub fn corpus_high_volume(n: usize, hit_every: usize) -> BTreeMap<String, Post> {
    (0..n)
        .map(|i| {
            let message = if i % hit_every == 0 {
                format!("request {i} failed with timeout after retry")
            } else {
                format!("request {i} completed in {}ms", i % 97)
            };
            let id = format!("post-{i:06}");
            let post = Post::new(id.clone(), message, (i % 50) as i64);
            (id, post)
        })
        .collect()
}
