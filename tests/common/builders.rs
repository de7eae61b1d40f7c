//! Test builders — ergonomic constructors for `Post` values and post maps.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use postsearch_core::{Attachment, AttachmentField, Post, PostProps};
use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// PostBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`Post`] test fixtures.
///
/// # Example
///
/// ```rust
/// let post = PostBuilder::new("p1", "deploy finished :rocket:")
///     .create_at(1_700_000_000_000)
///     .attachment_text("build #42 passed")
///     .build();
/// ```
pub struct PostBuilder {
    post: Post,
}

impl PostBuilder {
    pub fn new(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            post: Post::new(id, message, 0),
        }
    }

    pub fn create_at(mut self, create_at: i64) -> Self {
        self.post.create_at = create_at;
        self
    }

    pub fn attachment(mut self, attachment: Attachment) -> Self {
        self.post
            .props
            .get_or_insert_with(PostProps::default)
            .attachments
            .push(attachment);
        self
    }

    pub fn attachment_text(self, text: impl Into<String>) -> Self {
        self.attachment(Attachment {
            text: Some(text.into()),
            ..Attachment::default()
        })
    }

    pub fn attachment_field(self, value: impl Into<serde_json::Value>) -> Self {
        self.attachment(Attachment {
            fields: vec![AttachmentField {
                title: None,
                value: Some(value.into()),
            }],
            ..Attachment::default()
        })
    }

    pub fn metadata(mut self, metadata: serde_json::Value) -> Self {
        self.post.metadata = Some(metadata);
        self
    }

    pub fn build(self) -> Post {
        self.post
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// Build a post with an id, body and timestamp.
pub fn post(id: &str, message: &str, create_at: i64) -> Post {
    PostBuilder::new(id, message).create_at(create_at).build()
}

/// Build an id-keyed map from `(id, message, create_at)` triples.
pub fn post_map(items: &[(&str, &str, i64)]) -> BTreeMap<String, Post> {
    items
        .iter()
        .map(|&(id, message, ts)| (id.to_string(), post(id, message, ts)))
        .collect()
}

/// Build an insertion-ordered list of `(id, post)` pairs, for tests that
/// depend on the relative order of posts with equal timestamps.
pub fn post_list(items: &[(&str, &str, i64)]) -> Vec<(String, Post)> {
    items
        .iter()
        .map(|&(id, message, ts)| (id.to_string(), post(id, message, ts)))
        .collect()
}
