//! Core types for postsearch-core.
//!
//! This module defines the data shared across the search and scan layers:
//! the [`Post`] as delivered by the backend, its optional attachment
//! payload, [`Reaction`]s, and the [`MatchSet`] produced by a search.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// The backend writes empty lists as `null`; treat that like a missing key.
fn null_as_empty<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A chat post as returned by the backend.
///
/// Only the fields the search and scan layers read are modelled; any other
/// keys in the payload are ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Unique post identifier.
    pub id: String,
    /// Free-text body of the post.
    #[serde(default)]
    pub message: String,
    /// Creation time in milliseconds since the Unix epoch.
    #[serde(default)]
    pub create_at: i64,
    /// Integration payload (message attachments), if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub props: Option<PostProps>,
    /// Server-computed metadata. When present the server has already
    /// delivered the emoji referenced by the post.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

impl Post {
    pub fn new(id: impl Into<String>, message: impl Into<String>, create_at: i64) -> Self {
        Self {
            id: id.into(),
            message: message.into(),
            create_at,
            props: None,
            metadata: None,
        }
    }

    /// Creation time as a UTC timestamp, or `None` if `create_at` is out of
    /// chrono's representable range.
    pub fn created(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        chrono::DateTime::from_timestamp_millis(self.create_at)
    }

    pub fn attachments(&self) -> &[Attachment] {
        self.props
            .as_ref()
            .map(|p| p.attachments.as_slice())
            .unwrap_or_default()
    }

    /// Concatenated text of every attachment: each field value, then the
    /// pretext, then the text, each preceded by a single space.
    pub fn attachment_text(&self) -> String {
        let mut text = String::new();
        for attachment in self.attachments() {
            for field in &attachment.fields {
                text.push(' ');
                text.push_str(&field.value_text());
            }
            if let Some(pretext) = attachment.pretext.as_deref().filter(|s| !s.is_empty()) {
                text.push(' ');
                text.push_str(pretext);
            }
            if let Some(body) = attachment.text.as_deref().filter(|s| !s.is_empty()) {
                text.push(' ');
                text.push_str(body);
            }
        }
        text
    }
}

/// The `props` object of a post. Only attachments are read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostProps {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub attachments: Vec<Attachment>,
}

/// A message attachment posted by an integration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    #[serde(default)]
    pub pretext: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub fields: Vec<AttachmentField>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttachmentField {
    #[serde(default)]
    pub title: Option<String>,
    /// Field values arrive as strings or numbers depending on the integration.
    #[serde(default)]
    pub value: Option<serde_json::Value>,
}

impl AttachmentField {
    /// The value rendered as text; missing, null, empty, and `false` values
    /// render as the empty string.
    pub fn value_text(&self) -> String {
        match &self.value {
            None | Some(serde_json::Value::Null) | Some(serde_json::Value::Bool(false)) => {
                String::new()
            }
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }
}

/// An emoji reaction on a post.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Reaction {
    pub user_id: String,
    pub post_id: String,
    pub emoji_name: String,
}

/// The result of filtering a post collection.
///
/// `order` lists the matched ids ascending by creation time; `posts` maps
/// each of those ids to an owned copy of the post.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MatchSet {
    pub order: Vec<String>,
    pub posts: HashMap<String, Post>,
}

impl MatchSet {
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Iterate the matched posts in `order`.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Post)> {
        self.order
            .iter()
            .filter_map(move |id| self.posts.get(id).map(|post| (id, post)))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
