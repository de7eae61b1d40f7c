//! Custom emoji scanner — finds `:name:` emoji the caller has not loaded.
//!
//! The caller supplies what it already knows as an [`EmojiLookup`]: the
//! built-in system emoji, custom emoji already fetched, and names previously
//! confirmed not to exist. Anything else referenced by a post or reaction is
//! returned as needing a fetch.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{BTreeSet, HashSet};

use crate::config::EmojiConfig;
use crate::types::{Post, Reaction};

static EMOJI: Lazy<Regex> =
    Lazy::new(|| Regex::new(r":([A-Za-z0-9_+\-]+):").expect("emoji pattern is valid"));

/// Emoji names the caller already knows about.
#[derive(Debug, Clone, Default)]
pub struct EmojiLookup {
    pub system: HashSet<String>,
    pub custom: HashSet<String>,
    pub non_existent: HashSet<String>,
}

impl EmojiLookup {
    /// Returns `true` if `name` is not a system emoji, not already loaded,
    /// and not known to be missing.
    pub fn needs_loading(&self, name: &str) -> bool {
        !self.system.contains(name)
            && !self.non_existent.contains(name)
            && !self.custom.contains(name)
    }
}

/// Custom emoji names referenced in `text` that need loading.
pub fn needed_in_text(text: &str, lookup: &EmojiLookup) -> BTreeSet<String> {
    if !text.contains(':') {
        return BTreeSet::new();
    }
    EMOJI
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|name| lookup.needs_loading(name))
        .map(str::to_string)
        .collect()
}

/// Custom emoji referenced by `posts`, in messages and attachment text.
///
/// Returns nothing when custom emoji are disabled, or when the first post
/// carries server metadata (the server has already sent the emoji).
pub fn needed_custom_emojis<'a, I>(
    posts: I,
    lookup: &EmojiLookup,
    config: &EmojiConfig,
) -> BTreeSet<String>
where
    I: IntoIterator<Item = &'a Post>,
{
    if !config.enable_custom_emoji {
        return BTreeSet::new();
    }

    let mut posts = posts.into_iter().peekable();
    if posts.peek().is_some_and(|post| post.metadata.is_some()) {
        return BTreeSet::new();
    }

    let mut needed = BTreeSet::new();
    for post in posts {
        needed.extend(needed_in_text(&post.message, lookup));
        let attachment_text = post.attachment_text();
        if !attachment_text.is_empty() {
            needed.extend(needed_in_text(&attachment_text, lookup));
        }
    }
    tracing::debug!(needed = needed.len(), "custom emoji scanned");
    needed
}

/// Reaction emoji names that need loading.
pub fn needed_reaction_emojis<'a, I>(reactions: I, lookup: &EmojiLookup) -> BTreeSet<String>
where
    I: IntoIterator<Item = &'a Reaction>,
{
    reactions
        .into_iter()
        .map(|r| r.emoji_name.as_str())
        .filter(|name| lookup.needs_loading(name))
        .map(str::to_string)
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
