//! At-mention scanner — finds `@username` mentions of users not yet loaded.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{BTreeSet, HashSet};

use crate::config::MentionConfig;
use crate::types::Post;

/// Group 1 is the mention including trailing `.`/`-`, group 2 without it.
/// Letters are spelled out in both cases: `(?i)` would also admit the
/// Kelvin sign and long s through Unicode case folding.
static MENTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"@(([A-Za-z0-9_.\-]*[A-Za-z0-9_])[.\-]*)").expect("mention pattern is valid")
});

/// A mention only counts when the `@` does not follow an ASCII word
/// character, so `user@example.com` is not a mention.
fn starts_mention(text: &str, at: usize) -> bool {
    !text[..at]
        .chars()
        .next_back()
        .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// One `@` mention found in a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mention<'t> {
    /// The mention including any trailing `.` or `-`.
    pub with_punctuation: &'t str,
    /// The mention with trailing punctuation stripped.
    pub name: &'t str,
}

/// Every mention in `text`, in order of appearance.
pub fn mentions_in(text: &str) -> impl Iterator<Item = Mention<'_>> {
    MENTION.captures_iter(text).filter_map(move |caps| {
        let whole = caps.get(0)?;
        if !starts_mention(text, whole.start()) {
            return None;
        }
        Some(Mention {
            with_punctuation: caps.get(1)?.as_str(),
            name: caps.get(2)?.as_str(),
        })
    })
}

/// Scans posts for mentions of users the caller has not loaded.
#[derive(Debug, Clone)]
pub struct MentionScanner {
    special: HashSet<String>,
}

impl Default for MentionScanner {
    fn default() -> Self {
        Self::new(&MentionConfig::default())
    }
}

impl MentionScanner {
    pub fn new(config: &MentionConfig) -> Self {
        Self {
            special: config.special.iter().cloned().collect(),
        }
    }

    /// Usernames mentioned in `posts` that are neither special mentions nor
    /// in `known`. When a mention carries trailing punctuation both forms
    /// are returned, since either may be the real username.
    pub fn needed<'a, I>(&self, posts: I, known: &HashSet<String>) -> BTreeSet<String>
    where
        I: IntoIterator<Item = &'a Post>,
    {
        let mut needed = BTreeSet::new();
        for post in posts {
            if !post.message.contains('@') {
                continue;
            }
            for mention in mentions_in(&post.message) {
                if self.special.contains(mention.name) {
                    continue;
                }
                if known.contains(mention.with_punctuation) || known.contains(mention.name) {
                    continue;
                }
                needed.insert(mention.with_punctuation.to_string());
                needed.insert(mention.name.to_string());
            }
        }
        tracing::debug!(needed = needed.len(), "mentioned usernames scanned");
        needed
    }
}

/// [`MentionScanner::needed`] with the default special mentions.
pub fn needed_mentions<'a, I>(posts: I, known: &HashSet<String>) -> BTreeSet<String>
where
    I: IntoIterator<Item = &'a Post>,
{
    MentionScanner::default().needed(posts, known)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
