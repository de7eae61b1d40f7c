//! Needed-data scanners — names referenced by posts that the caller must fetch.
//!
//! Both scanners are single-pass and take what the caller already knows as
//! explicit lookup sets; nothing is cached between calls.

pub mod emoji;
pub mod mentions;

pub use emoji::{needed_custom_emojis, needed_reaction_emojis, EmojiLookup};
pub use mentions::{needed_mentions, MentionScanner};
