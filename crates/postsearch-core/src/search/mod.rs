//! Search layer — term compiler and record filter.
//!
//! [`terms`] turns a query string into [`Matcher`]s; [`filter`] applies them
//! to a post collection and orders the survivors by creation time. Both are
//! pure and never fail: any query yields a (possibly empty) [`MatchSet`].
//!
//! [`MatchSet`]: crate::types::MatchSet

pub mod filter;
pub mod terms;

pub use filter::{filter_posts, PostFilter};
pub use terms::{compile_terms, is_non_word, Matcher, TermCompiler};
