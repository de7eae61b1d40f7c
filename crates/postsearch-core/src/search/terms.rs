//! Term compiler — turns a raw query string into [`Matcher`]s.
//!
//! A query is one of:
//!
//! - shorter than the minimum term length after trimming: no matchers;
//! - wrapped in double quotes: one [`Matcher::Phrase`] for the interior;
//! - anything else: split on runs of non-word characters, tokens shorter
//!   than the minimum dropped, each remaining token compiled to a
//!   [`Matcher::Prefix`] (trailing `*`) or [`Matcher::Word`].
//!
//! All matchers are case-insensitive and match the term literally.

use regex::{Regex, RegexBuilder};

use crate::config::SearchConfig;
use crate::error::{Result, SearchError};

const WILDCARD: char = '*';
const QUOTE: char = '"';

/// Code point ranges, besides whitespace, that separate words.
///
/// Letters, digits, `_`, `'`, `-`, `@`, `*`, and everything from U+00C0
/// upward are word characters. `\b` would classify non-ASCII punctuation
/// such as `«` or `¿` as part of a word, so boundaries are matched against
/// this class instead.
const NON_WORD_RANGES: &[(char, char)] = &[
    ('\u{00}', '\u{26}'),
    ('\u{28}', '\u{29}'),
    ('\u{2B}', '\u{2C}'),
    ('\u{2E}', '\u{2F}'),
    ('\u{3A}', '\u{3F}'),
    ('\u{5B}', '\u{5E}'),
    ('\u{60}', '\u{60}'),
    ('\u{7B}', '\u{BF}'),
];

/// Returns `true` if `c` separates words.
pub fn is_non_word(c: char) -> bool {
    c.is_whitespace()
        || NON_WORD_RANGES
            .iter()
            .any(|&(lo, hi)| (lo..=hi).contains(&c))
}

/// The non-word class as a regex character class. Case folding is switched
/// off inside the class so `µ` does not pull in the Greek letter mu.
fn non_word_class() -> String {
    let mut class = String::from(r"(?-i:[\s");
    for &(lo, hi) in NON_WORD_RANGES {
        class.push_str(&format!(r"\x{{{:X}}}-\x{{{:X}}}", lo as u32, hi as u32));
    }
    class.push_str("])");
    class
}

// ---------------------------------------------------------------------------
// Matcher
// ---------------------------------------------------------------------------

/// A compiled predicate for one query term.
#[derive(Debug, Clone)]
pub enum Matcher {
    /// The term must appear as a complete word.
    Word { term: String, pattern: Regex },
    /// The term must start at a word boundary; anything may follow.
    Prefix { term: String, pattern: Regex },
    /// The term must appear anywhere, boundaries ignored.
    Phrase { term: String, pattern: Regex },
}

impl Matcher {
    pub fn word(term: &str) -> Result<Self> {
        let class = non_word_class();
        let pattern = compile(
            term,
            &format!("(?:^|{class}){}(?:{class}|$)", regex::escape(term)),
        )?;
        Ok(Matcher::Word {
            term: term.to_string(),
            pattern,
        })
    }

    pub fn prefix(term: &str) -> Result<Self> {
        let pattern = compile(
            term,
            &format!("(?:^|{}){}", non_word_class(), regex::escape(term)),
        )?;
        Ok(Matcher::Prefix {
            term: term.to_string(),
            pattern,
        })
    }

    pub fn phrase(term: &str) -> Result<Self> {
        let pattern = compile(term, &regex::escape(term))?;
        Ok(Matcher::Phrase {
            term: term.to_string(),
            pattern,
        })
    }

    /// Returns `true` if `text` satisfies this term.
    pub fn test(&self, text: &str) -> bool {
        match self {
            Matcher::Word { pattern, .. }
            | Matcher::Prefix { pattern, .. }
            | Matcher::Phrase { pattern, .. } => pattern.is_match(text),
        }
    }

    /// The term as written in the query, without quotes or wildcard.
    pub fn term(&self) -> &str {
        match self {
            Matcher::Word { term, .. }
            | Matcher::Prefix { term, .. }
            | Matcher::Phrase { term, .. } => term,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Matcher::Word { .. } => "word",
            Matcher::Prefix { .. } => "prefix",
            Matcher::Phrase { .. } => "phrase",
        }
    }
}

impl std::fmt::Display for Matcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Matcher::Word { term, .. } => write!(f, "{term}"),
            Matcher::Prefix { term, .. } => write!(f, "{term}{WILDCARD}"),
            Matcher::Phrase { term, .. } => write!(f, "{QUOTE}{term}{QUOTE}"),
        }
    }
}

/// Compiled-program budget per byte of pattern. The size limit grows with
/// the term and never drops below the `regex` default.
const SIZE_LIMIT_PER_BYTE: usize = 1 << 10;
const MIN_SIZE_LIMIT: usize = 10 * (1 << 20);

fn compile(term: &str, pattern: &str) -> Result<Regex> {
    let size_limit = pattern
        .len()
        .saturating_mul(SIZE_LIMIT_PER_BYTE)
        .max(MIN_SIZE_LIMIT);
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .size_limit(size_limit)
        .build()
        .map_err(|source| SearchError::InvalidTerm {
            term: term.to_string(),
            source,
        })
}

// ---------------------------------------------------------------------------
// Compiler
// ---------------------------------------------------------------------------

/// Compiles queries with a configurable minimum term length.
#[derive(Debug, Clone)]
pub struct TermCompiler {
    min_term_len: usize,
}

impl Default for TermCompiler {
    fn default() -> Self {
        Self::new(&SearchConfig::default())
    }
}

impl TermCompiler {
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            min_term_len: config.min_term_len,
        }
    }

    /// Compile `query` into zero or more matchers, all of which must hold
    /// for a post to match.
    ///
    /// An empty result means the query was too short to search on; it does
    /// not mean "match everything".
    pub fn compile(&self, query: &str) -> Result<Vec<Matcher>> {
        let query = query.trim();
        if query.chars().count() < self.min_term_len {
            return Ok(Vec::new());
        }

        if let Some(phrase) = unquote(query) {
            return Ok(vec![Matcher::phrase(phrase)?]);
        }

        query
            .split(is_non_word)
            .filter(|token| token.chars().count() >= self.min_term_len)
            .map(|token| match token.strip_suffix(WILDCARD) {
                Some(stem) => Matcher::prefix(stem),
                None => Matcher::word(token),
            })
            .collect()
    }
}

/// Compile `query` with the default minimum term length.
pub fn compile_terms(query: &str) -> Result<Vec<Matcher>> {
    TermCompiler::default().compile(query)
}

/// The interior of a query wrapped in double quotes. An unterminated quote
/// is not a phrase.
fn unquote(query: &str) -> Option<&str> {
    query
        .strip_prefix(QUOTE)
        .and_then(|rest| rest.strip_suffix(QUOTE))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
