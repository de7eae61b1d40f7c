//! Command-line surface for postsearch.
//!
//! [`run`] executes a parsed [`Cli`] and returns the JSON it would print, so
//! integration tests can drive commands without spawning the binary.

use anyhow::Context;
use clap::{Parser, Subcommand};
use postsearch_core::{
    config::Config,
    scan::{needed_custom_emojis, EmojiLookup, MentionScanner},
    Post, PostFilter,
};
use serde::Deserialize;
use std::{
    collections::{BTreeMap, HashSet},
    path::{Path, PathBuf},
};

#[derive(Debug, Parser)]
#[command(name = "postsearch", about = "Search and scan team-chat posts")]
pub struct Cli {
    /// Write debug logs to /tmp/postsearch-debug.log (tail -f to inspect).
    #[arg(long, global = true)]
    pub debug: bool,

    /// Read configuration from this file instead of ~/.config/postsearch/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Filter posts by a query and print the ordered match set.
    Search {
        /// JSON file holding an array of posts or an object of id -> post.
        file: PathBuf,
        /// Query: words, `prefix*` terms, or a "quoted phrase".
        query: String,
    },
    /// Print mentioned usernames that are not already known.
    Mentions {
        file: PathBuf,
        /// A username that is already loaded (repeatable).
        #[arg(long = "known", value_name = "NAME")]
        known: Vec<String>,
    },
    /// Print custom emoji names that are not already known.
    Emojis {
        file: PathBuf,
        /// A built-in system emoji name (repeatable).
        #[arg(long = "system", value_name = "NAME")]
        system: Vec<String>,
        /// A custom emoji that is already loaded (repeatable).
        #[arg(long = "custom", value_name = "NAME")]
        custom: Vec<String>,
        /// An emoji name known not to exist (repeatable).
        #[arg(long = "missing", value_name = "NAME")]
        missing: Vec<String>,
    },
}

/// Either shape the backend uses for a post list.
#[derive(Deserialize)]
#[serde(untagged)]
enum PostsFile {
    List(Vec<Post>),
    ById(BTreeMap<String, Post>),
}

/// Read posts from `path`, keyed by id, in file order for arrays and id
/// order for objects.
pub fn read_posts(path: &Path) -> anyhow::Result<Vec<(String, Post)>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let parsed: PostsFile = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a JSON post list", path.display()))?;
    let posts = match parsed {
        PostsFile::List(list) => list.into_iter().map(|p| (p.id.clone(), p)).collect(),
        PostsFile::ById(map) => map.into_iter().collect(),
    };
    Ok(posts)
}

fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => Ok(Config::load().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "falling back to default configuration");
            Config::defaults()
        })),
    }
}

/// Run `cli` and return its JSON output.
pub fn run(cli: &Cli) -> anyhow::Result<String> {
    let config = load_config(cli.config.as_deref())?;

    let output = match &cli.command {
        Command::Search { file, query } => {
            let posts = read_posts(file)?;
            let filter = PostFilter::with_config(query, &config.search);
            let result = filter.apply(posts.iter().map(|(id, post)| (id, post)));
            tracing::info!(query = %query, matched = result.len(), "search complete");
            serde_json::to_string_pretty(&result)?
        }
        Command::Mentions { file, known } => {
            let posts = read_posts(file)?;
            let known: HashSet<String> = known.iter().cloned().collect();
            let needed = MentionScanner::new(&config.mentions)
                .needed(posts.iter().map(|(_, post)| post), &known);
            serde_json::to_string_pretty(&needed)?
        }
        Command::Emojis {
            file,
            system,
            custom,
            missing,
        } => {
            let posts = read_posts(file)?;
            let lookup = EmojiLookup {
                system: system.iter().cloned().collect(),
                custom: custom.iter().cloned().collect(),
                non_existent: missing.iter().cloned().collect(),
            };
            let needed =
                needed_custom_emojis(posts.iter().map(|(_, post)| post), &lookup, &config.emoji);
            serde_json::to_string_pretty(&needed)?
        }
    };
    Ok(output)
}
