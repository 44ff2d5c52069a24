use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Config;
use crate::deck::{community_samples, filter_decks, personal_samples};
use crate::ui::view::ViewMode;

#[derive(Debug, Parser)]
#[command(
    name = "study-companion",
    version,
    about = "Browse, create, and import flashcard decks from the terminal"
)]
pub struct Cli {
    /// Path to the config file (default: ~/.config/study-companion/config.toml)
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Screen to open at startup, overriding the config file
    #[arg(long, value_enum)]
    pub view: Option<ViewMode>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print decks matching QUERY without starting the UI
    Search {
        /// Search the community library instead of your own
        #[arg(long)]
        community: bool,

        /// Case-insensitive text to look for (empty lists everything)
        #[arg(default_value = "")]
        query: String,
    },
}

impl Cli {
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_path)
    }
}

/// Tab-separated result rows for `search`.
pub fn search_lines(config: &Config, query: &str, community: bool) -> Vec<String> {
    if community {
        let decks = community_samples();
        return filter_decks(query, &decks)
            .into_iter()
            .map(|deck| {
                format!(
                    "{}\t{}\t{}\t{}",
                    deck.id,
                    deck.title,
                    deck.subject.label(),
                    deck.rating
                )
            })
            .collect();
    }

    if !config.library.include_samples {
        return Vec::new();
    }
    let decks = personal_samples();
    filter_decks(query, &decks)
        .into_iter()
        .map(|deck| format!("{}\t{}\t{} cards", deck.id, deck.name, deck.card_count))
        .collect()
}
