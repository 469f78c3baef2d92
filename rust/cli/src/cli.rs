//! Command-line argument definitions.

use std::path::PathBuf;

use arcana_engine::cards::{MinorRank, Suit};
use arcana_engine::selection::SelectionKind;
use arcana_engine::shuffle::ShuffleKind;
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "arcana",
    version,
    about = "Arcana Tarot CLI",
    long_about = "Shuffle a tarot deck, draw cards and lay readings into spreads."
)]
pub struct ArcanaCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Lay a reading into a spread and print its interpretation
    Read {
        /// Spread id (see `arcana spreads`)
        #[arg(long, default_value = "three-card")]
        spread: String,
        /// Question or context recorded with the reading
        #[arg(long)]
        question: Option<String>,
        /// Print the reading as JSON
        #[arg(long)]
        json: bool,
        #[command(flatten)]
        session: SessionArgs,
    },
    /// Shuffle and draw cards without a spread
    Draw {
        #[arg(long, default_value_t = 1)]
        count: usize,
        #[arg(long)]
        json: bool,
        #[command(flatten)]
        session: SessionArgs,
    },
    /// Look up a single card
    Card {
        /// Major arcana rank, 0-21
        #[arg(long, conflicts_with_all = ["suit", "rank"])]
        major: Option<u8>,
        /// Minor arcana suit (wands, cups, swords, pentacles)
        #[arg(long, requires = "rank")]
        suit: Option<Suit>,
        /// Minor arcana rank, 1-14 or a name such as "queen"
        #[arg(long, requires = "suit")]
        rank: Option<MinorRank>,
        #[arg(long)]
        data_dir: Option<PathBuf>,
    },
    /// List the deck in canonical order
    Deck {
        #[arg(long, value_enum, default_value_t = ArcanaFilter::All)]
        arcana: ArcanaFilter,
        /// Restrict the listing to one suit
        #[arg(long, conflicts_with = "arcana")]
        suit: Option<Suit>,
        #[arg(long)]
        data_dir: Option<PathBuf>,
    },
    /// List the bundled spreads
    Spreads {
        #[arg(long)]
        json: bool,
    },
    /// Display the resolved configuration and where each value came from
    Cfg,
}

/// Overrides for the deck session, layered over the resolved configuration.
#[derive(Args, Debug, Clone, Default)]
pub struct SessionArgs {
    /// Seed for reproducible shuffles and reversals
    #[arg(long)]
    pub seed: Option<u64>,
    /// Chance in [0, 1] that a drawn card is reversed
    #[arg(long)]
    pub reversals: Option<f64>,
    /// Shuffle strategy (secure, simple)
    #[arg(long)]
    pub shuffle: Option<ShuffleKind>,
    /// Selection strategy (top, random)
    #[arg(long)]
    pub selection: Option<SelectionKind>,
    /// Directory of JSON card data
    #[arg(long)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ArcanaFilter {
    All,
    Major,
    Minor,
}
