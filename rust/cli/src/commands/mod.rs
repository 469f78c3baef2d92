//! Command handler modules for the Arcana CLI.
//!
//! Each command lives in its own module with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Dependency injection: Output streams (`&mut dyn Write`) passed as parameters
//! - Error propagation: All errors propagated via `CliError` enum
//!
//! Commands that open a deck share [`Session`], which layers command-line
//! overrides over the resolved configuration.

mod card;
mod cfg;
mod deck;
mod draw;
mod read;
mod spreads;

pub use card::handle_card_command;
pub use cfg::handle_cfg_command;
pub use deck::handle_deck_command;
pub use draw::handle_draw_command;
pub use read::handle_read_command;
pub use spreads::handle_spreads_command;

use std::path::PathBuf;

use arcana_engine::catalog::StandardCatalog;
use arcana_engine::deck::Deck;
use arcana_engine::loader::JsonDirectory;
use arcana_engine::selection::SelectionStrategy;
use tracing::debug;

use crate::cli::SessionArgs;
use crate::config::{self, Config};
use crate::error::CliError;

/// Independent random streams derived from one session seed.
#[derive(Debug, Clone, Copy)]
enum Stream {
    Shuffle,
    Selection,
    Reversal,
}

fn derive_seed(base: u64, stream: Stream) -> u64 {
    let k = stream as u64 + 1;
    base.wrapping_add(k.wrapping_mul(0x9E37_79B9_7F4A_7C15))
}

/// Configuration for one command invocation after applying overrides.
#[derive(Debug, Clone)]
pub(crate) struct Session {
    pub config: Config,
}

impl Session {
    pub fn resolve(args: &SessionArgs) -> Result<Self, CliError> {
        let mut config = config::load_with_sources()?.config;
        if let Some(seed) = args.seed {
            config.seed = Some(seed);
        }
        if let Some(p) = args.reversals {
            config.reversal_probability = p;
        }
        if let Some(kind) = args.shuffle {
            config.shuffle = kind;
        }
        if let Some(kind) = args.selection {
            config.selection = kind;
        }
        if let Some(dir) = &args.data_dir {
            config.data_dir = Some(dir.clone());
        }
        config::validate(&config)?;
        debug!(?config, "session resolved");
        Ok(Self { config })
    }

    /// Session with only a data directory override, for read-only listings.
    pub fn for_data_dir(data_dir: Option<PathBuf>) -> Result<Self, CliError> {
        Self::resolve(&SessionArgs {
            data_dir,
            ..SessionArgs::default()
        })
    }

    fn seed_for(&self, stream: Stream) -> Option<u64> {
        self.config.seed.map(|s| derive_seed(s, stream))
    }

    pub fn reversal_seed(&self) -> Option<u64> {
        self.seed_for(Stream::Reversal)
    }

    /// Builds the deck from the configured card source, in canonical order.
    pub fn open_deck(&self) -> Result<Deck, CliError> {
        let shuffler = self.config.shuffle.build(self.seed_for(Stream::Shuffle));
        let deck = match &self.config.data_dir {
            Some(dir) => Deck::from_source(&JsonDirectory::new(dir), shuffler)?,
            None => Deck::from_source(&StandardCatalog, shuffler)?,
        };
        Ok(deck)
    }

    pub fn selection(&self) -> Box<dyn SelectionStrategy> {
        self.config
            .selection
            .build(self.config.shuffle, self.seed_for(Stream::Selection))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_seeds_differ_per_stream() {
        let a = derive_seed(42, Stream::Shuffle);
        let b = derive_seed(42, Stream::Selection);
        let c = derive_seed(42, Stream::Reversal);
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_eq!(a, derive_seed(42, Stream::Shuffle));
    }
}
