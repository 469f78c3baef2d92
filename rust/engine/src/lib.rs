//! # arcana-engine: Tarot Deck and Reading Core
//!
//! Models a 78-card tarot deck, its shuffling and card selection, and the
//! generation of readings laid into named spreads with positional and
//! reversal semantics. Card data comes from a pluggable [`loader::CardSource`];
//! presentation layers consume the plain data and text views exposed here.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card records, suits, ranks and the `Arcana` classification
//! - [`numerals`] - Roman numeral labels for the major arcana
//! - [`shuffle`] - Shuffle strategies (secure Fisher–Yates, simple)
//! - [`selection`] - Selection strategies (top of deck, random)
//! - [`deck`] - The deck: shuffle, reset, draw and lookups
//! - [`loader`] - Card source trait and JSON directory loader
//! - [`catalog`] - Built-in standard deck data
//! - [`spread`] - Spread definitions and bundled spreads
//! - [`reading`] - Drawn cards, readings and the text interpretation
//! - [`generator`] - Reading generation with reversal rolls
//! - [`errors`] - Error types
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use arcana_engine::deck::Deck;
//! use arcana_engine::generator::ReadingGenerator;
//! use arcana_engine::selection::TopSelection;
//! use arcana_engine::shuffle::SecureShuffle;
//! use arcana_engine::spread::SpreadDefinition;
//!
//! let mut deck = Deck::standard(Box::new(SecureShuffle::with_seed(42))).unwrap();
//! deck.shuffle();
//!
//! let mut generator = ReadingGenerator::with_seed(deck, 0.3, 42).unwrap();
//! let spread = Arc::new(SpreadDefinition::three_card());
//! let reading = generator.generate_reading(&spread, &mut TopSelection, None);
//!
//! println!("{}", reading.basic_interpretation());
//! ```
//!
//! ## Deterministic Sessions
//!
//! Every random source accepts a seed, so a session can be replayed:
//!
//! ```rust
//! use arcana_engine::deck::Deck;
//! use arcana_engine::shuffle::SecureShuffle;
//!
//! let mut a = Deck::standard(Box::new(SecureShuffle::with_seed(7))).unwrap();
//! let mut b = Deck::standard(Box::new(SecureShuffle::with_seed(7))).unwrap();
//! a.shuffle();
//! b.shuffle();
//! assert_eq!(a.cards(), b.cards());
//! ```

pub mod cards;
pub mod catalog;
pub mod deck;
pub mod errors;
pub mod generator;
pub mod loader;
pub mod numerals;
pub mod reading;
pub mod selection;
pub mod shuffle;
pub mod spread;
