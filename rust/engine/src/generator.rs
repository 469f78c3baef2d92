use std::sync::Arc;

use chrono::Utc;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::debug;

use crate::deck::Deck;
use crate::errors::GeneratorError;
use crate::reading::{DrawnCard, Reading};
use crate::selection::SelectionStrategy;
use crate::spread::SpreadDefinition;

/// Default chance that a drawn card lands reversed.
pub const DEFAULT_REVERSAL_PROBABILITY: f64 = 0.5;

/// Lays cards from a deck into spreads.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use arcana_engine::deck::Deck;
/// use arcana_engine::generator::ReadingGenerator;
/// use arcana_engine::selection::RandomSelection;
/// use arcana_engine::shuffle::SecureShuffle;
/// use arcana_engine::spread::SpreadDefinition;
///
/// let deck = Deck::standard(Box::new(SecureShuffle::with_seed(1))).unwrap();
/// let mut generator = ReadingGenerator::with_seed(deck, 0.5, 1).unwrap();
/// let spread = Arc::new(SpreadDefinition::celtic_cross());
/// let mut selection = RandomSelection::new(SecureShuffle::with_seed(2));
///
/// let reading = generator.generate_reading(&spread, &mut selection, Some("career".into()));
/// assert_eq!(reading.drawn_cards.len(), 10);
/// ```
#[derive(Debug)]
pub struct ReadingGenerator {
    deck: Deck,
    reversal_probability: f64,
    rng: ChaCha20Rng,
}

impl ReadingGenerator {
    pub fn new(deck: Deck, reversal_probability: f64) -> Result<Self, GeneratorError> {
        Self::build(deck, reversal_probability, ChaCha20Rng::from_os_rng())
    }

    /// Reversal outcomes become reproducible for a given seed.
    pub fn with_seed(
        deck: Deck,
        reversal_probability: f64,
        seed: u64,
    ) -> Result<Self, GeneratorError> {
        Self::build(deck, reversal_probability, ChaCha20Rng::seed_from_u64(seed))
    }

    fn build(deck: Deck, p: f64, rng: ChaCha20Rng) -> Result<Self, GeneratorError> {
        if !(0.0..=1.0).contains(&p) {
            return Err(GeneratorError::InvalidReversalProbability(p));
        }
        Ok(Self {
            deck,
            reversal_probability: p,
            rng,
        })
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn deck_mut(&mut self) -> &mut Deck {
        &mut self.deck
    }

    pub fn reversal_probability(&self) -> f64 {
        self.reversal_probability
    }

    /// Draws `spread.card_count()` cards and binds them to positions in
    /// declaration order. A short draw leaves the trailing positions empty.
    pub fn generate_reading(
        &mut self,
        spread: &Arc<SpreadDefinition>,
        selection: &mut dyn SelectionStrategy,
        context: Option<String>,
    ) -> Reading {
        let drawn = self.deck.draw_cards(spread.card_count(), selection);
        let mut drawn_cards = Vec::with_capacity(drawn.len());
        for (position, card) in spread.positions().iter().zip(drawn) {
            let is_reversed = spread.allow_reversals() && self.roll_reversal();
            drawn_cards.push(DrawnCard::new(card, position.clone(), is_reversed));
        }
        debug!(
            spread = spread.id(),
            positions = spread.card_count(),
            filled = drawn_cards.len(),
            "reading generated"
        );
        Reading {
            spread: Arc::clone(spread),
            drawn_cards,
            created_at: Utc::now(),
            context,
        }
    }

    fn roll_reversal(&mut self) -> bool {
        self.rng.random::<f64>() < self.reversal_probability
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shuffle::SecureShuffle;

    fn deck() -> Deck {
        Deck::standard(Box::new(SecureShuffle::with_seed(3))).unwrap()
    }

    #[test]
    fn rejects_probability_outside_unit_interval() {
        assert_eq!(
            ReadingGenerator::new(deck(), 1.5).unwrap_err(),
            GeneratorError::InvalidReversalProbability(1.5)
        );
        assert!(ReadingGenerator::new(deck(), -0.1).is_err());
        assert!(ReadingGenerator::new(deck(), f64::NAN).is_err());
        assert!(ReadingGenerator::new(deck(), 0.0).is_ok());
        assert!(ReadingGenerator::new(deck(), 1.0).is_ok());
    }
}
