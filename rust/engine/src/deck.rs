use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::cards::{Arcana, Card, CardId, MinorRank, Suit};
use crate::catalog::StandardCatalog;
use crate::errors::DeckError;
use crate::loader::CardSource;
use crate::selection::SelectionStrategy;
use crate::shuffle::ShuffleStrategy;

/// A tarot deck split into major and minor arcana.
/// Drawing samples from the deck without removing cards; the set of cards is
/// fixed at construction.
///
/// # Examples
///
/// ```
/// use arcana_engine::deck::Deck;
/// use arcana_engine::selection::TopSelection;
/// use arcana_engine::shuffle::SecureShuffle;
///
/// let mut deck = Deck::standard(Box::new(SecureShuffle::with_seed(42))).unwrap();
/// assert_eq!(deck.len(), 78);
///
/// deck.shuffle();
/// let drawn = deck.draw_cards(3, &mut TopSelection);
/// assert_eq!(drawn.len(), 3);
/// assert_eq!(deck.len(), 78);
/// ```
pub struct Deck {
    /// Major arcana in live order
    major: Vec<Arc<Card>>,
    /// Minor arcana in live order
    minor: Vec<Arc<Card>>,
    /// Strategy applied by [`Deck::shuffle`]
    shuffler: Box<dyn ShuffleStrategy>,
}

impl fmt::Debug for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deck")
            .field("major", &self.major.len())
            .field("minor", &self.minor.len())
            .field("shuffler", &self.shuffler.name())
            .finish()
    }
}

impl Deck {
    /// Builds a deck from explicit card lists, starting in canonical order.
    pub fn new(
        major: Vec<Card>,
        minor: Vec<Card>,
        shuffler: Box<dyn ShuffleStrategy>,
    ) -> Result<Self, DeckError> {
        let mut seen = HashSet::new();
        for card in &major {
            if !card.arcana().is_major() {
                return Err(DeckError::Misfiled {
                    id: card.id().clone(),
                    expected: "major",
                });
            }
        }
        for card in &minor {
            if card.arcana().is_major() {
                return Err(DeckError::Misfiled {
                    id: card.id().clone(),
                    expected: "minor",
                });
            }
        }
        for card in major.iter().chain(minor.iter()) {
            if !seen.insert(card.id().clone()) {
                return Err(DeckError::DuplicateCard(card.id().clone()));
            }
        }
        let mut deck = Self {
            major: major.into_iter().map(Arc::new).collect(),
            minor: minor.into_iter().map(Arc::new).collect(),
            shuffler,
        };
        deck.reset();
        debug!(
            major = deck.major.len(),
            minor = deck.minor.len(),
            shuffler = deck.shuffler.name(),
            "deck constructed"
        );
        Ok(deck)
    }

    /// Loads every arcana and suit from `source`; the first failure aborts construction.
    pub fn from_source(
        source: &dyn CardSource,
        shuffler: Box<dyn ShuffleStrategy>,
    ) -> Result<Self, DeckError> {
        let major = source.major_arcana()?;
        let mut minor = Vec::new();
        for suit in Suit::canonical() {
            minor.extend(source.suit(suit)?);
        }
        Self::new(major, minor, shuffler)
    }

    /// The bundled 78-card deck.
    pub fn standard(shuffler: Box<dyn ShuffleStrategy>) -> Result<Self, DeckError> {
        Self::from_source(&StandardCatalog, shuffler)
    }

    pub fn len(&self) -> usize {
        self.major.len() + self.minor.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn major(&self) -> &[Arc<Card>] {
        &self.major
    }

    pub fn minor(&self) -> &[Arc<Card>] {
        &self.minor
    }

    /// Major then minor, in live order.
    pub fn cards(&self) -> Vec<Arc<Card>> {
        self.major.iter().chain(self.minor.iter()).cloned().collect()
    }

    pub fn shuffler_name(&self) -> &'static str {
        self.shuffler.name()
    }

    /// Shuffles the major and minor arcana independently.
    pub fn shuffle(&mut self) {
        self.major = self.shuffler.shuffle(&self.major);
        self.minor = self.shuffler.shuffle(&self.minor);
        debug!(shuffler = self.shuffler.name(), "deck shuffled");
    }

    /// Restores canonical order: majors by rank, minors by suit label then rank.
    pub fn reset(&mut self) {
        sort_major(&mut self.major);
        sort_minor(&mut self.minor);
    }

    /// Draws up to `count` cards from major+minor via `strategy`.
    /// Cards stay in the deck.
    pub fn draw_cards(
        &self,
        count: usize,
        strategy: &mut dyn SelectionStrategy,
    ) -> Vec<Arc<Card>> {
        let all = self.cards();
        let count = count.min(all.len());
        let drawn = strategy.select_cards(&all, count);
        debug!(
            requested = count,
            drawn = drawn.len(),
            strategy = strategy.name(),
            "cards drawn"
        );
        drawn
    }

    pub fn get_major_arcana(&self, rank: u8) -> Option<Arc<Card>> {
        self.major
            .iter()
            .find(|c| matches!(c.arcana(), Arcana::Major { rank: r } if r == rank))
            .cloned()
    }

    pub fn get_minor_arcana(&self, suit: Suit, rank: MinorRank) -> Option<Arc<Card>> {
        self.minor
            .iter()
            .find(|c| c.arcana() == Arcana::Minor { suit, rank })
            .cloned()
    }

    pub fn find(&self, id: &CardId) -> Option<Arc<Card>> {
        self.major
            .iter()
            .chain(self.minor.iter())
            .find(|c| c.id() == id)
            .cloned()
    }

    /// Cards of one suit in canonical order.
    pub fn get_cards(&self, suit: Suit) -> Vec<Arc<Card>> {
        let mut cards: Vec<Arc<Card>> = self
            .minor
            .iter()
            .filter(|c| c.arcana().suit() == Some(suit))
            .cloned()
            .collect();
        sort_minor(&mut cards);
        cards
    }

    pub fn get_major_arcana_cards(&self) -> Vec<Arc<Card>> {
        let mut cards = self.major.clone();
        sort_major(&mut cards);
        cards
    }

    pub fn get_minor_arcana_cards(&self) -> Vec<Arc<Card>> {
        let mut cards = self.minor.clone();
        sort_minor(&mut cards);
        cards
    }
}

fn sort_major(cards: &mut [Arc<Card>]) {
    cards.sort_by_key(|c| c.arcana().rank_value());
}

fn sort_minor(cards: &mut [Arc<Card>]) {
    cards.sort_by(|a, b| {
        let key = |c: &Card| (c.arcana().suit().map(Suit::label), c.arcana().rank_value());
        key(a).cmp(&key(b))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::TopSelection;
    use crate::shuffle::SecureShuffle;

    fn standard(seed: u64) -> Deck {
        Deck::standard(Box::new(SecureShuffle::with_seed(seed))).unwrap()
    }

    #[test]
    fn new_deck_is_in_canonical_order() {
        let deck = standard(1);
        assert_eq!(deck.major()[0].name(), "The Fool");
        assert_eq!(deck.minor()[0].name(), "Ace of Cups");
        assert_eq!(deck.minor()[77 - 22].name(), "King of Wands");
    }

    #[test]
    fn shuffle_keeps_arcana_partitioned() {
        let mut deck = standard(5);
        deck.shuffle();
        assert_eq!(deck.major().len(), 22);
        assert_eq!(deck.minor().len(), 56);
        assert!(deck.major().iter().all(|c| c.arcana().is_major()));
        assert!(deck.minor().iter().all(|c| !c.arcana().is_major()));
    }

    #[test]
    fn duplicate_identity_is_rejected() {
        let card = Card::new(
            Arcana::Major { rank: 0 },
            "The Fool",
            vec![],
            vec!["a".into()],
            vec!["b".into()],
        )
        .unwrap();
        let result = Deck::new(
            vec![card.clone(), card],
            vec![],
            Box::new(SecureShuffle::with_seed(0)),
        );
        assert!(matches!(result, Err(DeckError::DuplicateCard(_))));
    }

    #[test]
    fn misfiled_card_is_rejected() {
        let minor = Card::new(
            Arcana::Minor {
                suit: Suit::Cups,
                rank: MinorRank::Ace,
            },
            "Ace of Cups",
            vec![],
            vec!["a".into()],
            vec!["b".into()],
        )
        .unwrap();
        let result = Deck::new(vec![minor], vec![], Box::new(SecureShuffle::with_seed(0)));
        assert!(matches!(
            result,
            Err(DeckError::Misfiled {
                expected: "major",
                ..
            })
        ));
    }

    #[test]
    fn lookups_return_none_when_absent() {
        let deck = Deck::new(vec![], vec![], Box::new(SecureShuffle::with_seed(0))).unwrap();
        assert!(deck.get_major_arcana(0).is_none());
        assert!(deck.get_minor_arcana(Suit::Cups, MinorRank::Ace).is_none());
        assert!(deck.draw_cards(3, &mut TopSelection).is_empty());
    }

    #[test]
    fn bulk_queries_do_not_disturb_live_order() {
        let mut deck = standard(9);
        deck.shuffle();
        let before: Vec<CardId> = deck.cards().iter().map(|c| c.id().clone()).collect();
        let majors = deck.get_major_arcana_cards();
        assert_eq!(majors[21].name(), "The World");
        let swords = deck.get_cards(Suit::Swords);
        assert_eq!(swords.len(), 14);
        assert_eq!(swords[0].name(), "Ace of Swords");
        let after: Vec<CardId> = deck.cards().iter().map(|c| c.id().clone()).collect();
        assert_eq!(before, after);
    }
}
