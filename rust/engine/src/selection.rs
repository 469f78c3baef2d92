//! Card selection strategies used by [`Deck::draw_cards`](crate::deck::Deck::draw_cards).

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::shuffle::{ShuffleKind, ShuffleStrategy};

/// Chooses up to `count` cards from a sequence.
///
/// Implementations return at most `min(count, from.len())` cards and only
/// cards present in `from`; a zero count yields an empty selection.
pub trait SelectionStrategy {
    fn name(&self) -> &'static str;

    fn select_cards(&mut self, from: &[Arc<Card>], count: usize) -> Vec<Arc<Card>>;
}

/// Takes cards from the top in their current order.
#[derive(Debug, Clone, Copy, Default)]
pub struct TopSelection;

impl SelectionStrategy for TopSelection {
    fn name(&self) -> &'static str {
        "top"
    }

    fn select_cards(&mut self, from: &[Arc<Card>], count: usize) -> Vec<Arc<Card>> {
        from.iter().take(count).cloned().collect()
    }
}

/// Shuffles a copy of the input with the wrapped strategy, then takes from the top.
#[derive(Debug, Clone, Default)]
pub struct RandomSelection<S> {
    shuffler: S,
}

impl<S: ShuffleStrategy> RandomSelection<S> {
    pub fn new(shuffler: S) -> Self {
        Self { shuffler }
    }
}

impl<S: ShuffleStrategy> SelectionStrategy for RandomSelection<S> {
    fn name(&self) -> &'static str {
        "random"
    }

    fn select_cards(&mut self, from: &[Arc<Card>], count: usize) -> Vec<Arc<Card>> {
        if count == 0 {
            return Vec::new();
        }
        let mut shuffled = self.shuffler.shuffle(from);
        shuffled.truncate(count);
        shuffled
    }
}

/// Configurable choice of selection strategy.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionKind {
    Top,
    #[default]
    Random,
}

impl SelectionKind {
    /// Builds the strategy; `Random` draws through a shuffle of kind `shuffle`.
    pub fn build(self, shuffle: ShuffleKind, seed: Option<u64>) -> Box<dyn SelectionStrategy> {
        match self {
            SelectionKind::Top => Box::new(TopSelection),
            SelectionKind::Random => Box::new(RandomSelection::new(shuffle.build(seed))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SelectionKind::Top => "top",
            SelectionKind::Random => "random",
        }
    }
}

impl fmt::Display for SelectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SelectionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "top" => Ok(SelectionKind::Top),
            "random" => Ok(SelectionKind::Random),
            other => Err(format!("unknown selection strategy '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Arcana;
    use crate::shuffle::SecureShuffle;

    fn major(rank: u8) -> Arc<Card> {
        Arc::new(
            Card::new(
                Arcana::Major { rank },
                format!("Card {}", rank),
                vec![],
                vec!["up".into()],
                vec!["down".into()],
            )
            .unwrap(),
        )
    }

    fn cards(n: u8) -> Vec<Arc<Card>> {
        (0..n).map(major).collect()
    }

    #[test]
    fn top_takes_prefix_in_order() {
        let from = cards(5);
        let picked = TopSelection.select_cards(&from, 3);
        let ranks: Vec<u8> = picked.iter().map(|c| c.arcana().rank_value()).collect();
        assert_eq!(ranks, vec![0, 1, 2]);
    }

    #[test]
    fn zero_count_is_empty() {
        let from = cards(5);
        assert!(TopSelection.select_cards(&from, 0).is_empty());
        let mut random = RandomSelection::new(SecureShuffle::with_seed(1));
        assert!(random.select_cards(&from, 0).is_empty());
    }

    #[test]
    fn oversized_count_truncates_silently() {
        let from = cards(4);
        assert_eq!(TopSelection.select_cards(&from, 10).len(), 4);
        let mut random = RandomSelection::new(SecureShuffle::with_seed(2));
        assert_eq!(random.select_cards(&from, 10).len(), 4);
    }

    #[test]
    fn random_selection_draws_distinct_input_cards() {
        let from = cards(22);
        let mut random = RandomSelection::new(SecureShuffle::with_seed(11));
        let picked = random.select_cards(&from, 10);
        assert_eq!(picked.len(), 10);
        let mut ids: Vec<_> = picked.iter().map(|c| c.id().clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 10);
        assert!(picked.iter().all(|c| from.iter().any(|f| f.id() == c.id())));
    }
}
