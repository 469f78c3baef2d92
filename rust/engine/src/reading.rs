use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::ReadingError;
use crate::spread::{Position, SpreadDefinition};

/// A card dealt into one position of a reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawnCard {
    /// The card, shared with the deck it came from
    pub card: Arc<Card>,
    /// The spread position it fills
    pub position: Position,
    /// Whether the card landed upside down
    pub is_reversed: bool,
}

impl DrawnCard {
    pub fn new(card: Arc<Card>, position: Position, is_reversed: bool) -> Self {
        Self {
            card,
            position,
            is_reversed,
        }
    }

    pub fn text_representation(&self) -> String {
        self.card.text_representation(self.is_reversed)
    }

    pub fn rendering_description(&self) -> String {
        self.card.rendering_description(self.is_reversed)
    }

    pub fn meanings(&self) -> &[String] {
        self.card.meanings(self.is_reversed)
    }
}

/// Result of laying cards into a spread.
/// Holds at most one drawn card per position; when the deck ran short the
/// trailing positions are simply absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ReadingWire")]
pub struct Reading {
    /// The spread this reading was generated from
    pub spread: Arc<SpreadDefinition>,
    /// Drawn cards in position declaration order
    pub drawn_cards: Vec<DrawnCard>,
    /// Generation time
    pub created_at: DateTime<Utc>,
    /// Optional question or note supplied by the querent
    #[serde(default)]
    pub context: Option<String>,
}

#[derive(Deserialize)]
struct ReadingWire {
    spread: Arc<SpreadDefinition>,
    drawn_cards: Vec<DrawnCard>,
    created_at: DateTime<Utc>,
    #[serde(default)]
    context: Option<String>,
}

impl TryFrom<ReadingWire> for Reading {
    type Error = ReadingError;

    /// Drawn cards must occupy the spread's leading positions in declaration order.
    fn try_from(wire: ReadingWire) -> Result<Self, Self::Error> {
        let positions = wire.spread.positions();
        if wire.drawn_cards.len() > positions.len() {
            return Err(ReadingError::TooManyCards {
                drawn: wire.drawn_cards.len(),
                positions: positions.len(),
            });
        }
        if let Some(slot) = wire
            .drawn_cards
            .iter()
            .zip(positions)
            .position(|(drawn, pos)| drawn.position != *pos)
        {
            return Err(ReadingError::PositionMismatch { slot });
        }
        Ok(Reading {
            spread: wire.spread,
            drawn_cards: wire.drawn_cards,
            created_at: wire.created_at,
            context: wire.context,
        })
    }
}

impl Reading {
    /// Every position received a card.
    pub fn is_complete(&self) -> bool {
        self.drawn_cards.len() == self.spread.card_count()
    }

    pub fn card_at(&self, position_index: usize) -> Option<&DrawnCard> {
        self.drawn_cards
            .iter()
            .find(|d| d.position.index == position_index)
    }

    pub fn reversed_count(&self) -> usize {
        self.drawn_cards.iter().filter(|d| d.is_reversed).count()
    }

    /// Multi-line text view of the reading in deal order.
    ///
    /// Each drawn card contributes a heading line with its deal rank, position
    /// name and card, followed by the position's significance and the
    /// orientation's meanings.
    pub fn basic_interpretation(&self) -> String {
        let mut lines = vec![self.spread.name().to_string()];
        if let Some(ctx) = &self.context {
            lines.push(format!("Question: {}", ctx));
        }
        let mut ordered: Vec<&DrawnCard> = self.drawn_cards.iter().collect();
        ordered.sort_by_key(|d| d.position.deal_order);
        for (n, drawn) in ordered.iter().enumerate() {
            lines.push(String::new());
            lines.push(format!(
                "{}. {}: {}",
                n + 1,
                drawn.position.name,
                drawn.text_representation()
            ));
            lines.push(format!("   {}", drawn.position.significance));
            lines.push(format!("   {}", drawn.meanings().join("; ")));
        }
        if !self.is_complete() {
            lines.push(String::new());
            lines.push(format!(
                "({} of {} positions filled)",
                self.drawn_cards.len(),
                self.spread.card_count()
            ));
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Arcana;
    use crate::spread::LayoutEntry;

    fn card(rank: u8, name: &str) -> Arc<Card> {
        Arc::new(
            Card::new(
                Arcana::Major { rank },
                name,
                vec![],
                vec![format!("{} upright", name)],
                vec![format!("{} reversed", name)],
            )
            .unwrap(),
        )
    }

    fn reversed_deal_spread() -> Arc<SpreadDefinition> {
        Arc::new(
            SpreadDefinition::new(
                "pair",
                "Pair",
                "",
                vec![
                    Position::new(0, "Second", "read last", 1),
                    Position::new(1, "First", "read first", 0),
                ],
                vec![LayoutEntry::at(0, 0.0, 0.0), LayoutEntry::at(1, 1.0, 0.0)],
                true,
            )
            .unwrap(),
        )
    }

    #[test]
    fn interpretation_follows_deal_order() {
        let spread = reversed_deal_spread();
        let reading = Reading {
            drawn_cards: vec![
                DrawnCard::new(card(1, "The Magician"), spread.positions()[0].clone(), false),
                DrawnCard::new(card(2, "The High Priestess"), spread.positions()[1].clone(), true),
            ],
            spread,
            created_at: Utc::now(),
            context: Some("What next?".into()),
        };
        let text = reading.basic_interpretation();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Pair");
        assert_eq!(lines[1], "Question: What next?");
        assert_eq!(lines[3], "1. First: The High Priestess (Reversed)");
        assert_eq!(lines[4], "   read first");
        assert_eq!(lines[5], "   The High Priestess reversed");
        assert_eq!(lines[7], "2. Second: The Magician");
        assert!(reading.is_complete());
        assert_eq!(reading.reversed_count(), 1);
    }

    #[test]
    fn deserialization_checks_positions_against_spread() {
        let spread = reversed_deal_spread();
        let reading = Reading {
            drawn_cards: vec![DrawnCard::new(
                card(4, "The Emperor"),
                spread.positions()[0].clone(),
                false,
            )],
            spread,
            created_at: Utc::now(),
            context: None,
        };
        let mut value = serde_json::to_value(&reading).unwrap();
        let back: Reading = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(back, reading);

        value["drawn_cards"][0]["position"]["name"] = "Elsewhere".into();
        assert!(serde_json::from_value::<Reading>(value.clone()).is_err());

        value["drawn_cards"][0]["position"] =
            serde_json::to_value(&reading.spread.positions()[0]).unwrap();
        let extra = value["drawn_cards"][0].clone();
        let drawn = value["drawn_cards"].as_array_mut().unwrap();
        drawn.push(extra.clone());
        drawn.push(extra);
        let err = serde_json::from_value::<Reading>(value).unwrap_err();
        assert!(err.to_string().contains("exceed"));
    }

    #[test]
    fn interpretation_is_deterministic() {
        let spread = reversed_deal_spread();
        let reading = Reading {
            drawn_cards: vec![DrawnCard::new(
                card(3, "The Empress"),
                spread.positions()[0].clone(),
                false,
            )],
            spread,
            created_at: Utc::now(),
            context: None,
        };
        assert_eq!(reading.basic_interpretation(), reading.basic_interpretation());
        assert!(!reading.is_complete());
        assert!(reading.basic_interpretation().ends_with("(1 of 2 positions filled)"));
        assert!(reading.card_at(0).is_some());
        assert!(reading.card_at(1).is_none());
    }
}
