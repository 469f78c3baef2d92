use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::LoadError;
use crate::numerals::to_roman;

/// Number of major arcana cards (ranks 0 through 21).
pub const MAJOR_ARCANA_COUNT: u8 = 22;

/// Classical element associated with each minor arcana suit.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Water,
    Air,
    Earth,
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Element::Fire => "Fire",
            Element::Water => "Water",
            Element::Air => "Air",
            Element::Earth => "Earth",
        };
        f.write_str(label)
    }
}

/// One of the four minor arcana suits.
/// Canonical deck order sorts suits by [`Suit::label`], not by declaration order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    /// Wands (Fire)
    Wands,
    /// Cups (Water)
    Cups,
    /// Swords (Air)
    Swords,
    /// Pentacles (Earth)
    Pentacles,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Wands, Suit::Cups, Suit::Swords, Suit::Pentacles];

    /// Canonical lowercase label, also used in card identities and data file names.
    pub fn label(self) -> &'static str {
        match self {
            Suit::Wands => "wands",
            Suit::Cups => "cups",
            Suit::Swords => "swords",
            Suit::Pentacles => "pentacles",
        }
    }

    pub fn element(self) -> Element {
        match self {
            Suit::Wands => Element::Fire,
            Suit::Cups => Element::Water,
            Suit::Swords => Element::Air,
            Suit::Pentacles => Element::Earth,
        }
    }

    /// Suits in canonical (label) order.
    pub fn canonical() -> [Suit; 4] {
        let mut suits = Suit::ALL;
        suits.sort_by_key(|s| s.label());
        suits
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Suit::Wands => "Wands",
            Suit::Cups => "Cups",
            Suit::Swords => "Swords",
            Suit::Pentacles => "Pentacles",
        };
        f.write_str(name)
    }
}

impl FromStr for Suit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Suit::ALL
            .into_iter()
            .find(|suit| suit.label() == lower)
            .ok_or_else(|| format!("unknown suit '{}'", s))
    }
}

/// Rank of a minor arcana card, Ace (1) through King (14).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum MinorRank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Page,
    Knight,
    Queen,
    King,
}

impl MinorRank {
    pub const ALL: [MinorRank; 14] = [
        MinorRank::Ace,
        MinorRank::Two,
        MinorRank::Three,
        MinorRank::Four,
        MinorRank::Five,
        MinorRank::Six,
        MinorRank::Seven,
        MinorRank::Eight,
        MinorRank::Nine,
        MinorRank::Ten,
        MinorRank::Page,
        MinorRank::Knight,
        MinorRank::Queen,
        MinorRank::King,
    ];

    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn from_value(v: u8) -> Option<MinorRank> {
        MinorRank::ALL.into_iter().find(|r| r.value() == v)
    }

    pub fn is_court(self) -> bool {
        self.value() > 10
    }

    pub fn name(self) -> &'static str {
        match self {
            MinorRank::Ace => "Ace",
            MinorRank::Two => "Two",
            MinorRank::Three => "Three",
            MinorRank::Four => "Four",
            MinorRank::Five => "Five",
            MinorRank::Six => "Six",
            MinorRank::Seven => "Seven",
            MinorRank::Eight => "Eight",
            MinorRank::Nine => "Nine",
            MinorRank::Ten => "Ten",
            MinorRank::Page => "Page",
            MinorRank::Knight => "Knight",
            MinorRank::Queen => "Queen",
            MinorRank::King => "King",
        }
    }
}

impl FromStr for MinorRank {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(v) = trimmed.parse::<u8>() {
            return MinorRank::from_value(v).ok_or_else(|| format!("rank out of range: {}", v));
        }
        MinorRank::ALL
            .into_iter()
            .find(|r| r.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| format!("unknown rank '{}'", s))
    }
}

/// Classification of a card: the tag consumers match on instead of
/// inspecting concrete types.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(tag = "arcana", rename_all = "lowercase")]
pub enum Arcana {
    /// Trump cards, ranked 0 (The Fool) to 21 (The World)
    Major { rank: u8 },
    /// Suited pip and court cards
    Minor { suit: Suit, rank: MinorRank },
}

impl Arcana {
    pub fn is_major(&self) -> bool {
        matches!(self, Arcana::Major { .. })
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Arcana::Major { .. } => "major",
            Arcana::Minor { .. } => "minor",
        }
    }

    /// Ordinal used for canonical ordering within the arcana.
    pub fn rank_value(&self) -> u8 {
        match self {
            Arcana::Major { rank } => *rank,
            Arcana::Minor { rank, .. } => rank.value(),
        }
    }

    pub fn suit(&self) -> Option<Suit> {
        match self {
            Arcana::Major { .. } => None,
            Arcana::Minor { suit, .. } => Some(*suit),
        }
    }

    /// Numeral shown on the card face: Roman for majors, the rank name for minors.
    pub fn numeral(&self) -> String {
        match self {
            Arcana::Major { rank } => to_roman(u16::from(*rank)),
            Arcana::Minor { rank, .. } => rank.name().to_string(),
        }
    }
}

/// Stable identity of a card, derived from its classification.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(String);

impl CardId {
    /// `major-NN` for major arcana, `minor-<suit>-NN` for minor arcana.
    pub fn derive(arcana: &Arcana) -> CardId {
        match arcana {
            Arcana::Major { rank } => CardId(format!("major-{:02}", rank)),
            Arcana::Minor { suit, rank } => {
                CardId(format!("minor-{}-{:02}", suit.label(), rank.value()))
            }
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An immutable tarot card record.
/// Built once by a card source and shared read-only by decks and readings.
/// Deserialization goes through [`Card::new`]; a serialized `id` must match
/// the one derived from the classification.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CardWire")]
pub struct Card {
    /// Identity derived from `arcana`
    id: CardId,
    /// Display name, e.g. "The Tower" or "Three of Cups"
    name: String,
    /// Ordered keywords
    keywords: Vec<String>,
    /// Upright meanings (non-empty)
    upright: Vec<String>,
    /// Reversed meanings (non-empty)
    reversed: Vec<String>,
    /// Major or minor classification with rank and suit
    #[serde(flatten)]
    arcana: Arcana,
    /// Optional symbolism or imagery notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

#[derive(Deserialize)]
struct CardWire {
    #[serde(default)]
    id: Option<CardId>,
    name: String,
    #[serde(default)]
    keywords: Vec<String>,
    upright: Vec<String>,
    reversed: Vec<String>,
    #[serde(flatten)]
    arcana: Arcana,
    #[serde(default)]
    description: Option<String>,
}

impl TryFrom<CardWire> for Card {
    type Error = LoadError;

    fn try_from(wire: CardWire) -> Result<Self, Self::Error> {
        let card = Card::new(
            wire.arcana,
            wire.name,
            wire.keywords,
            wire.upright,
            wire.reversed,
        )?;
        if let Some(id) = wire.id {
            if &id != card.id() {
                return Err(LoadError::malformed(
                    id.to_string(),
                    format!("identity does not match classification {}", card.id()),
                ));
            }
        }
        Ok(match wire.description {
            Some(desc) => card.with_description(desc),
            None => card,
        })
    }
}

impl Card {
    pub fn new(
        arcana: Arcana,
        name: impl Into<String>,
        keywords: Vec<String>,
        upright: Vec<String>,
        reversed: Vec<String>,
    ) -> Result<Card, LoadError> {
        let name = name.into();
        let id = CardId::derive(&arcana);
        if let Arcana::Major { rank } = arcana {
            if rank >= MAJOR_ARCANA_COUNT {
                return Err(LoadError::malformed(
                    id.to_string(),
                    format!("major rank {} out of range 0..=21", rank),
                ));
            }
        }
        if name.trim().is_empty() {
            return Err(LoadError::malformed(id.to_string(), "empty name"));
        }
        if upright.is_empty() {
            return Err(LoadError::malformed(id.to_string(), "no upright meanings"));
        }
        if reversed.is_empty() {
            return Err(LoadError::malformed(id.to_string(), "no reversed meanings"));
        }
        Ok(Card {
            id,
            name,
            keywords,
            upright,
            reversed,
            arcana,
            description: None,
        })
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Card {
        self.description = Some(description.into());
        self
    }

    pub fn id(&self) -> &CardId {
        &self.id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
    pub fn upright(&self) -> &[String] {
        &self.upright
    }
    pub fn reversed(&self) -> &[String] {
        &self.reversed
    }
    pub fn arcana(&self) -> Arcana {
        self.arcana
    }
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn meanings(&self, is_reversed: bool) -> &[String] {
        if is_reversed {
            &self.reversed
        } else {
            &self.upright
        }
    }

    /// Name with a reversal annotation, for plain text output.
    pub fn text_representation(&self, is_reversed: bool) -> String {
        if is_reversed {
            format!("{} (Reversed)", self.name)
        } else {
            self.name.clone()
        }
    }

    /// Single-line description for visual consumers (image prompts, card art lookup).
    pub fn rendering_description(&self, is_reversed: bool) -> String {
        let orientation = if is_reversed { "reversed" } else { "upright" };
        let class = match self.arcana {
            Arcana::Major { .. } => "major arcana".to_string(),
            Arcana::Minor { suit, .. } => {
                format!("minor arcana, suit of {} ({})", suit, suit.element())
            }
        };
        let mut out = match self.arcana {
            Arcana::Major { .. } => format!("{} {}", self.arcana.numeral(), self.name),
            Arcana::Minor { .. } => self.name.clone(),
        };
        out.push_str(&format!(" [{}], {}", class, orientation));
        if !self.keywords.is_empty() {
            out.push_str(&format!("; keywords: {}", self.keywords.join(", ")));
        }
        out.push_str(&format!("; meaning: {}", self.meanings(is_reversed).join("; ")));
        if let Some(desc) = &self.description {
            out.push_str(&format!("; imagery: {}", desc));
        }
        out
    }
}
